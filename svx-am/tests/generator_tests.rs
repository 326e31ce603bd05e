//! End-to-end tests for manifest generation
//!
//! Each test runs the full scan / order / render / write cycle against a
//! temporary directory tree and inspects the bytes written to disk.

use std::fs;
use std::path::Path;

use svx_am::config::GeneratorConfig;
use svx_am::{generate, Error};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"audio-bytes").unwrap();
}

fn config_for(source_dir: &Path, output_path: &Path) -> GeneratorConfig {
    GeneratorConfig {
        source_dir: source_dir.to_path_buf(),
        output_path: output_path.to_path_buf(),
    }
}

#[test]
fn test_generates_exact_manifest_for_known_files() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();

    // Distinct sort keys: no digits (-1), then 2, then 10.
    touch(&audio, "intro.mp3");
    touch(&audio, "script2.mp3");
    touch(&audio, "take10.mp3");

    let output = temp.path().join("audioFiles.ts");
    let summary = generate(&config_for(&audio, &output)).unwrap();
    assert_eq!(summary.files_mapped, 3);

    let expected = "\
import script1 from './audio/intro.mp3';
import script2 from './audio/script2.mp3';
import script3 from './audio/take10.mp3';

const audioFiles = {
  1: script1,
  2: script2,
  3: script3,
};

export default audioFiles;";
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_orders_numerically_not_lexicographically() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();

    touch(&audio, "script10.mp3");
    touch(&audio, "script2.mp3");
    touch(&audio, "script100.mp3");

    let output = temp.path().join("audioFiles.ts");
    generate(&config_for(&audio, &output)).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let expected_imports = "\
import script1 from './audio/script2.mp3';
import script2 from './audio/script10.mp3';
import script3 from './audio/script100.mp3';";
    assert!(
        content.starts_with(expected_imports),
        "unexpected import order:\n{}",
        content
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();
    touch(&audio, "script1.mp3");
    touch(&audio, "script2.mp3");

    let output = temp.path().join("audioFiles.ts");
    let config = config_for(&audio, &output);

    generate(&config).unwrap();
    let first = fs::read(&output).unwrap();

    generate(&config).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_source_dir_writes_empty_manifest() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();

    let output = temp.path().join("audioFiles.ts");
    let summary = generate(&config_for(&audio, &output)).unwrap();
    assert_eq!(summary.files_mapped, 0);

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "\n\nconst audioFiles = {\n\n};\n\nexport default audioFiles;"
    );
}

#[test]
fn test_missing_source_dir_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("does-not-exist");

    let output = temp.path().join("audioFiles.ts");
    let summary = generate(&config_for(&audio, &output)).unwrap();
    assert_eq!(summary.files_mapped, 0);

    // The (empty) manifest is still written.
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "\n\nconst audioFiles = {\n\n};\n\nexport default audioFiles;"
    );
}

#[test]
fn test_missing_output_parent_is_an_error() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();
    touch(&audio, "script1.mp3");

    let output = temp.path().join("no-such-dir").join("audioFiles.ts");
    let result = generate(&config_for(&audio, &output));
    assert!(matches!(result, Err(Error::Write(_, _))));
}

#[test]
fn test_overwrite_replaces_previous_manifest_entirely() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();
    touch(&audio, "script1.mp3");
    touch(&audio, "script2.mp3");

    let output = temp.path().join("audioFiles.ts");
    let config = config_for(&audio, &output);
    generate(&config).unwrap();

    // Shrink the source set; the stale entry must disappear.
    fs::remove_file(audio.join("script2.mp3")).unwrap();
    generate(&config).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("import script1 from './audio/script1.mp3';"));
    assert!(!content.contains("script2.mp3"));
}

#[test]
fn test_skips_non_audio_files_and_subdirectories() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();

    touch(&audio, "script1.mp3");
    touch(&audio, "notes.txt");
    touch(&audio, "cover.png");

    // Audio inside a subdirectory is out of scope; the scan is flat.
    let nested = audio.join("nested");
    fs::create_dir(&nested).unwrap();
    touch(&nested, "script2.mp3");

    let output = temp.path().join("audioFiles.ts");
    let summary = generate(&config_for(&audio, &output)).unwrap();
    assert_eq!(summary.files_mapped, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("script1.mp3"));
    assert!(!content.contains("notes.txt"));
    assert!(!content.contains("nested"));
}

#[test]
fn test_extension_match_ignores_case() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();
    touch(&audio, "SHOUT.MP3");

    let output = temp.path().join("audioFiles.ts");
    let summary = generate(&config_for(&audio, &output)).unwrap();
    assert_eq!(summary.files_mapped, 1);
    assert!(fs::read_to_string(&output)
        .unwrap()
        .contains("import script1 from './audio/SHOUT.MP3';"));
}

#[test]
fn test_output_above_source_uses_parent_relative_import() {
    let temp = TempDir::new().unwrap();
    let audio = temp.path().join("audio");
    fs::create_dir(&audio).unwrap();
    touch(&audio, "script1.mp3");

    let out_dir = temp.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    let output = out_dir.join("audioFiles.ts");

    generate(&config_for(&audio, &output)).unwrap();

    // The `./` prefix is kept even when the path climbs out of the
    // output directory.
    let content = fs::read_to_string(&output).unwrap();
    assert!(
        content.contains("import script1 from './../audio/script1.mp3';"),
        "parent-relative import missing:\n{}",
        content
    );
}
