//! Manifest construction and rendering
//!
//! Turns an ordered list of audio files into the generated import/mapping
//! module: one import line per file, then an object literal keyed by the
//! 1-based ordinal of each file, then a default export. The previous file
//! content is fully overwritten on every run; nothing is merged.

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// One generated (identifier, import path) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 1-based position after sorting; also the mapping key
    pub ordinal: usize,
    /// Generated identifier, `script{ordinal}`
    pub identifier: String,
    /// Forward-slash import path, always prefixed with `./`
    pub import_path: String,
}

/// The generated manifest: an ordered sequence of entries ready to render
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build manifest entries from files already in their final order.
    ///
    /// Identifiers are purely positional (`script1`, `script2`, ...) and
    /// carry no relation to any number embedded in the filename. Import
    /// paths are computed relative to the output file's containing
    /// directory.
    pub fn build(ordered_files: &[PathBuf], output_path: &Path) -> Self {
        let base = output_path.parent().unwrap_or_else(|| Path::new(""));

        let entries = ordered_files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let ordinal = index + 1;
                ManifestEntry {
                    ordinal,
                    identifier: format!("script{}", ordinal),
                    import_path: import_path(file, base),
                }
            })
            .collect();

        Self { entries }
    }

    /// Number of mapped audio files
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Render the manifest module source text.
    ///
    /// The layout is fixed: import lines, a blank separator, the mapping
    /// object, a blank separator, the default export. No trailing newline.
    /// An empty manifest still renders the full skeleton with an empty
    /// mapping object.
    pub fn render(&self) -> String {
        let imports = self
            .entries
            .iter()
            .map(|entry| format!("import {} from '{}';", entry.identifier, entry.import_path))
            .collect::<Vec<_>>()
            .join("\n");

        let mappings = self
            .entries
            .iter()
            .map(|entry| format!("  {}: {},", entry.ordinal, entry.identifier))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\nconst audioFiles = {{\n{}\n}};\n\nexport default audioFiles;",
            imports, mappings
        )
    }

    /// Truncate and write the rendered manifest to `output_path`.
    ///
    /// A missing parent directory surfaces as [`Error::Write`]; no
    /// directories are created on the caller's behalf.
    pub fn write_to(&self, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.render())
            .map_err(|e| Error::Write(output_path.to_path_buf(), e.to_string()))
    }
}

/// Import path for `file` as seen from `base`: relative, forward-slash
/// separated, `./`-prefixed.
fn import_path(file: &Path, base: &Path) -> String {
    let relative = relative_to(file, base);
    let joined = relative
        .iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    // Prefix applies even to paths that already start with "../".
    format!("./{}", joined)
}

/// Compute `file` relative to `base` lexically, without touching the
/// filesystem. Mixed absolute/relative inputs are anchored to the working
/// directory first so the component diff compares like with like.
fn relative_to(file: &Path, base: &Path) -> PathBuf {
    let (file_parts, base_parts) = if file.is_absolute() == base.is_absolute() {
        (normalize(file), normalize(base))
    } else {
        let cwd = std::env::current_dir().unwrap_or_default();
        (normalize(&anchor(&cwd, file)), normalize(&anchor(&cwd, base)))
    };

    let common = file_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in file_parts.iter().skip(common) {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

fn anchor(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Flatten a path into its normal components, resolving `.` and `..`
/// lexically. Excess `..` above an absolute root is dropped; for relative
/// paths it is kept so the anchor stays honest.
fn normalize(path: &Path) -> Vec<OsString> {
    let absolute = path.is_absolute();
    let mut parts: Vec<OsString> = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_os_string()),
            Component::ParentDir => {
                if matches!(parts.last(), Some(last) if last != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push(OsString::from(".."));
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    parts
}
