//! Audio file discovery
//!
//! Enumerates audio files directly inside the source directory. No
//! recursion: the manifest only describes the top level, so traversal is
//! pinned to depth 1. Discovery order is whatever the filesystem yields;
//! later stages rely on that order as the stable-sort tie-break.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extension accepted by the manifest generator
pub const AUDIO_EXTENSION: &str = "mp3";

/// Scan the source directory for audio files.
///
/// A missing or unreadable directory is not an error: it yields an empty
/// list, and the caller writes an empty manifest. Unreadable entries are
/// logged and skipped.
pub fn scan_audio_files(source_dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_audio_extension(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", source_dir.display(), e);
            }
        }
    }

    tracing::debug!(
        count = files.len(),
        source = %source_dir.display(),
        "Audio file scan complete"
    );

    files
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(AUDIO_EXTENSION))
        .unwrap_or(false)
}
