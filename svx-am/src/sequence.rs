//! Filename sequencing
//!
//! Audio files are ordered by the first contiguous run of decimal digits
//! found anywhere in the file stem (`script12_final.mp3` sorts as 12). The
//! extension is never scanned, so `intro.mp3` has no digits and takes the
//! sentinel key -1, sorting before every numbered file. The sort is stable,
//! so ties and missing keys keep their discovery order, which keeps repeated
//! runs deterministic.

use std::path::{Path, PathBuf};

/// Sort key used when the file stem contains no digit run
pub const NO_SEQUENCE_KEY: i64 = -1;

/// Extract the first contiguous run of decimal digits from a file stem.
///
/// Returns `None` when the stem contains no digits. Runs longer than an
/// `i64` saturate at `i64::MAX`, so pathological names still sort after
/// every normally-numbered file instead of failing.
pub fn extract_sequence(stem: &str) -> Option<i64> {
    let mut digits = stem
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .peekable();
    digits.peek()?;

    let mut value: i64 = 0;
    for c in digits {
        let digit = i64::from(c as u8 - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }
    Some(value)
}

/// Sort key for a file path: the extracted sequence number of its file stem,
/// or [`NO_SEQUENCE_KEY`] when there is none. Only the stem is scanned; the
/// digit in an `.mp3` extension never becomes a key.
pub fn sort_key(path: &Path) -> i64 {
    let stem = path
        .file_stem()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    extract_sequence(&stem).unwrap_or(NO_SEQUENCE_KEY)
}

/// Stable-sort files ascending by extracted sequence number.
///
/// Entries with equal or missing keys retain their original discovery order
/// relative to each other.
pub fn order_by_sequence(mut files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.sort_by_key(|file| sort_key(file));
    files
}
