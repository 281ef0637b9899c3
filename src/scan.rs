//! Directory scanning for candidate audio files.

use std::fs;
use std::path::{Path, PathBuf};

/// The only audio container batchscribe accepts.
pub const AUDIO_EXTENSION: &str = "mp3";

/// Check whether a path carries the accepted audio extension (case-insensitive).
pub fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(AUDIO_EXTENSION))
}

/// List the MP3 files in `directory` (flat, non-recursive), in listing order.
///
/// An unreadable or missing directory is reported on stderr and yields an
/// empty list rather than an error, so callers must treat an empty result as
/// a normal outcome and tell the operator about it.
pub fn find_audio_files(directory: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory {}: {}", directory.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| has_audio_extension(path))
        .collect()
}
