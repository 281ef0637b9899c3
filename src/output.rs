//! Transcript persistence: deterministic output naming and writing.

use crate::error::{BatchscribeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Appended to the input's stem when naming its transcript.
pub const TRANSCRIPT_SUFFIX: &str = "_transcript";

/// Compute the transcript path for `original` inside `output_dir`:
/// `<stem>_transcript.txt`, where the stem is the base name with the audio
/// extension stripped.
pub fn transcript_path(original: &Path, output_dir: &Path) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{stem}{TRANSCRIPT_SUFFIX}.txt"))
}

/// Write the transcript for `original` into `output_dir`, overwriting any
/// existing file of the same name (last-writer-wins).
pub fn save_transcript(text: &str, original: &Path, output_dir: &Path) -> Result<PathBuf> {
    let path = transcript_path(original, output_dir);
    fs::write(&path, text).map_err(|e| BatchscribeError::TranscriptWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}
