//! Error types for batchscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchscribeError {
    // Startup errors
    #[error(
        "OPENAI_API_KEY environment variable is required. Export it or add it to a .env file"
    )]
    MissingApiKey,

    // Configuration errors
    #[error("No MP3 files found in {directory}")]
    NoAudioFiles { directory: String },

    #[error("Output directory does not exist: {path}")]
    OutputDirMissing { path: String },

    // Per-item errors
    #[error("Transcription failed for {file}: {message}")]
    Transcription { file: String, message: String },

    #[error("Failed to write transcript to {path}: {message}")]
    TranscriptWrite { path: String, message: String },

    // Interactive prompt errors
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, BatchscribeError>;
