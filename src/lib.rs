//! batchscribe - Batch MP3 transcription via the OpenAI audio API
//!
//! Discovers MP3 files, resolves a run configuration (interactive wizard or
//! implicit `--all` mode), transcribes each file sequentially through the
//! remote API, and writes one transcript per success. One file's failure
//! never aborts the batch.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;
pub mod scan;
pub mod stt;
pub mod wizard;

// Core boundary trait
pub use stt::transcriber::Transcriber;

// Error handling
pub use error::{BatchscribeError, Result};

// Config
pub use config::{RunConfig, RunMode};

// Batch execution
pub use runner::{run_batch, RunSummary};

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
