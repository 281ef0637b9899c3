//! Command-line interface for batchscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Batch MP3 transcription via the OpenAI audio API
#[derive(Parser, Debug)]
#[command(
    name = "batchscribe",
    version,
    about = "Batch MP3 transcription via the OpenAI audio API"
)]
pub struct Cli {
    /// Transcribe every MP3 in the current directory without prompting
    #[arg(long)]
    pub all: bool,

    /// Transcription model for --all runs (default: gpt-4o-transcribe)
    #[arg(long, value_name = "MODEL", requires = "all")]
    pub model: Option<String>,

    /// Context hint passed to the model for --all runs
    #[arg(long, value_name = "TEXT", requires = "all")]
    pub prompt: Option<String>,

    /// Output directory for --all runs (default: current directory)
    #[arg(long, value_name = "DIR", requires = "all")]
    pub output: Option<PathBuf>,
}
