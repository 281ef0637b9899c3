//! Run configuration: model catalog, API credential, and the resolved
//! parameters that govern one batch execution.

use crate::error::{BatchscribeError, Result};
use crate::scan;
use std::path::{Path, PathBuf};

/// Remote transcription models offered by the wizard. The first entry is the
/// recommended default.
pub const MODELS: &[&str] = &["gpt-4o-transcribe", "gpt-4o-mini-transcribe", "whisper-1"];

/// Model used when none is chosen explicitly.
pub const DEFAULT_MODEL: &str = MODELS[0];

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Read the API credential from the environment.
///
/// Call after `dotenvy::dotenv()` so a `.env` file next to the binary works.
/// A missing or blank value is a fatal startup error.
pub fn load_api_key() -> Result<String> {
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(BatchscribeError::MissingApiKey),
    }
}

/// How the input files were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One operator-specified file.
    Single,
    /// A directory scan with multi-select.
    Multiple,
}

/// Fully resolved parameters for one batch run. Built once by the wizard or
/// the implicit `--all` resolver, immutable afterward.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: RunMode,
    /// Processing order. Non-empty; duplicates are kept as given.
    pub selected_files: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub model: String,
    /// Context hint for the model. `None` means the request omits the field.
    pub prompt: Option<String>,
}

impl RunConfig {
    /// Resolve the non-interactive variant: scan `input_dir` and transcribe
    /// everything found there, writing transcripts into the same directory
    /// unless `output_dir` overrides it.
    ///
    /// Zero discovered files is a hard stop, not an empty run.
    pub fn implicit(
        input_dir: &Path,
        model: Option<String>,
        prompt: Option<String>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let output_dir = output_dir.unwrap_or_else(|| input_dir.to_path_buf());
        if !output_dir.is_dir() {
            return Err(BatchscribeError::OutputDirMissing {
                path: output_dir.display().to_string(),
            });
        }

        let selected_files = scan::find_audio_files(input_dir);
        if selected_files.is_empty() {
            return Err(BatchscribeError::NoAudioFiles {
                directory: input_dir.display().to_string(),
            });
        }

        Ok(Self {
            mode: RunMode::Multiple,
            selected_files,
            output_dir,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            prompt: prompt.filter(|p| !p.trim().is_empty()),
        })
    }

    /// Human-readable summary shown before the confirmation step.
    pub fn summary(&self) -> String {
        let mut out = String::from("Configuration:\n");
        out.push_str(&format!(
            "  Mode:    {}\n",
            match self.mode {
                RunMode::Single => "single file",
                RunMode::Multiple => "multiple files",
            }
        ));
        out.push_str(&format!("  Files:   {}\n", self.selected_files.len()));
        for file in &self.selected_files {
            out.push_str(&format!("           - {}\n", file.display()));
        }
        out.push_str(&format!("  Output:  {}\n", self.output_dir.display()));
        out.push_str(&format!("  Model:   {}\n", self.model));
        out.push_str(&format!(
            "  Prompt:  {}\n",
            self.prompt.as_deref().unwrap_or("(none)")
        ));
        out
    }
}
