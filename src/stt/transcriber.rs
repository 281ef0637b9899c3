use crate::error::{BatchscribeError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Trait for remote speech-to-text transcription.
///
/// This trait allows swapping implementations (real API client vs mock).
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one audio file to text.
    ///
    /// # Arguments
    /// * `audio_path` - Path to the audio file to submit
    /// * `model` - Remote model identifier
    /// * `prompt` - Optional context hint; blank values are omitted from the request
    ///
    /// # Returns
    /// The recognized transcript as plain text, or an error carrying the
    /// file identity and underlying cause. No retry is performed.
    async fn transcribe(
        &self,
        audio_path: &Path,
        model: &str,
        prompt: Option<&str>,
    ) -> Result<String>;
}

/// Normalize a prompt for submission: trim it, and treat blank as absent.
pub fn effective_prompt(prompt: Option<&str>) -> Option<&str> {
    prompt.map(str::trim).filter(|p| !p.is_empty())
}

/// Mock transcriber for testing.
///
/// Records every call and can be scripted to fail for specific file names.
pub struct MockTranscriber {
    response: String,
    fail_files: Vec<String>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockTranscriber {
    /// Create a mock that answers every call with a fixed transcript.
    pub fn new() -> Self {
        Self {
            response: "mock transcription".to_string(),
            fail_files: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the mock to fail for a given file name (e.g. "b.mp3")
    pub fn with_failure_for(mut self, file_name: &str) -> Self {
        self.fail_files.push(file_name.to_string());
        self
    }

    /// Paths passed to `transcribe`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(
        &self,
        audio_path: &Path,
        _model: &str,
        _prompt: Option<&str>,
    ) -> Result<String> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(audio_path.to_path_buf());

        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.fail_files.iter().any(|f| f == &file_name) {
            Err(BatchscribeError::Transcription {
                file: file_name,
                message: "mock transcription failure".to_string(),
            })
        } else {
            Ok(self.response.clone())
        }
    }
}
