//! OpenAI audio transcription client.

use crate::error::{BatchscribeError, Result};
use crate::stt::transcriber::{effective_prompt, Transcriber};
use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for `POST /v1/audio/transcriptions`.
///
/// Holds the credential loaded once at startup; one instance serves the whole
/// batch, one request at a time.
pub struct OpenAiTranscriber {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiTranscriber {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn item_error(audio_path: &Path, message: String) -> BatchscribeError {
        BatchscribeError::Transcription {
            file: audio_path.display().to_string(),
            message,
        }
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(
        &self,
        audio_path: &Path,
        model: &str,
        prompt: Option<&str>,
    ) -> Result<String> {
        let bytes = tokio::fs::read(audio_path)
            .await
            .map_err(|e| Self::item_error(audio_path, format!("failed to read audio: {e}")))?;

        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.mp3".to_string());

        let file_part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/mpeg")
            .map_err(|e| Self::item_error(audio_path, format!("mime: {e}")))?;

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("model", model.to_string())
            .text("response_format", "json");

        if let Some(hint) = effective_prompt(prompt) {
            form = form.text("prompt", hint.to_string());
        }

        let url = format!("{}/audio/transcriptions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Self::item_error(audio_path, format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Self::item_error(
                audio_path,
                format!("status {}: {}", status, body),
            ));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| Self::item_error(audio_path, format!("body: {e}")))?;

        Ok(parsed.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;
    use tempfile::tempdir;

    /// One-shot HTTP server on an ephemeral port. Captures the raw request,
    /// answers with `response_body` as JSON, and hands the request back
    /// through the join handle.
    fn spawn_one_shot_server(response_body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];

            loop {
                let n = stream.read(&mut chunk).expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);

                if let Some(header_end) = find_header_end(&request) {
                    let headers = String::from_utf8_lossy(&request[..header_end]);
                    match content_length(&headers) {
                        Some(len) if request.len() >= header_end + 4 + len => break,
                        // No Content-Length: stop at the closing multipart boundary
                        None if request.ends_with(b"--\r\n") => break,
                        _ => {}
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                response_body.len(),
                response_body
            );
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush response");

            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    fn find_header_end(bytes: &[u8]) -> Option<usize> {
        bytes.windows(4).position(|w| w == b"\r\n\r\n")
    }

    fn content_length(headers: &str) -> Option<usize> {
        headers
            .lines()
            .find(|line| line.to_ascii_lowercase().starts_with("content-length:"))
            .and_then(|line| line.split(':').nth(1))
            .and_then(|value| value.trim().parse().ok())
    }

    #[tokio::test]
    async fn test_request_carries_model_and_omits_blank_prompt() {
        let dir = tempdir().unwrap();
        let audio = dir.path().join("talk.mp3");
        std::fs::write(&audio, b"ID3 fake mp3 payload").unwrap();

        let (base_url, server) = spawn_one_shot_server(r#"{"text":"hi there"}"#);
        let client = OpenAiTranscriber::new("sk-test".to_string()).with_base_url(&base_url);

        let text = client
            .transcribe(&audio, "whisper-1", Some("   "))
            .await
            .unwrap();
        assert_eq!(text, "hi there");

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /audio/transcriptions"));
        assert!(request.contains("Bearer sk-test"));
        assert!(request.contains("name=\"file\""));
        assert!(request.contains("filename=\"talk.mp3\""));
        assert!(request.contains("audio/mpeg"));
        assert!(request.contains("name=\"model\""));
        assert!(request.contains("whisper-1"));
        assert!(request.contains("name=\"response_format\""));
        assert!(request.contains("json"));
        // A blank prompt is omitted from the form, not sent as an empty field
        assert!(!request.contains("name=\"prompt\""));
    }

    #[tokio::test]
    async fn test_request_includes_trimmed_prompt_when_present() {
        let dir = tempdir().unwrap();
        let audio = dir.path().join("panel.mp3");
        std::fs::write(&audio, b"ID3 fake mp3 payload").unwrap();

        let (base_url, server) = spawn_one_shot_server(r#"{"text":"ok"}"#);
        let client = OpenAiTranscriber::new("sk-test".to_string()).with_base_url(&base_url);

        let text = client
            .transcribe(&audio, "gpt-4o-transcribe", Some("  a panel discussion  "))
            .await
            .unwrap();
        assert_eq!(text, "ok");

        let request = server.join().unwrap();
        assert!(request.contains("name=\"prompt\""));
        assert!(request.contains("a panel discussion"));
        assert!(request.contains("gpt-4o-transcribe"));
    }

    #[tokio::test]
    async fn test_error_status_surfaces_file_and_body() {
        let dir = tempdir().unwrap();
        let audio = dir.path().join("talk.mp3");
        std::fs::write(&audio, b"ID3 fake mp3 payload").unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut chunk = [0u8; 4096];
            let mut request = Vec::new();
            loop {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(header_end) = find_header_end(&request) {
                    let headers = String::from_utf8_lossy(&request[..header_end]);
                    if let Some(len) = content_length(&headers) {
                        if request.len() >= header_end + 4 + len {
                            break;
                        }
                    }
                }
            }
            let body = r#"{"error":{"message":"quota exceeded"}}"#;
            let response = format!(
                "HTTP/1.1 429 Too Many Requests\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        let client = OpenAiTranscriber::new("sk-test".to_string())
            .with_base_url(&format!("http://{}", addr));
        let err = client
            .transcribe(&audio, "whisper-1", None)
            .await
            .unwrap_err();
        server.join().unwrap();

        match err {
            BatchscribeError::Transcription { file, message } => {
                assert!(file.ends_with("talk.mp3"));
                assert!(message.contains("429"));
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("Expected Transcription error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client = OpenAiTranscriber::new("sk-test".to_string())
            .with_base_url("http://localhost:9999/v1/");
        assert_eq!(client.base_url, "http://localhost:9999/v1");
    }

    #[test]
    fn test_default_base_url() {
        let client = OpenAiTranscriber::new("sk-test".to_string());
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_response_deserializes_text_field() {
        let parsed: TranscriptionResponse =
            serde_json::from_str(r#"{"text":"hello world","language":"en"}"#).unwrap();
        assert_eq!(parsed.text, "hello world");
    }

    #[tokio::test]
    async fn test_unreadable_file_surfaces_item_error() {
        let client = OpenAiTranscriber::new("sk-test".to_string());
        let err = client
            .transcribe(Path::new("/no/such/file.mp3"), "whisper-1", None)
            .await
            .unwrap_err();
        match err {
            BatchscribeError::Transcription { file, message } => {
                assert_eq!(file, "/no/such/file.mp3");
                assert!(message.contains("failed to read audio"));
            }
            other => panic!("Expected Transcription error, got {other:?}"),
        }
    }
}
