//! Speech-to-text boundary: the `Transcriber` trait and its remote
//! implementation.

pub mod openai;
pub mod transcriber;

pub use openai::OpenAiTranscriber;
pub use transcriber::{MockTranscriber, Transcriber};
