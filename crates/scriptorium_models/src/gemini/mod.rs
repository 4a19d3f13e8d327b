//! Google Gemini REST API client.
//!
//! [`GeminiClient`] sends single-turn `generateContent` requests over HTTPS
//! and flattens the first candidate's text parts into one string.

mod client;
mod protocol;

pub use client::{GeminiClient, api_key_from_env};
pub use protocol::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, scriptorium_error::GeminiError>;
