//! Model-level request and response types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sampling parameters sent with a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Nucleus (top-p) sampling cutoff
    pub top_p: f32,
    /// Maximum number of output tokens
    pub max_output_tokens: u32,
}

impl SamplingConfig {
    /// Fixed parameters for eBook content generation.
    pub const EBOOK: SamplingConfig = SamplingConfig {
        temperature: 0.7,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 8192,
    };
}

/// Single-prompt generation request.
///
/// # Examples
///
/// ```
/// use scriptorium_core::{GenerateRequest, SamplingConfig};
///
/// let request = GenerateRequest::builder()
///     .prompt("Escreva um haicai sobre o mar")
///     .sampling(SamplingConfig::EBOOK)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Escreva um haicai sobre o mar");
/// assert!(request.model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct GenerateRequest {
    /// Prompt text sent as a single user turn
    #[builder(setter(into))]
    prompt: String,
    /// Model override; the backend default is used when `None`
    #[builder(default, setter(into, strip_option))]
    model: Option<String>,
    /// Sampling parameters; the service defaults apply when `None`
    #[builder(default, setter(strip_option))]
    sampling: Option<SamplingConfig>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Text returned by a generation call.
///
/// `text` is `None` when the service answered without any text part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// Concatenated text of the first candidate
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Response carrying the given text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}
