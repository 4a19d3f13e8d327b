//! Hosted model integrations for Scriptorium.
//!
//! Each provider lives behind its own feature flag. Gemini is enabled by
//! default.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use scriptorium_core::{GenerateRequest, ScriptoriumConfig};
//! use scriptorium_interface::TextGenerator;
//! use scriptorium_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScriptoriumConfig::load()?;
//! let client = GeminiClient::from_env(&config.gemini)?;
//! let request = GenerateRequest::builder().prompt("Olá").build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GeminiClient,
    GenerationConfig, Part, api_key_from_env,
};
