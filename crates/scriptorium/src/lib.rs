//! Scriptorium - markdown eBooks from a topic and a tone.
//!
//! Scriptorium sends a topic and a voice preset to a hosted text-generation
//! model, asks for a few cover ideas, and hands back the result as a
//! markdown document ready to save.
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use std::sync::Arc;
//! use scriptorium::{
//!     EbookClient, EbookExport, GeminiClient, GenerationController, GenerationRequest,
//!     ScriptoriumConfig, Tone,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScriptoriumConfig::load()?;
//! let backend = GeminiClient::from_env(&config.gemini)?;
//! let mut controller = GenerationController::new(
//!     EbookClient::new(Arc::new(backend)),
//!     config.generator.outline_delay(),
//! );
//!
//! controller
//!     .submit(GenerationRequest::new("Marketing Digital", Tone::Persuasive)?)
//!     .await;
//!
//! if let Some(result) = controller.result() {
//!     EbookExport::from(&result).write_to(".")?;
//! }
//! # Ok(())
//! # }
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` (default) - Google Gemini backend
//! - `api` - enables tests that call the real API
//!
//! # Architecture
//!
//! - `scriptorium_error` - Error types
//! - `scriptorium_core` - Data model, prompts, export, configuration
//! - `scriptorium_interface` - `TextGenerator` trait
//! - `scriptorium_models` - Gemini REST client
//! - `scriptorium_generator` - Generation client and state controller
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]

mod observability;

pub use observability::{LoggingConfig, init_logging};

pub use scriptorium_core::*;
pub use scriptorium_error::*;
pub use scriptorium_generator::*;
pub use scriptorium_interface::*;

#[cfg(feature = "gemini")]
pub use scriptorium_models::{GeminiClient, api_key_from_env};
