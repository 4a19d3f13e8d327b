//! Error types for Scriptorium.
//!
//! This crate provides the error types used throughout the Scriptorium workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scriptorium_error::{ConfigError, ScriptoriumResult};
//!
//! fn load() -> ScriptoriumResult<String> {
//!     Err(ConfigError::new("missing [gemini] table"))?
//! }
//!
//! match load() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod gemini;
mod generation;
mod http;

pub use config::ConfigError;
pub use error::{ScriptoriumError, ScriptoriumErrorKind, ScriptoriumResult};
pub use export::ExportError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{
    CONFIGURATION_MESSAGE, EMPTY_TOPIC_MESSAGE, GENERIC_FAILURE_MESSAGE, GenerationError,
    GenerationErrorKind,
};
pub use http::HttpError;
