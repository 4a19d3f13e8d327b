//! Core data types for Scriptorium.
//!
//! This crate provides the data model shared by the generation client, the
//! state controller and the command-line front end: tones, submissions,
//! results, status values, model-level request types, prompt templates,
//! markdown export and configuration loading.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod export;
mod prompt;
mod request;
mod result;
mod status;
mod submission;
mod tone;

pub use config::{GeminiSettings, GeneratorSettings, ScriptoriumConfig};
pub use export::{DOWNLOAD_NOTICE, EXPORT_SUFFIX, EbookExport, export_file_name};
pub use prompt::{cover_ideas_prompt, ebook_prompt};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, SamplingConfig};
pub use result::{DEFAULT_COVER_STYLE, GenerationResult};
pub use status::{GenerationState, GenerationStatus};
pub use submission::GenerationRequest;
pub use tone::Tone;
