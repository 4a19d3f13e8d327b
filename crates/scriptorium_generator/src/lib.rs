//! eBook generation flow for Scriptorium.
//!
//! - [`EbookClient`] turns a topic and tone into the two outbound calls (the
//!   eBook body and the cover suggestions) and normalizes their answers.
//! - [`GenerationController`] sequences the user-visible status around those
//!   calls and holds the last result or error message.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use scriptorium_core::{GenerationRequest, Tone};
//! use scriptorium_generator::{EbookClient, GenerationController};
//! # use scriptorium_interface::TextGenerator;
//!
//! # async fn run(backend: Arc<dyn TextGenerator>) -> Result<(), Box<dyn std::error::Error>> {
//! let client = EbookClient::new(backend);
//! let mut controller = GenerationController::new(client, Duration::from_secs(2));
//!
//! let request = GenerationRequest::new("Marketing Digital", Tone::Persuasive)?;
//! controller.submit(request).await;
//!
//! if let Some(result) = controller.result() {
//!     println!("{}", result.content());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod controller;

pub use client::{
    EbookClient, FAILURE_COVER_STYLES, MAX_COVER_STYLES, UNCONFIGURED_COVER_STYLES,
};
pub use controller::GenerationController;
