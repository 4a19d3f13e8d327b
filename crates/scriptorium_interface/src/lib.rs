//! Trait definitions for Scriptorium.
//!
//! This crate defines the seam between the generation flow and the hosted
//! model backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::TextGenerator;
