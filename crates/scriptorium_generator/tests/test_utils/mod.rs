//! Test utilities for the generation flow.
//!
//! This module provides a scripted [`TextGenerator`] implementation.

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockGenerator, MockResponse};
