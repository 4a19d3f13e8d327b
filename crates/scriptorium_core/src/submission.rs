//! User submissions from the generation form.

use crate::Tone;
use derive_getters::Getters;
use scriptorium_error::{GenerationError, GenerationErrorKind};
use serde::Serialize;

/// A validated topic and tone pair.
///
/// Construction is the submission boundary: an empty topic is rejected
/// here and never reaches the controller. Fields are private, so a request
/// cannot change once built.
///
/// # Examples
///
/// ```
/// use scriptorium_core::{GenerationRequest, Tone};
///
/// let request = GenerationRequest::new("Marketing Digital", Tone::Persuasive).unwrap();
/// assert_eq!(request.topic(), "Marketing Digital");
///
/// assert!(GenerationRequest::new("   ", Tone::Casual).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct GenerationRequest {
    /// Free-text subject, stored exactly as typed
    topic: String,
    /// Voice preset
    tone: Tone,
}

impl GenerationRequest {
    /// Validate and build a submission.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::EmptyTopic`] when the topic is empty or
    /// whitespace only.
    #[track_caller]
    pub fn new(topic: impl Into<String>, tone: Tone) -> Result<Self, GenerationError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyTopic));
        }
        Ok(Self { topic, tone })
    }
}
