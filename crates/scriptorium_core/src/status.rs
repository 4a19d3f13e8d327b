//! Generation status values and controller snapshots.

use crate::GenerationResult;
use serde::{Deserialize, Serialize};

/// Phase of the generation flow.
///
/// Exactly one status is active at a time. The two `Generating*` phases
/// disable the form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GenerationStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Cosmetic first phase after submission
    GeneratingOutline,
    /// Waiting for the content and cover calls
    GeneratingContent,
    /// Result available
    Completed,
    /// Error message available
    Failed,
}

impl GenerationStatus {
    /// Whether a submission is in flight.
    pub fn is_generating(&self) -> bool {
        matches!(
            self,
            GenerationStatus::GeneratingOutline | GenerationStatus::GeneratingContent
        )
    }

    /// Whether form inputs and the submit control accept interaction.
    pub fn inputs_enabled(&self) -> bool {
        !self.is_generating()
    }

    /// Progress line shown while generating.
    pub fn progress_message(&self) -> Option<&'static str> {
        match self {
            GenerationStatus::GeneratingOutline => Some("Analisando nicho e criando estrutura..."),
            GenerationStatus::GeneratingContent => Some("Escrevendo capítulos e formatando..."),
            _ => None,
        }
    }
}

/// Snapshot of the controller.
///
/// The result lives inside `Completed` and the message inside `Failed`, so a
/// result exists exactly when the status is Completed and a message exactly
/// when it is Failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Cosmetic first phase after submission
    GeneratingOutline,
    /// Waiting for the content and cover calls
    GeneratingContent,
    /// Generation succeeded
    Completed(GenerationResult),
    /// Generation failed with a user-facing message
    Failed(String),
}

impl GenerationState {
    /// Status discriminant of this snapshot.
    pub fn status(&self) -> GenerationStatus {
        match self {
            GenerationState::Idle => GenerationStatus::Idle,
            GenerationState::GeneratingOutline => GenerationStatus::GeneratingOutline,
            GenerationState::GeneratingContent => GenerationStatus::GeneratingContent,
            GenerationState::Completed(_) => GenerationStatus::Completed,
            GenerationState::Failed(_) => GenerationStatus::Failed,
        }
    }

    /// The result, when Completed.
    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationState::Completed(result) => Some(result),
            _ => None,
        }
    }

    /// The error message, when Failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
