//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use scriptorium_core::{GenerateRequest, GenerateResponse};
use scriptorium_error::ScriptoriumResult;

/// Core trait every hosted text-generation backend implements.
///
/// Implementations are created once per process with their credential and
/// default model, and are never mutated afterwards.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the generated text.
    ///
    /// No retry is attempted; transport and service failures are returned
    /// as errors.
    async fn generate(&self, req: &GenerateRequest) -> ScriptoriumResult<GenerateResponse>;

    /// Whether an access credential is configured.
    ///
    /// Callers check this before attempting generation.
    fn has_credential(&self) -> bool;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier.
    fn model_name(&self) -> &str;
}
