//! Generation client: prompt construction and response normalization.

use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use scriptorium_core::{GenerateRequest, SamplingConfig, Tone, cover_ideas_prompt, ebook_prompt};
use scriptorium_error::{GenerationError, GenerationErrorKind};
use scriptorium_interface::TextGenerator;

/// Upper bound on returned cover suggestions.
pub const MAX_COVER_STYLES: usize = 3;

/// Suggestions returned when no credential is configured.
pub const UNCONFIGURED_COVER_STYLES: [&str; 3] = [
    "Design abstrato moderno",
    "Minimalista com tipografia forte",
    "Futurista com cores vibrantes",
];

/// Suggestions returned when the suggestion call fails.
pub const FAILURE_COVER_STYLES: [&str; 3] = [
    "Design moderno",
    "Estilo corporativo",
    "Ilustração criativa",
];

/// Wraps a [`TextGenerator`] with the eBook and cover-suggestion calls.
///
/// Cheap to clone; the backend is shared.
#[derive(Clone)]
pub struct EbookClient {
    backend: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for EbookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EbookClient")
            .field("provider", &self.backend.provider_name())
            .field("model", &self.backend.model_name())
            .field("has_credential", &self.backend.has_credential())
            .finish()
    }
}

impl EbookClient {
    /// Create a client over an already configured backend.
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    /// Whether the backend has a credential configured.
    pub fn check_api_key(&self) -> bool {
        self.backend.has_credential()
    }

    /// Generate the markdown body of an eBook.
    ///
    /// Uses the fixed [`SamplingConfig::EBOOK`] parameters. No retry is
    /// attempted.
    ///
    /// # Errors
    ///
    /// - [`GenerationErrorKind::MissingCredential`] before any call when no
    ///   credential is configured
    /// - [`GenerationErrorKind::EmptyResult`] when the model returns no text
    /// - [`GenerationErrorKind::Failed`] for transport or service failures
    #[instrument(skip(self), fields(provider = self.backend.provider_name()))]
    pub async fn generate_content(&self, topic: &str, tone: Tone) -> Result<String, GenerationError> {
        if !self.check_api_key() {
            error!("No API credential configured; refusing to generate");
            return Err(GenerationError::new(GenerationErrorKind::MissingCredential));
        }

        let request = GenerateRequest::builder()
            .prompt(ebook_prompt(topic, tone))
            .sampling(SamplingConfig::EBOOK)
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::Failed(e.to_string())))?;

        let response = self.backend.generate(&request).await.map_err(|e| {
            error!(error = %e, "Error generating eBook");
            GenerationError::new(GenerationErrorKind::Failed(e.to_string()))
        })?;

        match response.text {
            Some(text) if !text.is_empty() => {
                info!(content_len = text.len(), "Generated eBook content");
                Ok(text)
            }
            _ => {
                error!("Model returned no content");
                Err(GenerationError::new(GenerationErrorKind::EmptyResult))
            }
        }
    }

    /// Suggest up to three cover styles for a topic.
    ///
    /// Never fails: without a credential it returns
    /// [`UNCONFIGURED_COVER_STYLES`] and on a failed call it returns
    /// [`FAILURE_COVER_STYLES`]. Otherwise the non-blank lines of the answer
    /// are returned verbatim.
    #[instrument(skip(self), fields(provider = self.backend.provider_name()))]
    pub async fn suggest_cover_styles(&self, topic: &str) -> Vec<String> {
        if !self.check_api_key() {
            debug!("No API credential configured; using static cover styles");
            return to_owned_list(&UNCONFIGURED_COVER_STYLES);
        }

        let request = match GenerateRequest::builder()
            .prompt(cover_ideas_prompt(topic))
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Could not build cover request; using fallback styles");
                return to_owned_list(&FAILURE_COVER_STYLES);
            }
        };

        match self.backend.generate(&request).await {
            Ok(response) => {
                let styles = response
                    .text
                    .as_deref()
                    .map(split_suggestions)
                    .unwrap_or_default();
                debug!(count = styles.len(), "Received cover suggestions");
                styles
            }
            Err(e) => {
                warn!(error = %e, "Cover suggestion call failed; using fallback styles");
                to_owned_list(&FAILURE_COVER_STYLES)
            }
        }
    }
}

/// Non-blank lines, untouched, capped at [`MAX_COVER_STYLES`].
fn split_suggestions(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(MAX_COVER_STYLES)
        .map(str::to_string)
        .collect()
}

fn to_owned_list(styles: &[&str]) -> Vec<String> {
    styles.iter().map(|style| style.to_string()).collect()
}
