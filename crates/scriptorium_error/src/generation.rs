//! Errors raised by the eBook generation flow.

/// Shown when no API credential is configured.
pub const CONFIGURATION_MESSAGE: &str =
    "Chave de API não configurada. Por favor configure a API_KEY.";

/// Shown for every other generation failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Ocorreu um erro ao gerar o eBook. Tente novamente com um tema diferente ou verifique sua conexão.";

/// Shown when the form is submitted without a topic.
pub const EMPTY_TOPIC_MESSAGE: &str = "Informe um tema para o seu eBook.";

/// Generation failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Submission rejected at the form boundary
    #[display("Topic must not be empty")]
    EmptyTopic,
    /// No credential configured; detected before any network call
    #[display("API credential not configured")]
    MissingCredential,
    /// The model answered without any text
    #[display("No content generated")]
    EmptyResult,
    /// Transport or service failure
    #[display("Generation failed: {}", _0)]
    Failed(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{GenerationError, GenerationErrorKind, CONFIGURATION_MESSAGE};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingCredential);
/// assert_eq!(err.user_message(), CONFIGURATION_MESSAGE);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this is the missing-credential configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, GenerationErrorKind::MissingCredential)
    }

    /// Message to display to the user.
    ///
    /// Empty results and service failures share one generic retry hint;
    /// the other kinds each have their own message.
    pub fn user_message(&self) -> &'static str {
        match self.kind {
            GenerationErrorKind::EmptyTopic => EMPTY_TOPIC_MESSAGE,
            GenerationErrorKind::MissingCredential => CONFIGURATION_MESSAGE,
            GenerationErrorKind::EmptyResult | GenerationErrorKind::Failed(_) => {
                GENERIC_FAILURE_MESSAGE
            }
        }
    }
}
