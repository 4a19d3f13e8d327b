//! Top-level error wrapper types.

use crate::{ConfigError, ExportError, GeminiError, GenerationError, HttpError};

/// All error kinds surfaced by Scriptorium crates.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{ScriptoriumError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ScriptoriumError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScriptoriumErrorKind {
    /// HTTP client error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// eBook generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Export error
    #[from(ExportError)]
    Export(ExportError),
}

/// Scriptorium error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scriptorium_error::{ConfigError, ScriptoriumResult};
///
/// fn might_fail() -> ScriptoriumResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scriptorium Error: {}", _0)]
pub struct ScriptoriumError(Box<ScriptoriumErrorKind>);

impl ScriptoriumError {
    /// Create a new error from a kind.
    pub fn new(kind: ScriptoriumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptoriumErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScriptoriumErrorKind
impl<T> From<T> for ScriptoriumError
where
    T: Into<ScriptoriumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scriptorium operations.
pub type ScriptoriumResult<T> = std::result::Result<T, ScriptoriumError>;
