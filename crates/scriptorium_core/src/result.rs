//! The aggregate produced by one successful generation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Cover style used when the suggestion call yields no lines.
pub const DEFAULT_COVER_STYLE: &str = "Moderno";

/// Generated eBook: body text plus a suggested cover style.
///
/// Only built once both the content and cover calls have resolved, so a
/// result is never partially populated.
///
/// # Examples
///
/// ```
/// use scriptorium_core::{GenerationResult, DEFAULT_COVER_STYLE};
///
/// let result = GenerationResult::assemble("Yoga", "# Yoga\n...", Vec::new());
/// assert_eq!(result.title(), "Yoga");
/// assert_eq!(result.cover_style(), DEFAULT_COVER_STYLE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// Echo of the submitted topic
    title: String,
    /// Markdown body returned by the model
    content: String,
    /// Short visual styling phrase for the cover
    cover_style: String,
}

impl GenerationResult {
    /// Build a result from explicit parts.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        cover_style: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            cover_style: cover_style.into(),
        }
    }

    /// Combine the topic, generated content and cover suggestions.
    ///
    /// The title is the topic, never derived from the model output. The
    /// cover style is the first suggestion, or [`DEFAULT_COVER_STYLE`] when
    /// there are none.
    pub fn assemble(
        topic: impl Into<String>,
        content: impl Into<String>,
        cover_suggestions: Vec<String>,
    ) -> Self {
        let cover_style = cover_suggestions
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_COVER_STYLE.to_string());
        Self::new(topic, content, cover_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_suggestion_wins() {
        let result = GenerationResult::assemble(
            "Marketing Digital",
            "# Marketing Digital\n",
            vec!["1. Neon".to_string(), "2. Pastel".to_string()],
        );
        assert_eq!(result.cover_style(), "1. Neon");
        assert_eq!(result.title(), "Marketing Digital");
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let result = GenerationResult::new("A", "B", "C");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["cover_style"], "C");
    }
}
