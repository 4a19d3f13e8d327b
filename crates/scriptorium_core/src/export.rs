//! Markdown export of a generated eBook.

use crate::GenerationResult;
use regex::Regex;
use scriptorium_error::ExportError;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Appended to every exported file name.
pub const EXPORT_SUFFIX: &str = "_MilvanEbook.md";

/// Shown once the markdown file has been written.
pub const DOWNLOAD_NOTICE: &str = "Download iniciado! Converta o Markdown para PDF usando seu editor preferido ou adquira o Plano Premium para PDF direto.";

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s/\\]+").expect("Valid separator regex"));

/// File name for an exported eBook: runs of whitespace and path separators
/// become `_`, then the fixed suffix.
///
/// The name is always a single path component, so it stays inside the
/// directory given to [`EbookExport::write_to`].
///
/// # Examples
///
/// ```
/// use scriptorium_core::export_file_name;
///
/// assert_eq!(export_file_name("Marketing Digital"), "Marketing_Digital_MilvanEbook.md");
/// assert_eq!(export_file_name("A/B Testing"), "A_B_Testing_MilvanEbook.md");
/// ```
pub fn export_file_name(title: &str) -> String {
    format!("{}{}", SEPARATOR_RUN.replace_all(title, "_"), EXPORT_SUFFIX)
}

/// A result ready to be saved as a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbookExport {
    file_name: String,
    markdown: String,
}

impl EbookExport {
    /// Derived file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Document body, the generated content verbatim.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Write the document into `dir`, returning the full path.
    ///
    /// An existing file with the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the file cannot be written.
    #[instrument(skip(self, dir), fields(file_name = %self.file_name))]
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.markdown).map_err(|e| {
            ExportError::new(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), bytes = self.markdown.len(), "Wrote eBook export");
        Ok(path)
    }
}

impl From<&GenerationResult> for EbookExport {
    fn from(result: &GenerationResult) -> Self {
        Self {
            file_name: export_file_name(result.title()),
            markdown: result.content().clone(),
        }
    }
}
