use crate::error::{EngineError, Result};
use crate::options::{CharClass, ReportFormat, SortMode};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Path to the plaintext book under report.
    pub book_path: PathBuf,

    #[builder(default)]
    pub char_class: CharClass,

    #[builder(default)]
    pub sort: SortMode,

    /// Invert whichever direction the sort mode defaults to.
    #[builder(default)]
    pub reverse: bool,

    /// Strip Project Gutenberg boilerplate before counting.
    #[builder(default)]
    pub trim: bool,

    #[builder(default)]
    pub format: ReportFormat,

    /// Keep only the first N entries of the report.
    #[builder(default)]
    pub top: Option<usize>,
}

impl Config {
    /// Check the configured options before any I/O happens.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NotPlainText` when `book_path` does not end
    /// in `.txt`.
    pub fn validate(&self) -> Result<()> {
        if self.book_path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            return Err(EngineError::NotPlainText {
                path: self.book_path.clone(),
            });
        }
        Ok(())
    }
}
