use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open document: {0}")]
    OpenError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for paginated text sources.
///
/// Implementors provide the low-level per-page text; the extraction
/// pipeline (tokenizing, segmenting, normalizing) lives in
/// `mostra-parsing` and only folds over this interface.
pub trait PageSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Raw text of the page at `index` (0-based), or `None` when the page
    /// is blank or its text cannot be extracted. Per-page failures degrade
    /// to "no content"; only open/read failures are errors.
    fn page_text(&self, index: usize) -> Option<String>;

    /// Printed page number of the page at `index` (1-based in PDFs).
    fn page_number(&self, index: usize) -> u32;
}
