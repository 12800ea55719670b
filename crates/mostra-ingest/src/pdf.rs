//! lopdf-based implementation of [`PageSource`].

use std::path::Path;

use lopdf::Document;

use mostra_core::{BackendError, PageSource};

/// Paginated text source over a PDF opened with `lopdf`.
///
/// Pages are addressed by 0-based index; the printed page numbers come
/// from the document's own 1-based numbering. Per-page text extraction
/// failures (damaged content streams, image-only pages) degrade to
/// "no content" instead of failing the whole document.
pub struct LopdfSource {
    doc: Document,
    pages: Vec<u32>,
}

impl LopdfSource {
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        let doc = Document::load(path).map_err(|e| BackendError::OpenError(e.to_string()))?;
        let pages = doc.get_pages().keys().copied().collect();
        Ok(Self { doc, pages })
    }
}

impl PageSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Option<String> {
        let number = *self.pages.get(index)?;
        match self.doc.extract_text(&[number]) {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(page = number, error = %e, "page text extraction failed");
                None
            }
        }
    }

    fn page_number(&self, index: usize) -> u32 {
        self.pages.get(index).copied().unwrap_or(index as u32 + 1)
    }
}
