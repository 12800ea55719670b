use thiserror::Error;

pub mod config;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod segmenter;
pub mod tokenizer;

pub use config::{ParsingConfig, ParsingConfigBuilder};
pub use pipeline::WorkExtractor;
pub use segmenter::{RawWork, Segmented};
// Re-export domain types from core (canonical definitions live there)
pub use mostra_core::{BackendError, PageSource, Work, WorkType};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] BackendError),
    #[error("no records extracted from the document")]
    EmptyExtraction,
}

/// Extract every work from an open paginated text source.
///
/// Pipeline:
/// 1. Skip the front-matter pages
/// 2. Tokenize each page into trimmed, non-empty lines
/// 3. Segment the lines into title/author/abstract/keyword blocks,
///    flipping the carried work type on the exposition banner page
/// 4. Normalize the raw blocks into the final field values
///
/// A malformed page degrades to an empty-authors record; only an
/// unreadable source or an empty result aborts the run.
pub fn extract_works(source: &dyn PageSource) -> Result<Vec<Work>, ExtractError> {
    WorkExtractor::new().extract(source)
}
