//! The extraction pipeline: fold every content page of an open source
//! into the ordered record sequence.

use mostra_core::{PageSource, Work, WorkType};

use crate::config::ParsingConfig;
use crate::normalizer;
use crate::segmenter::{self, Segmented};
use crate::tokenizer;
use crate::ExtractError;

/// A configurable extraction pipeline over a paginated text source.
///
/// Holds a [`ParsingConfig`] and exposes the segmentation step as a
/// method. The default constructor uses the published-annals defaults;
/// use [`WorkExtractor::with_config`] to supply custom heuristics.
pub struct WorkExtractor {
    config: ParsingConfig,
}

impl Default for WorkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParsingConfig::default(),
        }
    }

    /// Create an extractor with a custom configuration.
    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the current config.
    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Segment one page's tokenized lines (config-aware).
    pub fn segment(&self, lines: &[String]) -> Segmented {
        segmenter::segment_page(lines, &self.config)
    }

    /// Run the full pipeline over `source`.
    ///
    /// Pages are visited in order after the front-matter skip; blank pages
    /// are passed over, the banner page flips the carried work type, and
    /// every other page becomes exactly one record. The output order is
    /// the page order, so the work types form a prefix of oral
    /// presentations followed by a suffix of expositions.
    pub fn extract(&self, source: &dyn PageSource) -> Result<Vec<Work>, ExtractError> {
        let mut works = Vec::new();
        let mut work_type = WorkType::OralPresentation;

        for index in self.config.front_matter_pages..source.page_count() {
            let Some(raw) = source.page_text(index) else {
                continue;
            };
            let lines = tokenizer::tokenize_page(&raw);
            if lines.is_empty() {
                continue;
            }

            match segmenter::segment_page(&lines, &self.config) {
                Segmented::SectionMarker => {
                    tracing::debug!(page = source.page_number(index), "section marker page");
                    work_type = WorkType::Exposition;
                }
                Segmented::Work(raw_work) => {
                    works.push(Work {
                        page_number: source.page_number(index),
                        title: raw_work.title,
                        work_type,
                        authors: normalizer::normalize_authors(&raw_work.authors),
                        summary: normalizer::normalize_summary(&raw_work.summary),
                        key_words: normalizer::normalize_key_words(&raw_work.key_words),
                    });
                }
            }
        }

        if works.is_empty() {
            return Err(ExtractError::EmptyExtraction);
        }

        tracing::info!(count = works.len(), "extraction finished");
        Ok(works)
    }
}
