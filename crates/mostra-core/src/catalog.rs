//! Read-only queries over a loaded record set.
//!
//! All filters are case-insensitive substring matches; list-valued fields
//! (`authors`, `key_words`) are matched against their `", "`-joined form.

use serde::Serialize;

use crate::{Work, WorkType};

/// Criteria for a catalog listing. All fields are optional and compose
/// with AND semantics; an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct WorkFilter {
    /// Restrict to a single work type (exact match).
    pub work_type: Option<WorkType>,
    /// Substring of the title.
    pub title_term: Option<String>,
    /// Substring of the stringified author list.
    pub author: Option<String>,
    /// Substring of the stringified keyword list.
    pub key_word: Option<String>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(work: &Work, filter: &WorkFilter) -> bool {
    if let Some(work_type) = filter.work_type
        && work.work_type != work_type
    {
        return false;
    }
    if let Some(ref term) = filter.title_term
        && !contains_ci(&work.title, term)
    {
        return false;
    }
    if let Some(ref author) = filter.author
        && !contains_ci(&work.authors.join(", "), author)
    {
        return false;
    }
    if let Some(ref key_word) = filter.key_word
        && !contains_ci(&work.key_words.join(", "), key_word)
    {
        return false;
    }
    true
}

/// All records matching `filter`, in their original (page) order.
pub fn filter_works<'a>(works: &'a [Work], filter: &WorkFilter) -> Vec<&'a Work> {
    works.iter().filter(|work| matches(work, filter)).collect()
}

/// The record on the given page, if any.
pub fn by_page(works: &[Work], page_number: u32) -> Option<&Work> {
    works.iter().find(|work| work.page_number == page_number)
}

/// The record whose title equals `title` case-insensitively, if any.
pub fn by_title<'a>(works: &'a [Work], title: &str) -> Option<&'a Work> {
    let wanted = title.to_lowercase();
    works.iter().find(|work| work.title.to_lowercase() == wanted)
}

/// Aggregate counts over the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_works: usize,
    pub oral_presentations: usize,
    pub expositions: usize,
}

pub fn stats(works: &[Work]) -> CatalogStats {
    let oral_presentations = works
        .iter()
        .filter(|w| w.work_type == WorkType::OralPresentation)
        .count();
    let expositions = works
        .iter()
        .filter(|w| w.work_type == WorkType::Exposition)
        .count();
    CatalogStats {
        total_works: works.len(),
        oral_presentations,
        expositions,
    }
}
