//! Record segmenting: one page's line layout into raw field blocks.
//!
//! The annals lay every record out the same way: an upper-case title
//! block, an author block, the abstract, and a trailing keyword line (two
//! lines when the list runs over). Segmentation is pure line heuristics;
//! the cleanup of each block lives in [`crate::normalizer`].

use crate::config::ParsingConfig;

/// Outcome of segmenting one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmented {
    /// A provisional record shell with raw, unnormalized field blocks.
    Work(RawWork),
    /// The banner page announcing the exposition section. Produces no
    /// record; every later page carries the exposition type.
    SectionMarker,
}

/// Raw field blocks cut out of one page, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawWork {
    pub title: String,
    pub authors: String,
    pub summary: String,
    pub key_words: String,
}

/// `true` when the line reads as fully upper-case: at least one cased
/// character and none of them lower-case. Digits and punctuation don't
/// count as cased.
fn is_upper_line(line: &str) -> bool {
    let mut has_upper = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

/// Delimit the title, author, abstract, and keyword blocks of one page.
///
/// The title is the first contiguous run of upper-case lines; anything
/// before it is discarded. The section banner is checked before the page
/// is treated as a record. Within the remaining lines, the keyword block
/// is the last line (or the last two, when the second-to-last line still
/// holds a semicolon) and the abstract starts at the first middle line
/// opening with a lead-in entry. When no such line exists the whole
/// middle block becomes the abstract (a full abstract is preferred over a
/// guessed author split).
pub fn segment_page(lines: &[String], config: &ParsingConfig) -> Segmented {
    let mut title = String::new();
    let mut title_end = None;
    for (index, line) in lines.iter().enumerate() {
        if is_upper_line(line) {
            if !title.is_empty() {
                title.push(' ');
            }
            title.push_str(line);
            title_end = Some(index);
        } else if !title.is_empty() {
            break;
        }
    }

    if title == config.section_banner {
        return Segmented::SectionMarker;
    }

    let rest = &lines[title_end.map_or(0, |index| index + 1)..];

    let (key_words, middle) = if rest.is_empty() {
        (String::new(), rest)
    } else if rest.len() >= 2 && rest[rest.len() - 2].contains(';') {
        (rest[rest.len() - 2..].join(" "), &rest[..rest.len() - 2])
    } else {
        (rest[rest.len() - 1].clone(), &rest[..rest.len() - 1])
    };

    let start = middle
        .iter()
        .position(|line| config.lead_ins.iter().any(|p| line.starts_with(p.as_str())))
        .unwrap_or(0);
    let mut authors = middle[..start].join(" ").trim().to_string();
    let mut summary = middle[start..].join(" ").trim().to_string();

    if summary.is_empty() {
        authors.clear();
        summary = middle.join(" ");
    }

    Segmented::Work(RawWork {
        title,
        authors,
        summary,
        key_words,
    })
}
