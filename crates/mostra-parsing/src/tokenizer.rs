//! Page-layout tokenizing: raw extracted text to clean line sequences.

/// Split one page's raw text into trimmed, non-empty lines.
///
/// If the last remaining line consists solely of digits it is a printed
/// page-number footer and is dropped. Pure function; an empty result means
/// the page holds nothing usable.
pub fn tokenize_page(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    let trailing_page_number = lines
        .last()
        .is_some_and(|last| last.chars().all(|c| c.is_ascii_digit()));
    if trailing_page_number {
        lines.pop();
    }

    lines
}
