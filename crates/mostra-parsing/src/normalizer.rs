//! Field normalizing: raw segmented blocks into final field values.
//!
//! The three normalizations are independent of one another and contain
//! the only punctuation fixes the extraction applies (ASCII-level; no
//! locale-aware processing).

use once_cell::sync::Lazy;
use regex::Regex;

/// Campus annotations like `(Campus Restinga)` sit between author names;
/// each one is replaced with a comma so it keeps acting as a split point.
static PARENTHESIZED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Clean a raw author block into the ordered author list.
pub fn normalize_authors(raw: &str) -> Vec<String> {
    PARENTHESIZED_RE
        .replace_all(raw, ",")
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Clean a raw keyword block into the ordered keyword list.
///
/// Hyphens and commas are stray separators in the source layout; both
/// become semicolons, and periods are dropped before splitting.
pub fn normalize_key_words(raw: &str) -> Vec<String> {
    raw.replace(['-', ','], ";")
        .replace('.', "")
        .split(';')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Replace the two non-standard quotation glyphs the source document uses
/// (`―`, `‖`) with a plain double quote. Nothing else is touched.
pub fn normalize_summary(raw: &str) -> String {
    raw.replace('―', "\"").replace('‖', "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authors_parenthesized_campus_becomes_split_point() {
        assert_eq!(
            normalize_authors("Autor Um (Campus X), Autor Dois"),
            vec!["Autor Um", "Autor Dois"]
        );
    }

    #[test]
    fn test_authors_plain_comma_list() {
        assert_eq!(
            normalize_authors("Ana Souza, Bruno Lima, Carla Dias"),
            vec!["Ana Souza", "Bruno Lima", "Carla Dias"]
        );
    }

    #[test]
    fn test_authors_empty_pieces_are_dropped() {
        assert_eq!(
            normalize_authors("Autor Um (Campus X), , Autor Dois (Campus Y)"),
            vec!["Autor Um", "Autor Dois"]
        );
        assert!(normalize_authors("").is_empty());
        assert!(normalize_authors("(Campus Restinga)").is_empty());
    }

    #[test]
    fn test_key_words_hyphen_comma_and_period() {
        assert_eq!(
            normalize_key_words("Saúde-Educação, Bem estar."),
            vec!["Saúde", "Educação", "Bem estar"]
        );
    }

    #[test]
    fn test_key_words_plain_semicolon_list() {
        assert_eq!(
            normalize_key_words("palavra1; palavra2"),
            vec!["palavra1", "palavra2"]
        );
    }

    #[test]
    fn test_key_words_empty_pieces_are_dropped() {
        assert_eq!(normalize_key_words("; ;palavra;"), vec!["palavra"]);
        assert!(normalize_key_words("").is_empty());
    }

    #[test]
    fn test_summary_quote_glyphs() {
        assert_eq!(
            normalize_summary("Citação ―direta‖ no resumo."),
            "Citação \"direta\" no resumo."
        );
    }

    #[test]
    fn test_summary_is_otherwise_untouched() {
        let text = "Resumo com - hífen, vírgula e ponto.";
        assert_eq!(normalize_summary(text), text);
    }
}
