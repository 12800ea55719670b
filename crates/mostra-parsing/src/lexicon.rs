//! Literal tables the segmentation heuristics match against.
//!
//! Kept as reviewable constants so heuristic behavior can be audited and
//! tested independently of the code that applies it.

/// Title of the banner page announcing that every following page holds an
/// exposition instead of an oral presentation.
pub const SECTION_BANNER: &str = "EXPOSIÇÃO DE TRABALHOS";

/// Words and phrases a Portuguese abstract paragraph opens with: articles,
/// demonstratives, and common paragraph-opening terms.
///
/// The first line of the middle block starting with one of these entries
/// is taken as the beginning of the abstract. Entries with a trailing
/// space only match a full word; entries without one also match prefixes
/// (`"Ao"` covers both "Ao " and "Aos ").
pub const ABSTRACT_LEAD_INS: &[&str] = &[
    "O ",
    "A ",
    "Os ",
    "As ",
    "Ao",
    "Relato",
    "Todo",
    "Entre",
    "Este ",
    "Esse",
    "Esta ",
    "Estes",
    "Estas",
    "Sabe-se",
    "Considerando",
    "Diante",
    "Para",
    "Segundo",
    "Com",
    "Nas ",
    "Nos ",
    "No ",
    "Na ",
    "Desde",
    "Muito",
    "Atualmente",
    "Justamente",
    "Dentro",
    "Ainda",
];
