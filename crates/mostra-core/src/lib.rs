use serde::{Deserialize, Serialize};

pub mod backend;
pub mod catalog;
pub mod config_file;
pub mod store;

// Re-export for convenience
pub use backend::{BackendError, PageSource};
pub use catalog::{CatalogStats, WorkFilter};
pub use config_file::Settings;
pub use store::{StoreError, WorkStore, load_works, save_works};

/// One academic work extracted from a single page of the annals.
///
/// Field names are the persistence/wire contract; downstream filtering
/// keys on them, so they must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Printed page number of the source page. Unique within one
    /// extraction run, but not stable across runs if pagination changes.
    pub page_number: u32,
    pub title: String,
    pub work_type: WorkType,
    pub authors: Vec<String>,
    pub summary: String,
    pub key_words: Vec<String>,
}

/// Classification of a work within the annals.
///
/// The annals list every oral presentation first, then a banner page, then
/// every exposition, so within one extraction run the type only ever
/// moves forward. The `Ord` impl encodes that ordering
/// (`OralPresentation < Exposition`).
///
/// Serialized values are the labels used by the published dataset; they
/// are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkType {
    #[serde(rename = "Apresentação Oral")]
    OralPresentation,
    #[serde(rename = "Exposição")]
    Exposition,
}

impl WorkType {
    /// The human-readable (and serialized) label.
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::OralPresentation => "Apresentação Oral",
            WorkType::Exposition => "Exposição",
        }
    }
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_type_ordering() {
        assert!(WorkType::OralPresentation < WorkType::Exposition);
    }

    #[test]
    fn test_work_type_wire_labels() {
        assert_eq!(
            serde_json::to_string(&WorkType::OralPresentation).unwrap(),
            "\"Apresentação Oral\""
        );
        assert_eq!(
            serde_json::to_string(&WorkType::Exposition).unwrap(),
            "\"Exposição\""
        );
    }

    #[test]
    fn test_work_field_names_are_stable() {
        let work = Work {
            page_number: 7,
            title: "UM TÍTULO".into(),
            work_type: WorkType::OralPresentation,
            authors: vec!["Autor Um".into()],
            summary: "O resumo.".into(),
            key_words: vec!["palavra".into()],
        };
        let value = serde_json::to_value(&work).unwrap();
        let object = value.as_object().unwrap();
        for field in [
            "page_number",
            "title",
            "work_type",
            "authors",
            "summary",
            "key_words",
        ] {
            assert!(object.contains_key(field), "missing field: {}", field);
        }
    }

    #[test]
    fn test_work_round_trip() {
        let work = Work {
            page_number: 12,
            title: "HORTA COMUNITÁRIA".into(),
            work_type: WorkType::Exposition,
            authors: vec!["Autor Um".into(), "Autor Dois".into()],
            summary: "Este é o resumo.".into(),
            key_words: vec!["horta".into(), "comunidade".into()],
        };
        let json = serde_json::to_string(&work).unwrap();
        let back: Work = serde_json::from_str(&json).unwrap();
        assert_eq!(back, work);
    }
}
