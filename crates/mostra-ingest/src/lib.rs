use std::path::Path;

use thiserror::Error;

pub mod download;
pub mod pdf;

pub use download::download_document;
pub use pdf::LopdfSource;
// Re-export domain types for convenience
pub use mostra_core::Work;
pub use mostra_parsing::ExtractError;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("download failed: {0}")]
    Download(String),
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),
    #[error("store error: {0}")]
    Store(#[from] mostra_core::StoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Open a local document and run the extraction pipeline over it.
pub fn extract_document(path: &Path) -> Result<Vec<Work>, IngestError> {
    let source = LopdfSource::open(path).map_err(ExtractError::SourceUnavailable)?;
    Ok(mostra_parsing::extract_works(&source)?)
}

/// Extract a local document and persist the record file.
pub fn build_dataset(document_path: &Path, records_path: &Path) -> Result<Vec<Work>, IngestError> {
    let works = extract_document(document_path)?;
    mostra_core::save_works(records_path, &works)?;
    tracing::info!(
        records = works.len(),
        path = %records_path.display(),
        "record file written"
    );
    Ok(works)
}

/// Fetch the source document and build the dataset from scratch.
pub async fn initialize_dataset(
    client: &reqwest::Client,
    url: &str,
    document_path: &Path,
    records_path: &Path,
) -> Result<Vec<Work>, IngestError> {
    download_document(client, url, document_path).await?;
    build_dataset(document_path, records_path)
}
