//! Streaming download of the source document.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use futures_util::StreamExt;

use crate::IngestError;

/// Download `url` to `dest`, streaming the body to disk.
///
/// Parent directories are created as needed; a non-success status is an
/// error. Returns the number of bytes written. No retry policy; callers
/// decide whether a failed fetch is fatal.
pub async fn download_document(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<u64, IngestError> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(IngestError::Download(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    let mut out = File::create(dest)?;
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| IngestError::Download(e.to_string()))?;
        out.write_all(&chunk)?;
        bytes_written += chunk.len() as u64;
    }
    out.flush()?;

    tracing::info!(url, path = %dest.display(), bytes = bytes_written, "document downloaded");
    Ok(bytes_written)
}
