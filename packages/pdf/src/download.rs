//! PDF download utilities.

use crate::PdfError;

/// Returns `true` if `source` is an `http` or `https` URL.
#[must_use]
pub fn is_url(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Downloads a PDF and returns its bytes.
///
/// # Errors
///
/// Returns [`PdfError::Http`] if the request fails or the server responds
/// with an error status.
pub async fn fetch_pdf(url: &str) -> Result<Vec<u8>, PdfError> {
    let client = reqwest::Client::builder().build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("Downloaded {} bytes from {url}", bytes.len());

    Ok(bytes.to_vec())
}
