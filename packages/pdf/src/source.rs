//! Document sources.
//!
//! A document reaches the normalizer as a local PDF, a PDF behind a URL, or
//! a JSON file holding an already-extracted page grid (the serialized form
//! of [`extract_document`](crate::extract_document)'s output).

use std::path::{Path, PathBuf};

use fund_disclosure_models::ExtractedPage;

use crate::download::{fetch_pdf, is_url};
use crate::{PdfError, PdfTableExtractor, extract_document};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A PDF on disk.
    Pdf(PathBuf),
    /// A PDF to download.
    Url(String),
    /// A JSON page grid on disk.
    Grid(PathBuf),
}

impl DocumentSource {
    /// Classifies a command-line source argument.
    ///
    /// URLs are recognised by scheme; `.json` files are page grids;
    /// anything else is treated as a PDF path.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        if is_url(source) {
            return Self::Url(source.trim().to_owned());
        }

        let path = Path::new(source);
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::Grid(path.to_path_buf())
        } else {
            Self::Pdf(path.to_path_buf())
        }
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf(path) | Self::Grid(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Parses a JSON page grid.
///
/// # Errors
///
/// Returns [`PdfError::Json`] if the text is not a valid page grid.
pub fn parse_grid(json: &str) -> Result<Vec<ExtractedPage>, PdfError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a document and returns its page grid.
///
/// # Errors
///
/// * [`PdfError::Io`] if a file cannot be read
/// * [`PdfError::Http`] if a download fails
/// * [`PdfError::Extraction`] if PDF text extraction fails
/// * [`PdfError::Json`] if a page grid file does not parse
pub async fn load_pages(source: &DocumentSource) -> Result<Vec<ExtractedPage>, PdfError> {
    let pages = match source {
        DocumentSource::Pdf(path) => {
            let bytes = tokio::fs::read(path).await?;
            extract_document(&PdfTableExtractor::from_bytes(&bytes)?)
        }
        DocumentSource::Url(url) => {
            let bytes = fetch_pdf(url).await?;
            extract_document(&PdfTableExtractor::from_bytes(&bytes)?)
        }
        DocumentSource::Grid(path) => parse_grid(&tokio::fs::read_to_string(path).await?)?,
    };

    log::info!("Loaded {} page(s) from {source}", pages.len());

    Ok(pages)
}
