#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF table extraction for fund disclosure documents.
//!
//! Fund-of-funds managers publish applicant listings and selection results
//! as PDF tables. This crate turns a PDF into a page/table/row grid using
//! pure-Rust text extraction ([`pdf_extract`]) combined with two table
//! strategies: ruled lines (cell borders survive as `|`-like glyphs) and
//! text alignment (columns separated by wide whitespace gaps).
//!
//! Each page is tried with [`TableStrategy::RuledLine`] first and falls back
//! to [`TableStrategy::TextAlignment`] when no ruled table is found. The
//! primary entry points are [`extract_document`] and
//! [`source::load_pages`].

pub mod download;
pub mod ruled;
pub mod source;
pub mod text_table;

use fund_disclosure_models::{ExtractedPage, ExtractedTable};
use strum_macros::{AsRefStr, Display, EnumString};

/// Errors specific to PDF extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// An HTTP request to download a PDF failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A page grid file did not parse.
    #[error("Page grid error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How table geometry is recovered from page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TableStrategy {
    /// Cells bounded by drawn vertical rules.
    RuledLine,
    /// Cells separated by whitespace gaps.
    TextAlignment,
}

/// Strategies in the order each page tries them.
pub const STRATEGY_ORDER: [TableStrategy; 2] =
    [TableStrategy::RuledLine, TableStrategy::TextAlignment];

/// Something that can find tables on the pages of a document.
pub trait TableExtractor {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Tables found on the zero-based `page` with `strategy`.
    fn extract_tables(&self, page: usize, strategy: TableStrategy) -> Vec<ExtractedTable>;
}

/// Extracts one page, falling back through [`STRATEGY_ORDER`] until a
/// strategy finds a table.
fn extract_page<E: TableExtractor + ?Sized>(extractor: &E, page: usize) -> Vec<ExtractedTable> {
    for strategy in STRATEGY_ORDER {
        let tables = extractor.extract_tables(page, strategy);
        if !tables.is_empty() {
            log::debug!(
                "Page {}: {} table(s) via {strategy}",
                page + 1,
                tables.len()
            );
            return tables;
        }
        log::debug!("Page {}: no tables via {strategy}", page + 1);
    }
    Vec::new()
}

/// Runs `extractor` over every page, numbering pages from one.
#[must_use]
pub fn extract_document<E: TableExtractor + ?Sized>(extractor: &E) -> Vec<ExtractedPage> {
    (0..extractor.page_count())
        .map(|page| ExtractedPage::new(page + 1, extract_page(extractor, page)))
        .collect()
}

/// Table extractor over the text layer of a PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfTableExtractor {
    pages: Vec<String>,
}

impl PdfTableExtractor {
    /// Extracts the text of a PDF held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::Extraction`] if the PDF cannot be read.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PdfError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

        log::debug!("Extracted {} characters of text", text.len());

        Ok(Self::from_text(&text))
    }

    /// Wraps already-extracted text whose pages are separated by form
    /// feeds.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut pages: Vec<String> = text.split('\u{000C}').map(str::to_owned).collect();
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }
        Self { pages }
    }

    /// Text of the zero-based `page`.
    #[must_use]
    pub fn page_text(&self, page: usize) -> Option<&str> {
        self.pages.get(page).map(String::as_str)
    }
}

impl TableExtractor for PdfTableExtractor {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_tables(&self, page: usize, strategy: TableStrategy) -> Vec<ExtractedTable> {
        let Some(text) = self.page_text(page) else {
            return Vec::new();
        };
        match strategy {
            TableStrategy::RuledLine => ruled::extract_tables(text),
            TableStrategy::TextAlignment => text_table::extract_tables(text),
        }
    }
}
