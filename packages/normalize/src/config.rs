//! Heuristic tables driving classification and column resolution.
//!
//! The defaults live in `config/default.toml` and are baked into the binary
//! with [`include_str!`]. A caller can load a replacement file with
//! [`NormalizeConfig::from_file`] to tune tokens and thresholds for a new
//! document family without recompiling.

use std::path::Path;

use serde::Deserialize;

use crate::NormalizeError;

/// Embedded default configuration.
const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// Complete set of tunables for one normalization pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NormalizeConfig {
    /// Cell text meaning "no value" (never a category or company).
    pub placeholder: String,
    /// Leading-cell values that mark total and subtotal rows.
    pub total_markers: Vec<String>,
    /// Applicant-listing specific tokens.
    pub application: ApplicationConfig,
    /// Selection-result specific tokens and thresholds.
    pub selection: SelectionConfig,
    /// Currency marker tokens.
    pub currency: CurrencyConfig,
}

/// Tunables for applicant listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationConfig {
    /// Header token matched against the leading cell.
    pub category_header: String,
    /// Header token matched against every cell.
    pub amount_header: String,
    /// Rows with fewer cells are not data rows.
    pub min_cells: usize,
}

/// Tunables for selection results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectionConfig {
    /// Any cell containing one of these marks a header row.
    pub header_tokens: Vec<String>,
    /// A leading cell must be shorter than this (in characters) to be taken
    /// as a category label.
    pub category_max_chars: usize,
    /// Substrings identifying an investment firm name.
    pub company_keywords: Vec<String>,
    /// A keyword match must be longer than this (in characters).
    pub company_min_chars: usize,
}

/// Tunables for currency detection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyConfig {
    /// Tokens that mark a table as reported in US dollars.
    pub foreign_markers: Vec<String>,
}

impl NormalizeConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Config`] if the text is not valid TOML or
    /// is missing a field.
    pub fn from_toml(toml_str: &str) -> Result<Self, NormalizeError> {
        toml::de::from_str(toml_str).map_err(|e| NormalizeError::Config(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Io`] if the file cannot be read, or
    /// [`NormalizeError::Config`] if its contents do not parse.
    pub fn from_file(path: &Path) -> Result<Self, NormalizeError> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded normalize config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Returns `true` if `cell` is the placeholder token.
    #[must_use]
    pub fn is_placeholder(&self, cell: &str) -> bool {
        cell == self.placeholder
    }
}

impl Default for NormalizeConfig {
    /// Returns the embedded default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the test suite rules
    /// out.
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse embedded default.toml: {e}"))
    }
}
