#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Row grid, record, and report types for fund disclosure normalization.
//!
//! The table-geometry extractor produces [`ExtractedPage`]s; the normalizer
//! flattens them into [`RawRow`]s and emits either [`ApplicationRecord`]s
//! (applicant listings) or [`SelectionRecord`]s (selection results). The
//! report types wrap those records with the totals downstream consumers
//! expect.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which kind of disclosure document is being normalized.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    /// Applicant listing: which operators applied under which category.
    Application,
    /// Selection result: which operators were selected, with amounts.
    Selection,
}

/// Unit in which a selection table reports its amounts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Currency {
    /// Hundred-million won, the domestic default.
    #[default]
    #[serde(rename = "억원")]
    #[strum(serialize = "억원")]
    Krw100M,
    /// Millions of US dollars.
    #[serde(rename = "USD(M)")]
    #[strum(serialize = "USD(M)")]
    UsdMillion,
}

impl Currency {
    /// Returns `true` for any unit other than the domestic default.
    #[must_use]
    pub const fn is_foreign(self) -> bool {
        matches!(self, Self::UsdMillion)
    }
}

// ── Extractor grid ───────────────────────────────────────────────────────

/// One table as returned by the geometry extractor.
///
/// Cells are `None` where the extractor found a grid position with no text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedTable {
    /// Rows in reading order.
    pub rows: Vec<Vec<Option<String>>>,
}

impl ExtractedTable {
    /// Creates a table from rows of optional cells.
    #[must_use]
    pub const fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Creates a table where every cell is present.
    #[must_use]
    pub fn from_text_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect())
                .collect(),
        }
    }

    /// The table's first row, used as a proxy for its header.
    #[must_use]
    pub fn first_row(&self) -> Option<&[Option<String>]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Converts every row into a [`RawRow`] tagged with its position.
    ///
    /// Rows with no cells at all are dropped; rows whose cells are all
    /// empty are kept so the classifier can decide about them.
    pub fn raw_rows(&self, page: usize, table: usize) -> impl Iterator<Item = RawRow> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, cells)| !cells.is_empty())
            .map(move |(row, cells)| RawRow::from_cells(page, table, row, cells))
    }
}

/// All tables found on a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// One-based page number.
    pub number: usize,
    /// Tables in the order the extractor found them.
    pub tables: Vec<ExtractedTable>,
}

impl ExtractedPage {
    /// Creates a page holding the given tables.
    #[must_use]
    pub const fn new(number: usize, tables: Vec<ExtractedTable>) -> Self {
        Self { number, tables }
    }
}

/// Flattens pages into non-blank rows, the shape of the raw dump output.
#[must_use]
pub fn raw_rows(pages: &[ExtractedPage]) -> Vec<RawRow> {
    pages
        .iter()
        .flat_map(|page| {
            page.tables
                .iter()
                .enumerate()
                .flat_map(move |(idx, table)| table.raw_rows(page.number, idx))
        })
        .filter(|row| !row.is_blank())
        .collect()
}

// ── Rows ─────────────────────────────────────────────────────────────────

/// A single table row with every cell resolved to trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// One-based page number.
    pub page: usize,
    /// Zero-based table index within the page.
    pub table: usize,
    /// Zero-based row index within the table.
    pub row: usize,
    /// Cell text in column order. Absent cells are empty strings.
    pub cells: Vec<String>,
}

impl RawRow {
    /// Builds a row from extractor cells, trimming each and mapping absent
    /// cells to the empty string. Internal newlines are preserved.
    #[must_use]
    pub fn from_cells(page: usize, table: usize, row: usize, cells: &[Option<String>]) -> Self {
        Self {
            page,
            table,
            row,
            cells: cells
                .iter()
                .map(|cell| cell.as_deref().map(str::trim).unwrap_or_default().to_owned())
                .collect(),
        }
    }

    /// The first cell, or `""` for a row without cells.
    #[must_use]
    pub fn leading(&self) -> &str {
        self.cells.first().map_or("", String::as_str)
    }

    /// Returns `true` when every cell is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }
}

// ── Records ──────────────────────────────────────────────────────────────

/// One operator entry from an applicant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Investment category in effect for the source row.
    pub category: Option<String>,
    /// Operator name after joint-GP splitting.
    pub company: String,
    /// Planned fund size.
    pub amount_planned: Option<f64>,
    /// Requested co-investment.
    pub amount_requested: Option<f64>,
    /// Whether the source row named more than one operator.
    pub is_joint_gp: bool,
    /// The combined company cell, for joint-GP entries only.
    pub original_company: Option<String>,
}

/// One operator entry from a selection result.
///
/// `amount_planned` and `amount_requested` mirror `fund_size` and
/// `request_amount` for consumers written against the applicant listing
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// Operator name after joint-GP splitting.
    pub company: String,
    /// Investment category in effect for the source row.
    pub category: Option<String>,
    /// Minimum fund size for the commitment to take effect.
    pub min_formation: Option<f64>,
    /// Government co-investment commitment.
    pub mo_tae: Option<f64>,
    /// Planned total fund size.
    pub fund_size: Option<f64>,
    /// Requested or awarded co-investment.
    pub request_amount: Option<f64>,
    /// Unit of every amount on this record.
    pub currency: Currency,
    /// Whether the source row named more than one operator.
    pub is_joint_gp: bool,
    /// The combined company cell, for joint-GP entries only.
    pub original_company: Option<String>,
    /// Number of operators sharing the source row, for joint-GP entries only.
    pub joint_gp_count: Option<usize>,
    /// `min_formation` before joint-GP proration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_min_formation: Option<f64>,
    /// `mo_tae` before joint-GP proration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_mo_tae: Option<f64>,
    /// `fund_size` before joint-GP proration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_fund_size: Option<f64>,
    /// `request_amount` before joint-GP proration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_request_amount: Option<f64>,
    /// Same as `fund_size`.
    pub amount_planned: Option<f64>,
    /// Same as `request_amount`.
    pub amount_requested: Option<f64>,
}

impl SelectionRecord {
    /// Returns `true` if any pre-split amount is recorded.
    #[must_use]
    pub const fn has_original_amounts(&self) -> bool {
        self.original_min_formation.is_some()
            || self.original_mo_tae.is_some()
            || self.original_fund_size.is_some()
            || self.original_request_amount.is_some()
    }
}

// ── Reports ──────────────────────────────────────────────────────────────

/// Normalized applicant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReport {
    /// Always [`DocumentKind::Application`].
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Number of data rows before joint-GP splitting.
    pub total_funds: usize,
    /// Number of operator entries after splitting.
    pub total_operators: usize,
    /// The operator entries in document order.
    pub applications: Vec<ApplicationRecord>,
}

impl ApplicationReport {
    /// Wraps records produced from `total_funds` source rows.
    #[must_use]
    pub fn new(total_funds: usize, applications: Vec<ApplicationRecord>) -> Self {
        Self {
            kind: DocumentKind::Application,
            total_funds,
            total_operators: applications.len(),
            applications,
        }
    }
}

/// Normalized selection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionReport {
    /// Always [`DocumentKind::Selection`].
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Number of operator entries after splitting.
    pub total_operators: usize,
    /// Number of source rows that named more than one operator.
    pub joint_gp_count: usize,
    /// Number of operator entries flagged as joint GP.
    pub joint_gp_operators: usize,
    /// Whether any record is reported in US dollars.
    pub has_usd: bool,
    /// Every currency observed on a record.
    pub currencies: BTreeSet<Currency>,
    /// The operator entries in document order.
    pub applications: Vec<SelectionRecord>,
}

impl SelectionReport {
    /// Wraps records, deriving the currency and joint-GP totals from them.
    #[must_use]
    pub fn new(joint_gp_count: usize, applications: Vec<SelectionRecord>) -> Self {
        let currencies: BTreeSet<Currency> = applications.iter().map(|r| r.currency).collect();
        Self {
            kind: DocumentKind::Selection,
            total_operators: applications.len(),
            joint_gp_count,
            joint_gp_operators: applications.iter().filter(|r| r.is_joint_gp).count(),
            has_usd: currencies.contains(&Currency::UsdMillion),
            currencies,
            applications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(company: &str, currency: Currency, joint: bool) -> SelectionRecord {
        SelectionRecord {
            company: company.to_owned(),
            category: None,
            min_formation: None,
            mo_tae: None,
            fund_size: None,
            request_amount: None,
            currency,
            is_joint_gp: joint,
            original_company: None,
            joint_gp_count: None,
            original_min_formation: None,
            original_mo_tae: None,
            original_fund_size: None,
            original_request_amount: None,
            amount_planned: None,
            amount_requested: None,
        }
    }

    #[test]
    fn currency_labels_match_source_units() {
        assert_eq!(Currency::Krw100M.to_string(), "억원");
        assert_eq!(Currency::UsdMillion.to_string(), "USD(M)");
        assert_eq!("USD(M)".parse::<Currency>().unwrap(), Currency::UsdMillion);
        assert_eq!(
            serde_json::to_string(&Currency::UsdMillion).unwrap(),
            "\"USD(M)\""
        );
        assert_eq!(Currency::default(), Currency::Krw100M);
    }

    #[test]
    fn raw_row_trims_and_fills_absent_cells() {
        let cells = vec![Some("  VC ".to_owned()), None, Some("A\nB ".to_owned())];
        let row = RawRow::from_cells(1, 0, 3, &cells);
        assert_eq!(row.cells, vec!["VC", "", "A\nB"]);
        assert_eq!(row.leading(), "VC");
        assert!(!row.is_blank());
    }

    #[test]
    fn raw_rows_skips_blank_rows() {
        let table = ExtractedTable::new(vec![
            vec![Some("VC".to_owned()), Some("100".to_owned())],
            vec![None, Some("   ".to_owned())],
            vec![],
            vec![Some("Growth".to_owned()), None],
        ]);
        let pages = vec![ExtractedPage::new(2, vec![table])];

        let rows = raw_rows(&pages);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].page, 2);
        assert_eq!(rows[1].row, 3);
    }

    #[test]
    fn selection_report_tallies_currencies_and_joint_entries() {
        let report = SelectionReport::new(
            1,
            vec![
                selection("Alpha", Currency::Krw100M, true),
                selection("Beta", Currency::Krw100M, true),
                selection("Gamma", Currency::UsdMillion, false),
            ],
        );
        assert_eq!(report.total_operators, 3);
        assert_eq!(report.joint_gp_operators, 2);
        assert!(report.has_usd);
        assert_eq!(report.currencies.len(), 2);
    }

    #[test]
    fn single_operator_selection_omits_original_amounts() {
        let json = serde_json::to_value(selection("Alpha", Currency::Krw100M, false)).unwrap();
        assert!(json.get("original_fund_size").is_none());
        assert!(json.get("original_company").is_some());
    }

    #[test]
    fn report_kind_serializes_as_type() {
        let report = ApplicationReport::new(0, Vec::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "application");
    }
}
