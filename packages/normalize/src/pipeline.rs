//! The single sequential pass over a document.
//!
//! Pages, tables and rows are visited strictly in order with one
//! [`DocumentContext`]; nothing looks ahead past the current table's first
//! row and nothing is revisited. Rows that fail classification or company
//! resolution are skipped and the pass carries on.

use fund_disclosure_models::{
    ApplicationRecord, ApplicationReport, ExtractedPage, SelectionRecord, SelectionReport,
};

use crate::config::NormalizeConfig;
use crate::interpreter::{
    ApplicationInterpreter, DocumentContext, RowInterpreter, SelectionInterpreter,
};

/// Row and record totals for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Rows visited.
    pub rows_seen: usize,
    /// Rows that produced a record group (before joint-GP splitting).
    pub rows_emitted: usize,
    /// Rows skipped as non-data or nameless.
    pub rows_skipped: usize,
    /// Rows whose company cell named more than one operator.
    pub joint_gp_groups: usize,
}

/// Records and totals produced by a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOutput<R> {
    /// Records in document order.
    pub records: Vec<R>,
    /// Pass totals.
    pub stats: PassStats,
}

/// Runs `interpreter` over every row of `pages` in order.
#[must_use]
pub fn normalize_document<I: RowInterpreter>(
    interpreter: &I,
    pages: &[ExtractedPage],
) -> DocumentOutput<I::Record> {
    let mut ctx = DocumentContext::new(interpreter.kind());
    let mut records = Vec::new();
    let mut stats = PassStats::default();

    for page in pages {
        for (table_idx, table) in page.tables.iter().enumerate() {
            log::debug!(
                "Page {} table {table_idx}: {} rows",
                page.number,
                table.rows.len()
            );
            interpreter.enter_table(table, &mut ctx);

            for row in table.raw_rows(page.number, table_idx) {
                stats.rows_seen += 1;
                match interpreter.interpret(&row, &mut ctx) {
                    Some(out) => {
                        stats.rows_emitted += 1;
                        if out.is_joint() {
                            stats.joint_gp_groups += 1;
                        }
                        records.extend(out.records);
                    }
                    None => stats.rows_skipped += 1,
                }
            }
        }
    }

    log::info!(
        "Normalized {} {} rows into {} records ({} skipped, {} joint GP groups)",
        stats.rows_emitted,
        interpreter.kind(),
        records.len(),
        stats.rows_skipped,
        stats.joint_gp_groups
    );

    DocumentOutput { records, stats }
}

/// Normalizes an applicant listing.
#[must_use]
pub fn normalize_applications(
    pages: &[ExtractedPage],
    config: &NormalizeConfig,
) -> DocumentOutput<ApplicationRecord> {
    normalize_document(&ApplicationInterpreter::new(config), pages)
}

/// Normalizes a selection result.
#[must_use]
pub fn normalize_selections(
    pages: &[ExtractedPage],
    config: &NormalizeConfig,
) -> DocumentOutput<SelectionRecord> {
    normalize_document(&SelectionInterpreter::new(config), pages)
}

/// Normalizes an applicant listing into its report envelope.
#[must_use]
pub fn application_report(pages: &[ExtractedPage], config: &NormalizeConfig) -> ApplicationReport {
    let output = normalize_applications(pages, config);
    ApplicationReport::new(output.stats.rows_emitted, output.records)
}

/// Normalizes a selection result into its report envelope.
#[must_use]
pub fn selection_report(pages: &[ExtractedPage], config: &NormalizeConfig) -> SelectionReport {
    let output = normalize_selections(pages, config);
    SelectionReport::new(output.stats.joint_gp_groups, output.records)
}
