//! Data-row classification.
//!
//! Extracted tables interleave header rows, total rows and blank separators
//! with the data rows. Each rejection rule is a named predicate in an
//! ordered rule table; the first matching rule decides the verdict.

use fund_disclosure_models::{DocumentKind, RawRow};

use crate::config::NormalizeConfig;

/// Why a row was not treated as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Every cell is empty.
    Blank,
    /// The row carries column header text.
    Header,
    /// The leading cell is a total or subtotal marker.
    Total,
    /// The row has fewer cells than the layout requires.
    TooFewCells,
}

impl RejectReason {
    /// Short rule name used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Header => "header",
            Self::Total => "total",
            Self::TooFewCells => "too_few_cells",
        }
    }
}

/// Classification outcome for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A data row of the given document kind.
    Accept(DocumentKind),
    /// Not a data row.
    Reject(RejectReason),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Accept`].
    #[must_use]
    pub const fn is_accept(self) -> bool {
        matches!(self, Self::Accept(_))
    }
}

type Predicate = fn(&RawRow, DocumentKind, &NormalizeConfig) -> bool;

/// A named rejection rule.
struct Rule {
    reason: RejectReason,
    matches: Predicate,
}

/// Rejection rules in evaluation order.
const RULES: &[Rule] = &[
    Rule {
        reason: RejectReason::Blank,
        matches: is_blank,
    },
    Rule {
        reason: RejectReason::Header,
        matches: is_header,
    },
    Rule {
        reason: RejectReason::Total,
        matches: is_total,
    },
    Rule {
        reason: RejectReason::TooFewCells,
        matches: has_too_few_cells,
    },
];

fn is_blank(row: &RawRow, _kind: DocumentKind, _config: &NormalizeConfig) -> bool {
    row.cells.iter().all(|cell| cell.trim().is_empty())
}

fn is_header(row: &RawRow, kind: DocumentKind, config: &NormalizeConfig) -> bool {
    match kind {
        DocumentKind::Application => {
            let app = &config.application;
            row.leading().contains(app.category_header.as_str())
                || row
                    .cells
                    .iter()
                    .any(|cell| cell.contains(app.amount_header.as_str()))
        }
        DocumentKind::Selection => row.cells.iter().any(|cell| {
            config
                .selection
                .header_tokens
                .iter()
                .any(|token| cell.contains(token.as_str()))
        }),
    }
}

fn is_total(row: &RawRow, _kind: DocumentKind, config: &NormalizeConfig) -> bool {
    let leading = row.leading();
    config.total_markers.iter().any(|marker| marker == leading)
}

fn has_too_few_cells(row: &RawRow, kind: DocumentKind, config: &NormalizeConfig) -> bool {
    kind == DocumentKind::Application && row.cells.len() < config.application.min_cells
}

/// Decides which rows of a document are data rows.
#[derive(Debug, Clone, Copy)]
pub struct RowClassifier<'a> {
    kind: DocumentKind,
    config: &'a NormalizeConfig,
}

impl<'a> RowClassifier<'a> {
    /// Creates a classifier for documents of `kind`.
    #[must_use]
    pub const fn new(kind: DocumentKind, config: &'a NormalizeConfig) -> Self {
        Self { kind, config }
    }

    /// Classifies a row, returning the first rule that rejects it.
    #[must_use]
    pub fn classify(&self, row: &RawRow) -> Verdict {
        RULES
            .iter()
            .find(|rule| (rule.matches)(row, self.kind, self.config))
            .map_or(Verdict::Accept(self.kind), |rule| {
                log::trace!(
                    "Rejected row p{} t{} r{} ({}): {:?}",
                    row.page,
                    row.table,
                    row.row,
                    rule.reason.name(),
                    row.cells
                );
                Verdict::Reject(rule.reason)
            })
    }
}
