//! Locating the operator-name cell in a data row.
//!
//! Applicant listings always put the operator last. Selection results vary
//! by document, so resolution there tries named strategies in priority
//! order: an investment-firm keyword match first, then the right-most
//! non-numeric cell.

use fund_disclosure_models::DocumentKind;

use crate::cell::{char_len, is_numeric, is_numeric_or_percent};
use crate::config::NormalizeConfig;

/// The cell chosen as the operator name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCompany {
    /// Column index of the cell, excluded from amount extraction.
    pub index: usize,
    /// The cell text, possibly naming several operators.
    pub name: String,
}

type Locate = fn(&[String], &NormalizeConfig) -> Option<usize>;

/// A named column-location strategy.
struct Strategy {
    name: &'static str,
    locate: Locate,
}

const APPLICATION_STRATEGIES: &[Strategy] = &[Strategy {
    name: "last_cell",
    locate: last_cell,
}];

const SELECTION_STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "keyword",
        locate: keyword_cell,
    },
    Strategy {
        name: "last_non_numeric",
        locate: last_non_numeric_cell,
    },
];

fn last_cell(cells: &[String], _config: &NormalizeConfig) -> Option<usize> {
    cells.len().checked_sub(1)
}

fn contains_keyword(cell: &str, keywords: &[String]) -> bool {
    let lower = cell.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lower.contains(keyword.to_lowercase().as_str()))
}

fn keyword_cell(cells: &[String], config: &NormalizeConfig) -> Option<usize> {
    let selection = &config.selection;
    cells.iter().position(|cell| {
        !cell.is_empty()
            && !is_numeric_or_percent(cell)
            && char_len(cell) > selection.company_min_chars
            && contains_keyword(cell, &selection.company_keywords)
    })
}

fn last_non_numeric_cell(cells: &[String], _config: &NormalizeConfig) -> Option<usize> {
    cells
        .iter()
        .rposition(|cell| !cell.is_empty() && !is_numeric_or_percent(cell))
}

/// Finds the operator-name cell for one document kind.
#[derive(Debug, Clone, Copy)]
pub struct CompanyColumnResolver<'a> {
    kind: DocumentKind,
    config: &'a NormalizeConfig,
}

impl<'a> CompanyColumnResolver<'a> {
    /// Creates a resolver for documents of `kind`.
    #[must_use]
    pub const fn new(kind: DocumentKind, config: &'a NormalizeConfig) -> Self {
        Self { kind, config }
    }

    const fn strategies(&self) -> &'static [Strategy] {
        match self.kind {
            DocumentKind::Application => APPLICATION_STRATEGIES,
            DocumentKind::Selection => SELECTION_STRATEGIES,
        }
    }

    /// Resolves the operator cell, or `None` if the row has no usable name.
    #[must_use]
    pub fn resolve(&self, cells: &[String]) -> Option<ResolvedCompany> {
        let (strategy, index) = self
            .strategies()
            .iter()
            .find_map(|s| (s.locate)(cells, self.config).map(|idx| (s.name, idx)))?;

        let name = cells[index].as_str();
        if !self.is_usable(name) {
            log::trace!("Unusable company cell {name:?} via {strategy}");
            return None;
        }

        log::trace!("Company {name:?} at column {index} via {strategy}");
        Some(ResolvedCompany {
            index,
            name: name.to_owned(),
        })
    }

    fn is_usable(&self, name: &str) -> bool {
        if name.is_empty() || self.config.is_placeholder(name) {
            return false;
        }
        match self.kind {
            DocumentKind::Application => !is_numeric(name),
            DocumentKind::Selection => true,
        }
    }
}
