//! Row interpretation strategies for the two document kinds.
//!
//! Both strategies share classification, category tracking, amount parsing
//! and joint-GP splitting; they differ in where the operator name sits and
//! how amounts map to fields. State that carries across rows lives in a
//! [`DocumentContext`] owned by the caller, one per document.

use fund_disclosure_models::{
    ApplicationRecord, Currency, DocumentKind, ExtractedTable, RawRow, SelectionRecord,
};

use crate::assemble::{assemble_application, assemble_selection};
use crate::category::CategoryTracker;
use crate::classify::RowClassifier;
use crate::company::CompanyColumnResolver;
use crate::config::NormalizeConfig;
use crate::currency::detect_currency;
use crate::fields::{AmountSet, ApplicationAmounts, SelectionAmounts};
use crate::joint_gp::JointGpGroup;

/// Forward-only state threaded through one document pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    category: CategoryTracker,
    currency: Currency,
}

impl DocumentContext {
    /// Creates fresh state for a document of `kind`.
    #[must_use]
    pub const fn new(kind: DocumentKind) -> Self {
        Self {
            category: CategoryTracker::new(kind),
            currency: Currency::Krw100M,
        }
    }

    /// The category in effect.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.current()
    }

    /// The currency in effect.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Replaces the currency for rows from here on.
    pub const fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    /// Updates the category from a row's leading cell.
    pub fn observe_category(&mut self, leading: &str, config: &NormalizeConfig) {
        self.category.observe(leading, config);
    }
}

/// Records produced from one accepted row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecords<R> {
    /// One record per operator, in split order.
    pub records: Vec<R>,
    /// Number of operators the company cell named.
    pub group_size: usize,
}

impl<R> RowRecords<R> {
    /// Returns `true` when the row named more than one operator.
    #[must_use]
    pub const fn is_joint(&self) -> bool {
        self.group_size > 1
    }
}

/// Turns data rows of one document kind into records.
pub trait RowInterpreter {
    /// Record type emitted per operator.
    type Record;

    /// Document kind this strategy handles.
    fn kind(&self) -> DocumentKind;

    /// Heuristic tables in use.
    fn config(&self) -> &NormalizeConfig;

    /// Called once when the pass enters a new table, before its rows.
    fn enter_table(&self, _table: &ExtractedTable, _ctx: &mut DocumentContext) {}

    /// Extracts records from an accepted row whose category has already
    /// been observed. Returns `None` to skip the row.
    fn extract(&self, row: &RawRow, ctx: &DocumentContext) -> Option<RowRecords<Self::Record>>;

    /// Classifies a row, updates the category and extracts its records.
    ///
    /// Returns `None` for rows that are not data or have no operator name.
    fn interpret(
        &self,
        row: &RawRow,
        ctx: &mut DocumentContext,
    ) -> Option<RowRecords<Self::Record>> {
        let config = self.config();
        if !RowClassifier::new(self.kind(), config)
            .classify(row)
            .is_accept()
        {
            return None;
        }
        ctx.observe_category(row.leading(), config);
        self.extract(row, ctx)
    }
}

fn split_company(row: &RawRow, name: &str) -> JointGpGroup {
    let group = JointGpGroup::split(name);
    if group.is_empty() {
        log::warn!(
            "Company cell {name:?} on p{} t{} r{} holds no operator names",
            row.page,
            row.table,
            row.row
        );
    }
    group
}

/// Positional strategy for applicant listings.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationInterpreter<'a> {
    config: &'a NormalizeConfig,
}

impl<'a> ApplicationInterpreter<'a> {
    /// Creates the strategy over `config`.
    #[must_use]
    pub const fn new(config: &'a NormalizeConfig) -> Self {
        Self { config }
    }
}

impl RowInterpreter for ApplicationInterpreter<'_> {
    type Record = ApplicationRecord;

    fn kind(&self) -> DocumentKind {
        DocumentKind::Application
    }

    fn config(&self) -> &NormalizeConfig {
        self.config
    }

    fn extract(&self, row: &RawRow, ctx: &DocumentContext) -> Option<RowRecords<ApplicationRecord>> {
        let company = CompanyColumnResolver::new(self.kind(), self.config).resolve(&row.cells)?;
        let amounts = ApplicationAmounts::from_cells(&row.cells);
        let group = split_company(row, &company.name);

        Some(RowRecords {
            records: assemble_application(ctx.category(), &group, amounts),
            group_size: group.len(),
        })
    }
}

/// Keyword-and-count strategy for selection results.
#[derive(Debug, Clone, Copy)]
pub struct SelectionInterpreter<'a> {
    config: &'a NormalizeConfig,
}

impl<'a> SelectionInterpreter<'a> {
    /// Creates the strategy over `config`.
    #[must_use]
    pub const fn new(config: &'a NormalizeConfig) -> Self {
        Self { config }
    }
}

impl RowInterpreter for SelectionInterpreter<'_> {
    type Record = SelectionRecord;

    fn kind(&self) -> DocumentKind {
        DocumentKind::Selection
    }

    fn config(&self) -> &NormalizeConfig {
        self.config
    }

    fn enter_table(&self, table: &ExtractedTable, ctx: &mut DocumentContext) {
        if let Some(header) = table.first_row() {
            let currency = detect_currency(header, &self.config.currency);
            if currency != ctx.currency() {
                log::debug!("Currency -> {currency}");
            }
            ctx.set_currency(currency);
        }
    }

    fn extract(&self, row: &RawRow, ctx: &DocumentContext) -> Option<RowRecords<SelectionRecord>> {
        let company = CompanyColumnResolver::new(self.kind(), self.config).resolve(&row.cells)?;
        let amounts = AmountSet::from_cells(&row.cells, company.index);
        let fields = SelectionAmounts::from_amounts(&amounts);
        let group = split_company(row, &company.name);

        Some(RowRecords {
            records: assemble_selection(ctx.category(), &group, fields, ctx.currency()),
            group_size: group.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        RawRow {
            page: 1,
            table: 0,
            row: 0,
            cells: cells.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    #[test]
    fn application_row_becomes_record() {
        let config = NormalizeConfig::default();
        let interpreter = ApplicationInterpreter::new(&config);
        let mut ctx = DocumentContext::new(DocumentKind::Application);

        let out = interpreter
            .interpret(&row(&["VC", "100", "50", "Alpha Capital"]), &mut ctx)
            .unwrap();
        assert_eq!(out.group_size, 1);
        assert_eq!(
            out.records,
            vec![ApplicationRecord {
                category: Some("VC".to_owned()),
                company: "Alpha Capital".to_owned(),
                amount_planned: Some(100.0),
                amount_requested: Some(50.0),
                is_joint_gp: false,
                original_company: None,
            }]
        );
    }

    #[test]
    fn rejected_rows_leave_category_untouched() {
        let config = NormalizeConfig::default();
        let interpreter = ApplicationInterpreter::new(&config);
        let mut ctx = DocumentContext::new(DocumentKind::Application);

        assert!(
            interpreter
                .interpret(&row(&["Growth", "1", "Alpha"]), &mut ctx)
                .is_none()
        );
        assert_eq!(ctx.category(), None);
    }

    #[test]
    fn category_updates_even_when_company_is_missing() {
        let config = NormalizeConfig::default();
        let interpreter = ApplicationInterpreter::new(&config);
        let mut ctx = DocumentContext::new(DocumentKind::Application);

        assert!(
            interpreter
                .interpret(&row(&["Growth", "1", "2", "-"]), &mut ctx)
                .is_none()
        );
        assert_eq!(ctx.category(), Some("Growth"));
    }

    #[test]
    fn selection_row_uses_keyword_company_and_count_mapping() {
        let config = NormalizeConfig::default();
        let interpreter = SelectionInterpreter::new(&config);
        let mut ctx = DocumentContext::new(DocumentKind::Selection);

        let out = interpreter
            .interpret(&row(&["VC", "10", "20", "30", "Beta Ventures"]), &mut ctx)
            .unwrap();
        let record = &out.records[0];
        assert_eq!(record.company, "Beta Ventures");
        assert_eq!(record.category.as_deref(), Some("VC"));
        assert_eq!(record.min_formation, None);
        assert_eq!(record.mo_tae, Some(10.0));
        assert_eq!(record.fund_size, Some(20.0));
        assert_eq!(record.request_amount, Some(30.0));
        assert_eq!(record.currency, Currency::Krw100M);
    }

    #[test]
    fn selection_enter_table_sets_currency() {
        let config = NormalizeConfig::default();
        let interpreter = SelectionInterpreter::new(&config);
        let mut ctx = DocumentContext::new(DocumentKind::Selection);

        let usd = ExtractedTable::from_text_rows([vec!["분야", "운용사", "출자금액(USD)"]]);
        interpreter.enter_table(&usd, &mut ctx);
        assert_eq!(ctx.currency(), Currency::UsdMillion);

        interpreter.enter_table(&ExtractedTable::default(), &mut ctx);
        assert_eq!(ctx.currency(), Currency::UsdMillion);

        let krw = ExtractedTable::from_text_rows([vec!["분야", "운용사", "억원"]]);
        interpreter.enter_table(&krw, &mut ctx);
        assert_eq!(ctx.currency(), Currency::Krw100M);
    }

    #[test]
    fn application_ignores_table_headers_for_currency() {
        let config = NormalizeConfig::default();
        let interpreter = ApplicationInterpreter::new(&config);
        let mut ctx = DocumentContext::new(DocumentKind::Application);

        let usd = ExtractedTable::from_text_rows([vec!["USD"]]);
        interpreter.enter_table(&usd, &mut ctx);
        assert_eq!(ctx.currency(), Currency::Krw100M);
    }
}
