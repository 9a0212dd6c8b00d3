#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Row-to-record normalization for fund disclosure tables.
//!
//! Takes the page/table/row grids produced by `fund_disclosure_pdf` and
//! turns them into [`ApplicationRecord`](fund_disclosure_models::ApplicationRecord)s
//! or [`SelectionRecord`](fund_disclosure_models::SelectionRecord)s in one
//! forward pass. Each row is classified, the running category and currency
//! are updated, the operator name is located and split into consortium
//! members, and the numeric cells are mapped onto financial fields.
//!
//! The entry points are [`application_report`] and [`selection_report`];
//! [`pipeline::normalize_document`] runs any [`RowInterpreter`] directly.
//! Every heuristic table lives in [`NormalizeConfig`], loaded from the
//! embedded `config/default.toml` unless a replacement is supplied.

pub mod amount;
pub mod assemble;
pub mod category;
pub mod cell;
pub mod classify;
pub mod company;
pub mod compare;
pub mod config;
pub mod currency;
pub mod fields;
pub mod interpreter;
pub mod joint_gp;
pub mod names;
pub mod pipeline;
pub mod summary;

pub use config::NormalizeConfig;
pub use interpreter::{
    ApplicationInterpreter, DocumentContext, RowInterpreter, SelectionInterpreter,
};
pub use pipeline::{
    DocumentOutput, PassStats, application_report, normalize_applications, normalize_selections,
    selection_report,
};

/// Errors raised while setting up normalization.
///
/// The pass itself never fails; malformed rows are skipped.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The heuristic configuration did not parse.
    #[error("Invalid normalize config: {0}")]
    Config(String),

    /// A configuration or reference file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
