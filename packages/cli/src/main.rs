#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for normalizing fund disclosure PDF tables.
//!
//! ```text
//! fund_disclosure application <source>
//! fund_disclosure selection <source>
//! fund_disclosure raw <source>
//! fund_disclosure summary <source>
//! fund_disclosure compare <source> --reference <file> [--selection] [--json]
//! ```
//!
//! `<source>` is a PDF path, an `http(s)` URL, or a `.json` page grid.
//! Structured output goes to stdout as pretty-printed JSON; logging goes to
//! stderr and is controlled with `RUST_LOG`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fund_disclosure_models::{ExtractedPage, raw_rows};
use fund_disclosure_normalize::compare::{
    ComparisonReport, ReferenceEntry, compare_results, format_comparison_report,
};
use fund_disclosure_normalize::summary::{format_summary, summarize_by_category};
use fund_disclosure_normalize::{
    NormalizeConfig, application_report, normalize_applications, normalize_selections,
    selection_report,
};
use fund_disclosure_pdf::source::{DocumentSource, load_pages};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "fund_disclosure",
    about = "Normalize fund disclosure PDF tables into records"
)]
struct Cli {
    /// TOML file replacing the built-in heuristic tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an applicant listing
    Application {
        /// PDF path, URL, or JSON page grid
        source: String,
    },
    /// Normalize a selection result
    Selection {
        /// PDF path, URL, or JSON page grid
        source: String,
    },
    /// Dump every non-blank extracted row
    Raw {
        /// PDF path, URL, or JSON page grid
        source: String,
    },
    /// List applicant operators by category
    Summary {
        /// PDF path, URL, or JSON page grid
        source: String,
    },
    /// Compare parsed records with an independently produced list
    Compare {
        /// PDF path, URL, or JSON page grid
        source: String,
        /// JSON array of `{"name": ..., "category": ...}` entries
        #[arg(long)]
        reference: PathBuf,
        /// Parse the source as a selection result
        #[arg(long)]
        selection: bool,
        /// Print the comparison as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<NormalizeConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            log::info!("Using normalize config from {}", path.display());
            Ok(NormalizeConfig::from_file(path)?)
        }
        None => Ok(NormalizeConfig::default()),
    }
}

async fn load_source(source: &str) -> Result<Vec<ExtractedPage>, Box<dyn std::error::Error>> {
    Ok(load_pages(&DocumentSource::parse(source)).await?)
}

async fn load_reference(path: &Path) -> Result<Vec<ReferenceEntry>, Box<dyn std::error::Error>> {
    let text = tokio::fs::read_to_string(path).await?;
    let entries: Vec<ReferenceEntry> = serde_json::from_str(&text)?;
    log::info!("Loaded {} reference entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn compare(
    pages: &[ExtractedPage],
    config: &NormalizeConfig,
    reference: &[ReferenceEntry],
    selection: bool,
) -> ComparisonReport {
    if selection {
        compare_results(reference, &normalize_selections(pages, config).records)
    } else {
        compare_results(reference, &normalize_applications(pages, config).records)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Application { source } => {
            let pages = load_source(&source).await?;
            print_json(&application_report(&pages, &config))?;
        }
        Commands::Selection { source } => {
            let pages = load_source(&source).await?;
            print_json(&selection_report(&pages, &config))?;
        }
        Commands::Raw { source } => {
            let pages = load_source(&source).await?;
            print_json(&raw_rows(&pages))?;
        }
        Commands::Summary { source } => {
            let pages = load_source(&source).await?;
            let records = normalize_applications(&pages, &config).records;
            println!("{}", format_summary(&summarize_by_category(&records)));
        }
        Commands::Compare {
            source,
            reference,
            selection,
            json,
        } => {
            let entries = load_reference(&reference).await?;
            let pages = load_source(&source).await?;
            let report = compare(&pages, &config, &entries, selection);

            if json {
                print_json(&report)?;
            } else {
                println!("{}", format_comparison_report(&report));
            }

            if report.has_differences() {
                log::warn!("Parsed records differ from the reference list");
            }
        }
    }

    Ok(())
}
