//! Text-alignment table extraction from PDF text.
//!
//! Fallback for tables drawn without borders. A gap of two or more spaces
//! separates cells, and a run of consecutive lines that each hold at least
//! two cells is one table; any other line ends it.
//!
//! Rows are positional: the column start offsets are inferred from the
//! cell spans of every row in the table (spans that overlap belong to the
//! same column), and each line is then sliced at those offsets. A column
//! a row leaves blank comes out as `None`, so an indented continuation row
//! keeps its empty leading cell instead of shifting left.

use std::sync::LazyLock;

use fund_disclosure_models::ExtractedTable;
use regex::Regex;

static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").unwrap_or_else(|_| unreachable!()));

/// Minimum cells for a line to count as a table row.
const MIN_CELLS: usize = 2;

/// Tab stop width used when expanding tabs.
const TAB_WIDTH: usize = 8;

/// Character range `[start, end)` occupied by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

/// A table line with tabs expanded, kept as chars for offset slicing.
struct Line {
    chars: Vec<char>,
    spans: Vec<Span>,
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

fn push_span(line: &str, from: usize, to: usize, spans: &mut Vec<Span>) {
    let segment = &line[from..to];
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = segment.len() - segment.trim_start().len();
    let start = line[..from + lead].chars().count();
    spans.push(Span {
        start,
        end: start + trimmed.chars().count(),
    });
}

/// Finds the cell spans of a tab-expanded line, in char offsets.
fn cell_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for gap in COLUMN_GAP.find_iter(line) {
        push_span(line, cursor, gap.start(), &mut spans);
        cursor = gap.end();
    }
    push_span(line, cursor, line.len(), &mut spans);
    spans
}

/// Merges overlapping spans across all rows into columns and returns each
/// column's start offset.
fn column_starts(lines: &[Line]) -> Vec<usize> {
    let mut spans: Vec<Span> = lines.iter().flat_map(|l| l.spans.iter().copied()).collect();
    spans.sort_by_key(|span| span.start);

    let mut columns: Vec<Span> = Vec::new();
    for span in spans {
        match columns.last_mut() {
            Some(last) if span.start < last.end => last.end = last.end.max(span.end),
            _ => columns.push(span),
        }
    }

    columns.iter().map(|column| column.start).collect()
}

/// Slices a line at the column offsets; blank columns become `None`.
fn slice_row(chars: &[char], column_starts: &[usize]) -> Vec<Option<String>> {
    column_starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = column_starts
                .get(i + 1)
                .copied()
                .unwrap_or(chars.len())
                .min(chars.len());
            let cell: String = if start < end {
                chars[start..end].iter().collect()
            } else {
                String::new()
            };
            let cell = cell.trim();
            (!cell.is_empty()).then(|| cell.to_owned())
        })
        .collect()
}

fn build_table(lines: &[Line]) -> ExtractedTable {
    let starts = column_starts(lines);
    ExtractedTable::new(
        lines
            .iter()
            .map(|line| slice_row(&line.chars, &starts))
            .collect(),
    )
}

/// Extracts every whitespace-aligned table from one page of text.
#[must_use]
pub fn extract_tables(page_text: &str) -> Vec<ExtractedTable> {
    let mut tables = Vec::new();
    let mut current: Vec<Line> = Vec::new();

    for raw in page_text.lines() {
        let expanded = expand_tabs(raw.trim_end());
        let spans = cell_spans(&expanded);
        if spans.len() >= MIN_CELLS {
            current.push(Line {
                chars: expanded.chars().collect(),
                spans,
            });
        } else if !current.is_empty() {
            tables.push(build_table(&current));
            current.clear();
        }
    }

    if !current.is_empty() {
        tables.push(build_table(&current));
    }

    log::trace!("Text alignment found {} table(s)", tables.len());

    tables
}
