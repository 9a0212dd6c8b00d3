//! Ruled-line table extraction from PDF text.
//!
//! Disclosure tables drawn with cell borders come through text extraction
//! with their vertical rules as `|`, `│` or `┃` glyphs. A run of such lines
//! is one table; the text between rules is one cell. Lines made only of
//! horizontal rule glyphs (`-`, `─`, `┼`, ...) separate rows inside a table
//! and are skipped, as are blank lines. Any other text ends the table.

use fund_disclosure_models::ExtractedTable;

/// Glyphs that draw a vertical cell border.
const VERTICAL_RULES: &[char] = &['|', '│', '┃'];

/// Glyphs that may appear in a horizontal separator line.
const HORIZONTAL_RULES: &[char] = &[
    '-', '=', '+', '─', '━', '═', '┼', '╋', '╬', '├', '┤', '┌', '┐', '└', '┘', '┬', '┴', '┣',
    '┫', '┏', '┓', '┗', '┛', '┳', '┻', '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩',
];

fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_whitespace() || HORIZONTAL_RULES.contains(&c))
}

fn is_ruled(line: &str) -> bool {
    line.contains(VERTICAL_RULES)
}

/// Splits a ruled line into cells. Text outside the outermost rules is
/// dropped; empty cells become `None`.
fn split_cells(line: &str) -> Vec<Option<String>> {
    let trimmed = line.trim();
    let mut segments: Vec<&str> = trimmed.split(VERTICAL_RULES).collect();

    if trimmed.starts_with(VERTICAL_RULES) {
        segments.remove(0);
    }
    if trimmed.ends_with(VERTICAL_RULES) {
        segments.pop();
    }

    segments
        .into_iter()
        .map(|segment| {
            let cell = segment.trim();
            (!cell.is_empty()).then(|| cell.to_owned())
        })
        .collect()
}

/// Extracts every ruled table from one page of text.
#[must_use]
pub fn extract_tables(page_text: &str) -> Vec<ExtractedTable> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<Option<String>>> = Vec::new();

    for line in page_text.lines() {
        if is_ruled(line) {
            current.push(split_cells(line));
        } else if is_separator(line) || line.trim().is_empty() {
            // Row rule or spacing inside a bordered table.
        } else if !current.is_empty() {
            tables.push(ExtractedTable::new(std::mem::take(&mut current)));
        }
    }

    if !current.is_empty() {
        tables.push(ExtractedTable::new(current));
    }

    tables
}
