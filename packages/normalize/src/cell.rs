//! Shared cell-shape predicates.

use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d,.\s]+$").unwrap_or_else(|_| unreachable!()));

static NUMERIC_OR_PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d,.\s%]+$").unwrap_or_else(|_| unreachable!()));

/// Returns `true` if the cell holds only digits, separators and whitespace.
#[must_use]
pub fn is_numeric(cell: &str) -> bool {
    NUMERIC_RE.is_match(cell)
}

/// Like [`is_numeric`] but also allows percent signs.
#[must_use]
pub fn is_numeric_or_percent(cell: &str) -> bool {
    NUMERIC_OR_PERCENT_RE.is_match(cell)
}

/// Cell length in characters, not bytes.
#[must_use]
pub fn char_len(cell: &str) -> usize {
    cell.chars().count()
}
