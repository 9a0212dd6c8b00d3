//! Numeric extraction from noisy amount cells.
//!
//! Disclosure tables mix bare numbers with unit suffixes, footnote marks and
//! thousands separators (`"1,200억"`, `"350 (예정)"`). The parser keeps the
//! first run of digits and dots after removing separators and horizontal
//! whitespace. Line breaks are kept, so stacked amounts in one cell
//! (`"300\n200"`) never merge into a single number.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.]+").unwrap_or_else(|_| unreachable!()));

/// Maps an ASCII or full-width digit to ASCII; other digits are rejected.
///
/// Full-width digits (`０`-`９`) show up in Korean documents.
fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' | '.' => Some(c),
        '０'..='９' => char::from_u32(u32::from(c) - u32::from('０') + u32::from('0')),
        _ => None,
    }
}

/// Extracts the first numeric value from a cell.
///
/// Returns `None` for an empty cell, a cell with no digits, or a digit run
/// that is not a valid number (`"1.2.3"`).
///
/// ```
/// use fund_disclosure_normalize::amount::parse_amount;
///
/// assert_eq!(parse_amount("1,200억"), Some(1200.0));
/// assert_eq!(parse_amount(" 35 . 5 "), Some(35.5));
/// assert_eq!(parse_amount("300\n200"), Some(300.0));
/// assert_eq!(parse_amount("-"), None);
/// ```
#[must_use]
pub fn parse_amount(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }

    let cleaned: String = cell
        .chars()
        .filter(|c| !matches!(*c, ',' | ' ' | '\t' | '\u{00A0}'))
        .collect();

    let digits: String = NUMBER_RE
        .find(&cleaned)?
        .as_str()
        .chars()
        .map(ascii_digit)
        .collect::<Option<String>>()?;

    digits.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_amount(cell: &str, expected: f64) {
        let value = parse_amount(cell).unwrap_or_else(|| panic!("no amount in {cell:?}"));
        assert!((value - expected).abs() < f64::EPSILON, "{cell:?} -> {value}");
    }

    #[test]
    fn parses_plain_and_separated_numbers() {
        assert_amount("100", 100.0);
        assert_amount("1,234,567", 1_234_567.0);
        assert_amount("12.5", 12.5);
    }

    #[test]
    fn takes_first_numeric_run() {
        assert_amount("약 300억원 (2차 500)", 300.0);
        assert_amount("USD 25.5M", 25.5);
        assert_amount("20%", 20.0);
    }

    #[test]
    fn ignores_interior_whitespace() {
        assert_amount("1 000", 1000.0);
        assert_amount("\n45\n", 45.0);
    }

    #[test]
    fn stacked_amounts_keep_the_first_line() {
        assert_amount("300\n200", 300.0);
        assert_amount("1,500\r\n2,000", 1500.0);
    }

    #[test]
    fn full_width_digits_are_read() {
        assert_amount("１００", 100.0);
        assert_amount("１,２００억", 1200.0);
        assert_amount("１２.５", 12.5);
    }

    #[test]
    fn empty_and_textual_cells_have_no_value() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("Alpha Capital"), None);
    }

    #[test]
    fn malformed_digit_runs_have_no_value() {
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("."), None);
    }
}
