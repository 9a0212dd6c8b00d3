//! Currency detection from a table's header row.

use fund_disclosure_models::Currency;

use crate::config::CurrencyConfig;

/// Detects the unit a table reports amounts in from its first row.
///
/// The non-empty cells are joined with spaces and checked for any foreign
/// marker; without one the domestic default applies.
#[must_use]
pub fn detect_currency<S: AsRef<str>>(header: &[Option<S>], config: &CurrencyConfig) -> Currency {
    let text = header
        .iter()
        .filter_map(|cell| cell.as_ref().map(<S as AsRef<str>>::as_ref))
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if config
        .foreign_markers
        .iter()
        .any(|marker| text.contains(marker.as_str()))
    {
        Currency::UsdMillion
    } else {
        Currency::Krw100M
    }
}
