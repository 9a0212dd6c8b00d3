//! Carry-forward of the current investment category.
//!
//! Category labels appear only on the first row of each category block
//! (merged cells in the source document); following rows leave the leading
//! cell empty. The tracker remembers the last label seen for the rest of the
//! document.

use fund_disclosure_models::DocumentKind;

use crate::cell::{char_len, is_numeric};
use crate::config::NormalizeConfig;

/// Returns `true` if `leading` should replace the current category.
///
/// Selection documents also put long company names and bare numbers in the
/// leading column, so there the label must be short and non-numeric.
#[must_use]
pub fn is_category_label(leading: &str, kind: DocumentKind, config: &NormalizeConfig) -> bool {
    if leading.is_empty() || config.is_placeholder(leading) {
        return false;
    }
    match kind {
        DocumentKind::Application => true,
        DocumentKind::Selection => {
            !is_numeric(leading) && char_len(leading) < config.selection.category_max_chars
        }
    }
}

/// Document-scoped category state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTracker {
    kind: DocumentKind,
    current: Option<String>,
}

impl CategoryTracker {
    /// Creates a tracker with no category set.
    #[must_use]
    pub const fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            current: None,
        }
    }

    /// Updates the category from a row's leading cell if it qualifies and
    /// returns the category now in effect.
    pub fn observe(&mut self, leading: &str, config: &NormalizeConfig) -> Option<&str> {
        if is_category_label(leading, self.kind, config) && self.current.as_deref() != Some(leading)
        {
            log::debug!("Category -> {leading}");
            self.current = Some(leading.to_owned());
        }
        self.current()
    }

    /// The category in effect, if any row has set one.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_category_forward() {
        let config = NormalizeConfig::default();
        let mut tracker = CategoryTracker::new(DocumentKind::Application);

        assert_eq!(tracker.observe("A", &config), Some("A"));
        assert_eq!(tracker.observe("", &config), Some("A"));
        assert_eq!(tracker.observe("", &config), Some("A"));
        assert_eq!(tracker.observe("-", &config), Some("A"));
        assert_eq!(tracker.observe("B", &config), Some("B"));
    }

    #[test]
    fn starts_unset() {
        let config = NormalizeConfig::default();
        let mut tracker = CategoryTracker::new(DocumentKind::Selection);
        assert_eq!(tracker.current(), None);
        assert_eq!(tracker.observe("", &config), None);
    }

    #[test]
    fn selection_ignores_numbers_and_long_labels() {
        let config = NormalizeConfig::default();
        let mut tracker = CategoryTracker::new(DocumentKind::Selection);

        tracker.observe("혁신성장", &config);
        assert_eq!(tracker.observe("1,200", &config), Some("혁신성장"));
        assert_eq!(
            tracker.observe("A Very Long Operator Name Partners", &config),
            Some("혁신성장")
        );
    }

    #[test]
    fn selection_threshold_counts_characters() {
        let config = NormalizeConfig::default();
        let nineteen = "가".repeat(19);
        let twenty = "가".repeat(20);

        assert!(is_category_label(&nineteen, DocumentKind::Selection, &config));
        assert!(!is_category_label(&twenty, DocumentKind::Selection, &config));
    }

    #[test]
    fn application_accepts_any_non_placeholder_label() {
        let config = NormalizeConfig::default();
        assert!(is_category_label("2024", DocumentKind::Application, &config));
        assert!(is_category_label(
            &"x".repeat(40),
            DocumentKind::Application,
            &config
        ));
        assert!(!is_category_label("-", DocumentKind::Application, &config));
    }
}
