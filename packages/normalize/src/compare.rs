//! Cross-checking parsed records against an independently produced list.
//!
//! Names and categories are compared after [`normalize_name`], so bracket
//! and punctuation differences do not count as disagreements. A category
//! missing on either side is treated as agreement.

use fund_disclosure_models::{ApplicationRecord, SelectionRecord};
use serde::{Deserialize, Serialize};

use crate::names::normalize_name;

/// Placeholder printed for entries without a category.
const NO_CATEGORY: &str = "no category";

/// A record that can take part in a comparison.
pub trait NamedRecord {
    /// Operator name.
    fn name(&self) -> &str;
    /// Category label, if any.
    fn category(&self) -> Option<&str>;
}

impl NamedRecord for ApplicationRecord {
    fn name(&self) -> &str {
        &self.company
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl NamedRecord for SelectionRecord {
    fn name(&self) -> &str {
        &self.company
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// One entry of the reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Operator name as listed.
    pub name: String,
    /// Category label, if the list gives one.
    #[serde(default)]
    pub category: Option<String>,
}

impl ReferenceEntry {
    fn from_record<R: NamedRecord>(record: &R) -> Self {
        Self {
            name: record.name().to_owned(),
            category: record.category().map(str::to_owned),
        }
    }
}

impl NamedRecord for ReferenceEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// An operator found on both sides with compatible categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedEntry {
    /// Operator name as the reference lists it.
    pub name: String,
    /// Reference category, or the parsed one when the reference has none.
    pub category: Option<String>,
}

/// An operator found on both sides with different categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictEntry {
    /// Operator name as the reference lists it.
    pub name: String,
    /// Category from the reference list.
    pub reference_category: Option<String>,
    /// Category from the parsed records.
    pub parsed_category: Option<String>,
}

/// Outcome of comparing a reference list with parsed records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    /// Operators on both sides whose categories agree.
    pub matched: Vec<MatchedEntry>,
    /// Operators on both sides whose categories differ.
    pub conflicting: Vec<ConflictEntry>,
    /// Reference entries with no parsed counterpart, in reference order.
    pub only_in_reference: Vec<ReferenceEntry>,
    /// Parsed records nobody in the reference claimed, in document order.
    pub only_in_parsed: Vec<ReferenceEntry>,
}

impl ComparisonReport {
    /// Returns `true` if anything other than clean matches was found.
    #[must_use]
    pub fn has_differences(&self) -> bool {
        !self.conflicting.is_empty()
            || !self.only_in_reference.is_empty()
            || !self.only_in_parsed.is_empty()
    }
}

/// Keys entries by normalized name. A later duplicate replaces the earlier
/// entry but keeps its position.
fn key_entries<R: NamedRecord>(entries: &[R]) -> Vec<(String, &R)> {
    let mut keyed: Vec<(String, &R)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let key = normalize_name(entry.name());
        match keyed.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = entry,
            None => keyed.push((key, entry)),
        }
    }
    keyed
}

/// Compares `reference` against `parsed`, walking the reference list in
/// order and then listing parsed records nobody claimed.
#[must_use]
pub fn compare_results<R: NamedRecord>(
    reference: &[ReferenceEntry],
    parsed: &[R],
) -> ComparisonReport {
    let mut remaining = key_entries(parsed);
    let mut report = ComparisonReport::default();

    for (key, entry) in key_entries(reference) {
        let Some(pos) = remaining.iter().position(|(k, _)| *k == key) else {
            report.only_in_reference.push(entry.clone());
            continue;
        };
        let (_, record) = remaining.remove(pos);

        let reference_category = entry.category.as_deref().map(normalize_name);
        let parsed_category = record.category().map(normalize_name);
        let agrees = match (reference_category.as_deref(), parsed_category.as_deref()) {
            (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a == b,
            _ => true,
        };

        if agrees {
            report.matched.push(MatchedEntry {
                name: entry.name.clone(),
                category: entry
                    .category
                    .clone()
                    .filter(|c| !c.is_empty())
                    .or_else(|| record.category().map(str::to_owned)),
            });
        } else {
            report.conflicting.push(ConflictEntry {
                name: entry.name.clone(),
                reference_category: entry.category.clone(),
                parsed_category: record.category().map(str::to_owned),
            });
        }
    }

    report.only_in_parsed = remaining
        .into_iter()
        .map(|(_, record)| ReferenceEntry::from_record(record))
        .collect();

    log::info!(
        "Comparison: {} matched, {} conflicting, {} reference-only, {} parsed-only",
        report.matched.len(),
        report.conflicting.len(),
        report.only_in_reference.len(),
        report.only_in_parsed.len()
    );

    report
}

/// Renders a comparison as plain text, listing only the differences in
/// detail.
#[must_use]
pub fn format_comparison_report(report: &ComparisonReport) -> String {
    let rule = "=".repeat(60);
    let mut out = format!("{rule}\nParse comparison\n{rule}\n\n");

    out.push_str(&format!(
        "Matched: {}\nConflicting: {}\nOnly in reference: {}\nOnly in parsed: {}",
        report.matched.len(),
        report.conflicting.len(),
        report.only_in_reference.len(),
        report.only_in_parsed.len()
    ));

    if !report.conflicting.is_empty() {
        out.push_str("\n\n--- Conflicting (needs review) ---");
        for item in &report.conflicting {
            out.push_str(&format!(
                "\n  {}\n    reference: {}\n    parsed: {}",
                item.name,
                item.reference_category.as_deref().unwrap_or(NO_CATEGORY),
                item.parsed_category.as_deref().unwrap_or(NO_CATEGORY)
            ));
        }
    }

    for (title, entries) in [
        ("Only in reference", &report.only_in_reference),
        ("Only in parsed", &report.only_in_parsed),
    ] {
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("\n\n--- {title} ---"));
        for item in entries {
            out.push_str(&format!(
                "\n  - {} ({})",
                item.name,
                item.category
                    .as_deref()
                    .filter(|c| !c.is_empty())
                    .unwrap_or(NO_CATEGORY)
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: Option<&str>) -> ReferenceEntry {
        ReferenceEntry {
            name: name.to_owned(),
            category: category.map(str::to_owned),
        }
    }

    fn record(company: &str, category: Option<&str>) -> ApplicationRecord {
        ApplicationRecord {
            category: category.map(str::to_owned),
            company: company.to_owned(),
            amount_planned: None,
            amount_requested: None,
            is_joint_gp: false,
            original_company: None,
        }
    }

    #[test]
    fn matches_by_normalized_name() {
        let reference = vec![entry("Alpha Capital (Korea)", Some("VC"))];
        let parsed = vec![record("alpha capital korea", Some("vc"))];

        let report = compare_results(&reference, &parsed);
        assert_eq!(
            report.matched,
            vec![MatchedEntry {
                name: "Alpha Capital (Korea)".to_owned(),
                category: Some("VC".to_owned()),
            }]
        );
        assert!(!report.has_differences());
    }

    #[test]
    fn missing_category_on_one_side_still_matches() {
        let reference = vec![entry("Alpha", None)];
        let parsed = vec![record("Alpha", Some("Growth"))];

        let report = compare_results(&reference, &parsed);
        assert_eq!(report.matched[0].category.as_deref(), Some("Growth"));
        assert!(report.conflicting.is_empty());
    }

    #[test]
    fn different_categories_conflict() {
        let reference = vec![entry("Alpha", Some("VC"))];
        let parsed = vec![record("Alpha", Some("Growth"))];

        let report = compare_results(&reference, &parsed);
        assert_eq!(
            report.conflicting,
            vec![ConflictEntry {
                name: "Alpha".to_owned(),
                reference_category: Some("VC".to_owned()),
                parsed_category: Some("Growth".to_owned()),
            }]
        );
        assert!(report.has_differences());
    }

    #[test]
    fn one_sided_entries_are_listed() {
        let reference = vec![entry("Alpha", None), entry("Beta", Some("VC"))];
        let parsed = vec![record("Beta", Some("VC")), record("Gamma", Some("PE"))];

        let report = compare_results(&reference, &parsed);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.only_in_reference, vec![entry("Alpha", None)]);
        assert_eq!(report.only_in_parsed, vec![entry("Gamma", Some("PE"))]);
    }

    #[test]
    fn duplicate_parsed_names_keep_last() {
        let reference = vec![entry("Alpha", Some("PE"))];
        let parsed = vec![record("Alpha", Some("VC")), record("ALPHA", Some("PE"))];

        let report = compare_results(&reference, &parsed);
        assert_eq!(report.matched.len(), 1);
        assert!(report.only_in_parsed.is_empty());
    }

    #[test]
    fn report_lists_differences() {
        let reference = vec![entry("Alpha", Some("VC")), entry("Beta", None)];
        let parsed = vec![record("Alpha", Some("PE")), record("Gamma", None)];

        let text = format_comparison_report(&compare_results(&reference, &parsed));
        assert!(text.contains("Conflicting: 1"));
        assert!(text.contains("  Alpha\n    reference: VC\n    parsed: PE"));
        assert!(text.contains("--- Only in reference ---\n  - Beta (no category)"));
        assert!(text.contains("--- Only in parsed ---\n  - Gamma (no category)"));
    }

    #[test]
    fn clean_report_is_counts_only() {
        let reference = vec![entry("Alpha", Some("VC"))];
        let parsed = vec![record("Alpha", Some("VC"))];

        let rule = "=".repeat(60);
        let text = format_comparison_report(&compare_results(&reference, &parsed));
        assert_eq!(
            text,
            format!(
                "{rule}\nParse comparison\n{rule}\n\n\
                 Matched: 1\nConflicting: 0\nOnly in reference: 0\nOnly in parsed: 0"
            )
        );
    }

    #[test]
    fn reference_entries_deserialize_without_category() {
        let entries: Vec<ReferenceEntry> =
            serde_json::from_str(r#"[{"name":"Alpha"},{"name":"Beta","category":"VC"}]"#)
                .unwrap();
        assert_eq!(entries, vec![entry("Alpha", None), entry("Beta", Some("VC"))]);
    }
}
