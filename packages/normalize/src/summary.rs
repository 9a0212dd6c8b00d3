//! Category summary of an applicant listing.

use std::collections::BTreeMap;

use fund_disclosure_models::ApplicationRecord;

/// Category label for records that never saw a category row.
pub const UNCLASSIFIED: &str = "미분류";

/// Groups operator names by category, preserving record order within each
/// category. Categories iterate in sorted order.
#[must_use]
pub fn summarize_by_category(records: &[ApplicationRecord]) -> BTreeMap<String, Vec<String>> {
    let mut summary: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for record in records {
        let category = record.category.as_deref().unwrap_or(UNCLASSIFIED);
        summary
            .entry(category.to_owned())
            .or_default()
            .push(record.company.clone());
    }

    summary
}

/// Renders a summary as plain text.
#[must_use]
pub fn format_summary(summary: &BTreeMap<String, Vec<String>>) -> String {
    let mut out = String::from("=== Operators by category ===\n\n");
    let mut total = 0;

    for (category, companies) in summary {
        out.push_str(&format!("[{category}] ({})\n", companies.len()));
        for company in companies {
            out.push_str(&format!("  - {company}\n"));
        }
        out.push('\n');
        total += companies.len();
    }

    out.push_str(&format!("=== Total: {total} ==="));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Option<&str>, company: &str) -> ApplicationRecord {
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
    fn groups_by_category_in_record_order() {
        let records = vec![
            record(Some("VC"), "Beta"),
            record(None, "Orphan"),
            record(Some("Growth"), "Gamma"),
            record(Some("VC"), "Alpha"),
        ];

        let summary = summarize_by_category(&records);
        let keys: Vec<&str> = summary.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Growth", "VC", UNCLASSIFIED]);
        assert_eq!(summary["VC"], vec!["Beta", "Alpha"]);
        assert_eq!(summary[UNCLASSIFIED], vec!["Orphan"]);
    }

    #[test]
    fn formats_headings_and_total() {
        let records = vec![record(Some("VC"), "Alpha"), record(Some("VC"), "Beta")];
        let text = format_summary(&summarize_by_category(&records));

        assert!(text.contains("[VC] (2)\n  - Alpha\n  - Beta\n"));
        assert!(text.ends_with("=== Total: 2 ==="));
    }

    #[test]
    fn renders_every_category_block() {
        let records = vec![
            record(Some("VC"), "Alpha"),
            record(Some("Growth"), "Beta"),
            record(None, "Gamma"),
        ];
        let text = format_summary(&summarize_by_category(&records));

        assert_eq!(
            text,
            format!(
                "=== Operators by category ===\n\n\
                 [Growth] (1)\n  - Beta\n\n\
                 [VC] (1)\n  - Alpha\n\n\
                 [{UNCLASSIFIED}] (1)\n  - Gamma\n\n\
                 === Total: 3 ==="
            )
        );
    }

    #[test]
    fn empty_summary_has_zero_total() {
        let text = format_summary(&BTreeMap::new());
        assert!(text.ends_with("=== Total: 0 ==="));
    }
}
