//! Operator name normalization for matching names across sources.
//!
//! The same operator is written with different bracket styles, punctuation
//! and corporate suffixes depending on who typed it. These functions reduce
//! a name to a comparison key; they are never applied to emitted records.

use std::sync::LazyLock;

use regex::Regex;

static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()（）\[\]【】]").unwrap_or_else(|_| unreachable!()));

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,.\-_&]").unwrap_or_else(|_| unreachable!()));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|_| unreachable!()));

static ENGLISH_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(llc|inc|ltd|pte|limited|management|company|co|corp|corporation)\b",
    )
    .unwrap_or_else(|_| unreachable!())
});

static INVESTMENT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(인베스트먼트|벤처스|파트너스|캐피탈|자산운용|투자|에셋)$")
        .unwrap_or_else(|_| unreachable!())
});

fn collapse_whitespace(name: &str) -> String {
    WHITESPACE.replace_all(name, " ").trim().to_owned()
}

/// Lowercases, drops brackets, turns punctuation into spaces and collapses
/// whitespace.
///
/// ```
/// use fund_disclosure_normalize::names::normalize_name;
///
/// assert_eq!(normalize_name("Alpha-Beta (Korea) Co., Ltd."), "alpha beta korea co ltd");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let unbracketed = BRACKETS.replace_all(&lowered, "");
    let spaced = PUNCTUATION.replace_all(&unbracketed, " ");
    collapse_whitespace(&spaced)
}

/// Removes English corporate suffix words such as `llc`, `ltd` or `co`.
#[must_use]
pub fn remove_english_suffix(name: &str) -> String {
    collapse_whitespace(&ENGLISH_SUFFIX.replace_all(name, ""))
}

/// Removes one trailing Korean investment-firm suffix such as `파트너스`.
#[must_use]
pub fn remove_investment_suffix(name: &str) -> String {
    INVESTMENT_SUFFIX.replace(name, "").trim().to_owned()
}

/// [`normalize_name`] followed by [`remove_english_suffix`].
#[must_use]
pub fn normalize_for_comparison(name: &str) -> String {
    remove_english_suffix(&normalize_name(name))
}
