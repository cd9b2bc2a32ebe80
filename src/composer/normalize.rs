use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Canonicalizes a UTM value: parentheses removed, lowercased, and every run
/// of whitespace replaced by a single underscore.
///
/// Parentheses go first so that `"Paid (Social)"` becomes `paid_social` rather
/// than keeping a gap where the bracket stood.
pub fn normalize(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    WHITESPACE_RUN
        .replace_all(&stripped.to_lowercase(), "_")
        .into_owned()
}
