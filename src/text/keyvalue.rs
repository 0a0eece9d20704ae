//! Line-oriented "Label: value" extraction over raw OCR text

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Lines shaped like "Some Label: remainder", anchored at line start.
static LABELED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z\s]+):\s*(.*)").expect("valid regex"));

/// Extract labeled key-value pairs from raw, pre-normalization OCR text.
///
/// This deliberately reads the raw text: normalization collapses the
/// newlines that delimit the lines this parser depends on. Labels are
/// lower-cased with internal whitespace runs replaced by single
/// underscores; values are trimmed. Lines without a colon-delimited label
/// (or with an empty label or value) are silently skipped. A repeated
/// label keeps the later line's value.
pub fn extract_key_values(raw: &str) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();

    for line in raw.lines() {
        let Some(captures) = LABELED_LINE.captures(line) else {
            continue;
        };

        let key = captures[1]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        let value = captures[2].trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }

        pairs.insert(key, value.to_string());
    }

    pairs
}
