//! Generic entity extraction over normalized page text

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMAILS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("valid regex"));

/// Numeric dd/mm/yyyy-style dates or worded "Month dd, yyyy" dates.
static DATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})|(\w+\s\d{1,2},\s\d{4})").expect("valid regex")
});

static URLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// Currency marker, optional whitespace, then a numeric literal with
/// optional thousands separators and decimal part.
static AMOUNTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:₹|\$|INR)\s*[\d,]+\.?\d*").expect("valid regex"));

/// Entities recognized in one page's cleaned text, grouped by category.
/// Every category is always present; a category with no matches is an
/// empty sequence, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntitySet {
    pub emails: Vec<String>,
    pub dates: Vec<String>,
    pub urls: Vec<String>,
    pub amounts: Vec<String>,
}

/// Scan cleaned text for emails, dates, URLs and monetary amounts.
///
/// Matches within a category are non-overlapping, returned in order of
/// first appearance, duplicates preserved. Pure pattern matching, no
/// external calls.
pub fn extract_entities(cleaned: &str) -> EntitySet {
    EntitySet {
        emails: all_matches(&EMAILS, cleaned),
        dates: all_matches(&DATES, cleaned),
        urls: all_matches(&URLS, cleaned),
        amounts: all_matches(&AMOUNTS, cleaned),
    }
}

fn all_matches(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn finds_each_category_once() {
        let cleaned = "Contact a@b.com or visit https://x.io on 12/05/2024 for ₹1,200.50";
        let entities = extract_entities(cleaned);

        assert_eq!(entities.emails, vec!["a@b.com"]);
        assert_eq!(entities.urls, vec!["https://x.io"]);
        assert_eq!(entities.dates, vec!["12/05/2024"]);
        assert_eq!(entities.amounts, vec!["₹1,200.50"]);
    }

    #[test]
    fn empty_categories_are_empty_sequences() {
        let entities = extract_entities("no structured fragments here");
        assert_eq!(entities, EntitySet::default());
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let entities =
            extract_entities("pay $5 then $5 then mail billing@acme.in and ops@acme.in");
        assert_eq!(entities.amounts, vec!["$5", "$5"]);
        assert_eq!(entities.emails, vec!["billing@acme.in", "ops@acme.in"]);
    }

    #[rstest]
    #[case("due 3-4-23", "3-4-23")]
    #[case("signed January 5, 2024 in Pune", "January 5, 2024")]
    fn matches_both_date_forms(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(extract_entities(text).dates, vec![expected]);
    }

    #[rstest]
    #[case("total INR 4,500", "INR 4,500")]
    #[case("fee $ 300", "$ 300")]
    #[case("balance ₹98", "₹98")]
    fn matches_currency_markers(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(extract_entities(text).amounts, vec![expected]);
    }

    #[test]
    fn urls_run_to_the_next_whitespace() {
        let entities = extract_entities("see http://a.io/path?q=1 and https://b.io.");
        assert_eq!(entities.urls, vec!["http://a.io/path?q=1", "https://b.io."]);
    }
}
