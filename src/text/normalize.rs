//! Whitespace normalization for raw OCR output

/// Collapse every maximal run of whitespace (newlines included) into a
/// single space and trim the ends. Idempotent.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("  Invoice   Number:\n\n5521\t\ttotal ", "Invoice Number: 5521 total")]
    #[case("already normalized", "already normalized")]
    #[case("", "")]
    #[case(" \n\t ", "")]
    fn collapses_whitespace_runs(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_text(raw), expected);
    }

    #[test]
    fn is_idempotent() {
        let samples = ["a  b\nc", "  x ", "", "one two three"];
        for s in samples {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once);
        }
    }

    #[test]
    fn output_has_no_consecutive_whitespace() {
        let cleaned = normalize_text("a \t b\r\n\r\nc   d");
        assert!(!cleaned.contains("  "));
        assert_eq!(cleaned, cleaned.trim());
    }
}
