//! Page counting via the external `pdfinfo` utility

use crate::error::{Error, Result};
use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::process::Command;

/// First integer following the `Pages:` marker in a pdfinfo-style report.
static PAGES_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Pages:\s*(\d+)").expect("valid regex"));

/// Determines how many pages a document has.
#[async_trait]
pub trait PageCounter: Send + Sync {
    /// Return the total page count of `document`.
    async fn count_pages(&self, document: &Path) -> Result<u32>;
}

/// Page counter backed by Poppler's `pdfinfo`.
pub struct PdfInfo;

#[async_trait]
impl PageCounter for PdfInfo {
    async fn count_pages(&self, document: &Path) -> Result<u32> {
        let output = Command::new("pdfinfo")
            .arg(document)
            .output()
            .await
            .map_err(|e| Error::PageCountUnavailable {
                reason: format!("failed to run pdfinfo: {e}"),
            })?;

        if !output.status.success() {
            return Err(Error::PageCountUnavailable {
                reason: format!(
                    "pdfinfo exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        parse_page_count(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extract the page count from a textual report.
///
/// The report must contain a `Pages: <positive integer>` line; any
/// deviation is a hard failure.
pub fn parse_page_count(report: &str) -> Result<u32> {
    let captures = PAGES_MARKER
        .captures(report)
        .ok_or_else(|| Error::PageCountUnavailable {
            reason: "no 'Pages:' marker in report".to_string(),
        })?;

    let count = captures[1]
        .parse::<u32>()
        .map_err(|e| Error::PageCountUnavailable {
            reason: format!("unusable page count: {e}"),
        })?;

    if count == 0 {
        return Err(Error::PageCountUnavailable {
            reason: "report claims zero pages".to_string(),
        });
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pages: 4", 4)]
    #[case("Pages:           12", 12)]
    #[case("Title: invoice\nPages: 7\nEncrypted: no", 7)]
    fn parses_well_formed_reports(#[case] report: &str, #[case] expected: u32) {
        assert_eq!(parse_page_count(report).unwrap(), expected);
    }

    #[test]
    fn missing_marker_is_a_hard_failure() {
        let err = parse_page_count("Title: invoice\nEncrypted: no").unwrap_err();
        assert!(matches!(err, Error::PageCountUnavailable { .. }));
    }

    #[test]
    fn overflowing_count_is_rejected() {
        let err = parse_page_count("Pages: 99999999999999999999").unwrap_err();
        assert!(matches!(err, Error::PageCountUnavailable { .. }));
    }

    #[test]
    fn zero_pages_is_rejected() {
        let err = parse_page_count("Pages: 0").unwrap_err();
        assert!(matches!(err, Error::PageCountUnavailable { .. }));
    }

    #[test]
    fn first_marker_wins() {
        assert_eq!(parse_page_count("Pages: 3\nPages: 9").unwrap(), 3);
    }
}
