//! OCR adapter wrapping the external Tesseract engine

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

/// Recognizes text in a preprocessed page image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Run recognition over `image` with the given language hint,
    /// e.g. "eng+hin". An empty result is a valid outcome: some pages
    /// legitimately carry no text.
    async fn recognize(&self, image: &[u8], languages: &str) -> Result<String>;
}

/// OCR engine backed by the `tesseract` command-line binary, fed image
/// bytes over stdin. Recognition latency dominates the pipeline; the
/// orchestrator bounds it with the configured timeout.
pub struct TesseractCli;

#[async_trait]
impl OcrEngine for TesseractCli {
    async fn recognize(&self, image: &[u8], languages: &str) -> Result<String> {
        let child = Command::new("tesseract")
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(languages)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::RecognitionFailed {
                reason: format!("failed to run tesseract: {e}"),
            })?;

        feed_and_collect(child, image).await
    }
}

/// Feed `image` to the child's stdin while draining its stdout/stderr.
/// Both sides run concurrently: an engine that emits output while still
/// reading input would otherwise fill one pipe and deadlock on large
/// rasters.
async fn feed_and_collect(mut child: Child, image: &[u8]) -> Result<String> {
    let mut stdin = child.stdin.take().ok_or_else(|| Error::RecognitionFailed {
        reason: "engine stdin unavailable".to_string(),
    })?;

    let feed = async move {
        let written = stdin.write_all(image).await;
        drop(stdin);
        written
    };

    let (fed, output) = tokio::join!(feed, child.wait_with_output());

    let output = output.map_err(|e| Error::RecognitionFailed {
        reason: format!("engine did not complete: {e}"),
    })?;

    if !output.status.success() {
        return Err(Error::RecognitionFailed {
            reason: format!(
                "engine exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    fed.map_err(|e| Error::RecognitionFailed {
        reason: format!("failed to feed image to engine: {e}"),
    })?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
