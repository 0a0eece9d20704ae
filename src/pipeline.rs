//! Pipeline orchestration
//!
//! Sequences page counting, rasterization, preprocessing, recognition and
//! the two extraction stages across all pages, and aggregates the per-page
//! results in page order. This is the only component with cross-page state;
//! everything below it is a pure function or a single-call wrapper.

use crate::error::{Error, Result};
use crate::ocr::{OcrEngine, TesseractCli};
use crate::preprocess::{Preprocessor, ScanFilter};
use crate::raster::{PageCounter, PageRasterizer, PdfInfo, PdfToCairo};
use crate::text::{extract_entities, extract_key_values, normalize_text, EntitySet};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// What to do when a single page fails mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageErrorPolicy {
    /// Abort the whole run on the first failing page. A document with one
    /// unreadable page produces no misleadingly-incomplete result.
    #[default]
    FailFast,
    /// Record the failure on that page's entry and keep going; the result
    /// still carries one entry per page.
    SkipFailedPages,
}

/// Pipeline-wide configuration. The language hint applies to every page of
/// a run; it is not a per-call knob.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// OCR language hint, e.g. "eng+hin".
    pub languages: String,
    /// Upper bound on a single page's recognition time. `None` leaves the
    /// engine unbounded.
    pub ocr_timeout: Option<Duration>,
    /// Per-page failure policy.
    pub page_error_policy: PageErrorPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            languages: "eng+hin".to_string(),
            ocr_timeout: None,
            page_error_policy: PageErrorPolicy::FailFast,
        }
    }
}

/// Extractions for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    /// 1-based page index.
    pub page: u32,
    /// Whitespace-normalized recognized text.
    pub text: String,
    /// Pattern-matched entities from the normalized text.
    pub entities: EntitySet,
    /// "Label: value" pairs from the raw line-oriented text.
    #[serde(rename = "keyValuePairs")]
    pub key_value_pairs: BTreeMap<String, String>,
    /// Set when this page failed and the policy kept the run going.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageResult {
    fn failed(page: u32, error: &Error) -> Self {
        Self {
            page,
            text: String::new(),
            entities: EntitySet::default(),
            key_value_pairs: BTreeMap::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Ordered per-page results for one document run, one entry per page,
/// ascending by page index. Serializes as a plain list of page objects.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DocumentResult {
    pub pages: Vec<PageResult>,
}

/// Per-document processing pipeline, generic over its four capabilities so
/// each external collaborator can be substituted with a test double.
pub struct Pipeline<C, R, P, O> {
    counter: C,
    rasterizer: R,
    preprocessor: P,
    ocr: O,
    config: PipelineConfig,
}

impl Pipeline<PdfInfo, PdfToCairo, ScanFilter, TesseractCli> {
    /// Pipeline wired to the external `pdfinfo`, `pdftocairo` and
    /// `tesseract` utilities.
    pub fn with_default_tools(config: PipelineConfig) -> Self {
        Self::new(PdfInfo, PdfToCairo, ScanFilter, TesseractCli, config)
    }
}

impl<C, R, P, O> Pipeline<C, R, P, O>
where
    C: PageCounter,
    R: PageRasterizer,
    P: Preprocessor,
    O: OcrEngine,
{
    pub fn new(counter: C, rasterizer: R, preprocessor: P, ocr: O, config: PipelineConfig) -> Self {
        Self {
            counter,
            rasterizer,
            preprocessor,
            ocr,
            config,
        }
    }

    /// Process every page of `document` in ascending index order and
    /// aggregate the per-page extractions.
    ///
    /// Pages run strictly sequentially; each page's steps complete before
    /// the next page starts, so result ordering is guaranteed by sequencing
    /// rather than by a post-hoc sort. Under the default fail-fast policy
    /// the first failing page aborts the run with that page's index
    /// attached and no partial result is returned.
    pub async fn run(&self, document: &Path) -> Result<DocumentResult> {
        let page_count = self.counter.count_pages(document).await?;
        tracing::info!(
            document = %document.display(),
            pages = page_count,
            "starting document run"
        );

        let mut pages = Vec::with_capacity(page_count as usize);

        for page in 1..=page_count {
            match self.process_page(document, page).await {
                Ok(result) => pages.push(result),
                Err(e) => {
                    let e = e.on_page(page);
                    match self.config.page_error_policy {
                        PageErrorPolicy::FailFast => {
                            tracing::error!(page, error = %e, "aborting document run");
                            return Err(e);
                        }
                        PageErrorPolicy::SkipFailedPages => {
                            tracing::warn!(page, error = %e, "recording page failure and continuing");
                            pages.push(PageResult::failed(page, &e));
                        }
                    }
                }
            }
        }

        tracing::info!(pages = pages.len(), "document run complete");
        Ok(DocumentResult { pages })
    }

    async fn process_page(&self, document: &Path, page: u32) -> Result<PageResult> {
        tracing::debug!(page, "rasterizing page");
        let raster = self.rasterizer.rasterize_page(document, page).await?;

        let filtered = self.preprocessor.preprocess(&raster)?;

        tracing::debug!(page, "recognizing page");
        let recognized = self.recognize_bounded(&filtered).await?;

        // Key-value extraction reads the raw text: it needs the line
        // boundaries that normalization collapses.
        let text = normalize_text(&recognized);
        let entities = extract_entities(&text);
        let key_value_pairs = extract_key_values(&recognized);

        Ok(PageResult {
            page,
            text,
            entities,
            key_value_pairs,
            error: None,
        })
    }

    /// Run recognition, bounded by the configured timeout. The timeout
    /// lives here rather than in any one engine so every `OcrEngine`
    /// implementation is covered by it.
    async fn recognize_bounded(&self, image: &[u8]) -> Result<String> {
        let recognize = self.ocr.recognize(image, &self.config.languages);
        match self.config.ocr_timeout {
            Some(limit) => tokio::time::timeout(limit, recognize)
                .await
                .map_err(|_| Error::RecognitionFailed {
                    reason: format!("recognition exceeded {limit:?} timeout"),
                })?,
            None => recognize.await,
        }
    }
}
