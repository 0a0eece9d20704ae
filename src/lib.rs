//! docfields library
//!
//! This crate turns a multi-page PDF into structured, machine-readable fields:
//! - rasterize each page via the external `pdftocairo` utility
//! - preprocess the raster (grayscale + sharpen) for better recognition
//! - run OCR through the external `tesseract` binary with a fixed bilingual hint
//! - extract generic entities (emails, dates, URLs, monetary amounts) and
//!   labeled "Label: value" pairs from the recognized text
//!
//! Each external collaborator sits behind a trait so it can be substituted
//! with a test double; the pipeline itself only sequences and aggregates.

pub mod error;
pub mod ocr;
pub mod pipeline;
pub mod preprocess;
pub mod raster;
pub mod text;

pub use error::{Error, Result};
pub use pipeline::{DocumentResult, PageErrorPolicy, PageResult, Pipeline, PipelineConfig};
