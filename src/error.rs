//! Error types for the docfields pipeline

use thiserror::Error;

/// Result type alias for the docfields pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the docfields pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// The page-count report lacked a usable `Pages:` marker
    #[error("page count unavailable: {reason}")]
    PageCountUnavailable { reason: String },

    /// The external rasterizer failed or its output could not be read back
    #[error("rasterization failed: {reason}")]
    RasterizationFailed { reason: String },

    /// Raster bytes could not be decoded as an image
    #[error("image decode failed: {0}")]
    ImageDecodeFailed(#[from] image::ImageError),

    /// The OCR engine failed
    #[error("recognition failed: {reason}")]
    RecognitionFailed { reason: String },

    /// A page-level step failed; carries the 1-based index of the failing page
    #[error("page {page}: {source}")]
    PageFailed {
        page: u32,
        #[source]
        source: Box<Error>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach a 1-based page index to an error raised inside a page step.
    /// Already-attributed errors keep their original page.
    pub(crate) fn on_page(self, page: u32) -> Error {
        match self {
            Error::PageFailed { .. } => self,
            other => Error::PageFailed {
                page,
                source: Box::new(other),
            },
        }
    }

    /// The 1-based index of the failing page, if this error is page-scoped.
    pub fn page(&self) -> Option<u32> {
        match self {
            Error::PageFailed { page, .. } => Some(*page),
            _ => None,
        }
    }
}
