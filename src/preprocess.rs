//! Raster preprocessing applied before recognition

use crate::error::Result;
use image::ImageFormat;
use std::io::Cursor;

/// Filters a rasterized page before it is handed to the OCR engine.
pub trait Preprocessor: Send + Sync {
    /// Apply the filter chain to encoded `raster` bytes and return the
    /// filtered image, re-encoded as PNG.
    fn preprocess(&self, raster: &[u8]) -> Result<Vec<u8>>;
}

/// Grayscale-then-sharpen filter chain for scanned pages.
pub struct ScanFilter;

impl Preprocessor for ScanFilter {
    fn preprocess(&self, raster: &[u8]) -> Result<Vec<u8>> {
        let image = image::load_from_memory(raster)?;
        let filtered = image.grayscale().unsharpen(1.0, 1);

        let mut buf = Cursor::new(Vec::new());
        filtered.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}
