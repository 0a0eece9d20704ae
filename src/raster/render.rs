//! Single-page rasterization via the external `pdftocairo` utility

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use uuid::Uuid;

/// Renders one document page to encoded image bytes.
#[async_trait]
pub trait PageRasterizer: Send + Sync {
    /// Rasterize the 1-based `page` of `document` into PNG bytes.
    async fn rasterize_page(&self, document: &Path, page: u32) -> Result<Vec<u8>>;
}

/// Rasterizer backed by Poppler's `pdftocairo`, constrained to render
/// exactly one page into a transient PNG that is removed once read back.
pub struct PdfToCairo;

/// Transient output target for one rasterization call. The file is removed
/// on drop, so every exit path (success, failure, cancellation) releases it.
/// Removal failures are logged, never propagated.
struct TransientPng {
    path: PathBuf,
}

impl TransientPng {
    /// Allocate a collision-free path in the OS temp directory. The UUID
    /// keeps rapid sequential or concurrent calls from aliasing; a
    /// wall-clock timestamp cannot guarantee that.
    fn new(page: u32) -> Self {
        let name = format!("docfields-p{page}-{}.png", Uuid::new_v4());
        Self {
            path: std::env::temp_dir().join(name),
        }
    }

    /// Output target without the `.png` extension; `pdftocairo -singlefile`
    /// appends the extension itself.
    fn stem(&self) -> PathBuf {
        self.path.with_extension("")
    }
}

impl Drop for TransientPng {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to remove transient raster file"
                );
            }
        }
    }
}

#[async_trait]
impl PageRasterizer for PdfToCairo {
    async fn rasterize_page(&self, document: &Path, page: u32) -> Result<Vec<u8>> {
        let transient = TransientPng::new(page);

        let output = Command::new("pdftocairo")
            .arg("-png")
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string())
            .arg("-singlefile")
            .arg(document)
            .arg(transient.stem())
            .output()
            .await
            .map_err(|e| Error::RasterizationFailed {
                reason: format!("failed to run pdftocairo: {e}"),
            })?;

        if !output.status.success() {
            return Err(Error::RasterizationFailed {
                reason: format!(
                    "pdftocairo exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        tokio::fs::read(&transient.path)
            .await
            .map_err(|e| Error::RasterizationFailed {
                reason: format!("could not read raster output: {e}"),
            })
    }
}
