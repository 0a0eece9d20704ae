//! Page counting and rasterization
//!
//! This module wraps the external Poppler utilities (`pdfinfo`, `pdftocairo`)
//! as black-box converters: document path in, page count or raster bytes out.

mod count;
mod render;

pub use count::{parse_page_count, PageCounter, PdfInfo};
pub use render::{PageRasterizer, PdfToCairo};
