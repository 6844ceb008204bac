//! Result types returned by the conversion entry points.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The result of a successful conversion.
///
/// Returned only when the PDF was fully written; any failure surfaces as
/// [`crate::error::Img2PdfError`] instead, with no output file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The output path actually written — either the caller's explicit path
    /// or the synthesised timestamped one.
    pub output_path: PathBuf,

    /// One entry per page, in page order.
    pub pages: Vec<PageInfo>,

    /// Timing and size counters.
    pub stats: ConversionStats,
}

impl ConversionOutput {
    /// Number of pages in the written document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Per-page provenance: which source image became this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-indexed page number.
    pub page_num: usize,
    /// Source image path.
    pub source: PathBuf,
    /// Pixel width of the decoded image.
    pub width: u32,
    /// Pixel height of the decoded image.
    pub height: u32,
}

/// Counters for one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Pages in the output document.
    pub page_count: usize,
    /// Bytes of the written PDF.
    pub output_bytes: u64,
    /// Wall-clock time spent decoding and normalising images.
    pub decode_duration_ms: u64,
    /// Wall-clock time spent encoding and writing the PDF.
    pub encode_duration_ms: u64,
    /// Total wall-clock time for the conversion.
    pub total_duration_ms: u64,
}
