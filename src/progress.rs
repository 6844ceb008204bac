//! Progress-callback trait for per-page conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the pipeline decodes each image. One source image becomes one
//! PDF page, so page numbers and image numbers coincide.
//!
//! The callback approach is the least-invasive integration point: callers can
//! forward events to a terminal progress bar, a log, or a GUI without the
//! library knowing anything about how the host application communicates.

use std::path::Path;
use std::sync::Arc;

/// Called by the conversion pipeline as it processes each image.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. The pipeline is strictly sequential, but the trait
/// is `Send + Sync` so one callback can be shared across invocations.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after enumeration, before any image is decoded.
    ///
    /// # Arguments
    /// * `total_pages` — number of images that will be decoded
    fn on_conversion_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called just before an image is decoded.
    ///
    /// # Arguments
    /// * `page_num` — 1-indexed page number
    /// * `total_pages` — total pages in the output document
    /// * `source` — path of the image being decoded
    fn on_page_start(&self, page_num: usize, total_pages: usize, source: &Path) {
        let _ = (page_num, total_pages, source);
    }

    /// Called when an image has been decoded and normalised.
    fn on_page_complete(&self, page_num: usize, total_pages: usize, source: &Path) {
        let _ = (page_num, total_pages, source);
    }

    /// Called when decoding an image fails. The conversion aborts right
    /// after this event fires.
    fn on_page_error(&self, page_num: usize, total_pages: usize, error: String) {
        let _ = (page_num, total_pages, error);
    }

    /// Called once after the PDF has been written.
    ///
    /// # Arguments
    /// * `total_pages` — pages in the written document
    fn on_conversion_complete(&self, total_pages: usize) {
        let _ = total_pages;
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;
