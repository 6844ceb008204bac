//! Configuration for image-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share a config across calls and to see at a glance why two
//! runs produced different output.

use crate::error::Img2PdfError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Extensions accepted by folder mode, matched case-insensitively against
/// file names. Single-image mode imposes no filter — it attempts to decode
/// whatever path it is given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "gif"];

/// Configuration for a conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use img2pdf::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .dpi(100)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Resolution metadata written into the PDF, in pixels per inch.
    /// Default: 100.
    ///
    /// Pages are sized so that each image appears at exactly this density:
    /// a 800×600 px image at 100 dpi becomes an 8×6 inch page. The pixels
    /// themselves are never resampled.
    pub dpi: u32,

    /// File extensions accepted by folder mode (lowercase, no dot).
    /// Default: [`DEFAULT_EXTENSIONS`].
    pub extensions: Vec<String>,

    /// Title written into the PDF /Info dictionary. If `None`, the input's
    /// file stem (or folder name) is used.
    pub title: Option<String>,

    /// Optional per-page progress callback. Default: none.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dpi: 100,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            title: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("dpi", &self.dpi)
            .field("extensions", &self.extensions)
            .field("title", &self.title)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// The accepted extensions as a comma-separated list, for messages.
    pub fn extensions_display(&self) -> String {
        self.extensions.join(", ")
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(12, 1200);
        self
    }

    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = exts
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Img2PdfError> {
        let c = &self.config;
        if c.dpi == 0 {
            return Err(Img2PdfError::InvalidConfig("dpi must be ≥ 1".into()));
        }
        if c.extensions.is_empty() {
            return Err(Img2PdfError::InvalidConfig(
                "at least one accepted extension is required".into(),
            ));
        }
        if c.extensions.iter().any(|e| e.is_empty()) {
            return Err(Img2PdfError::InvalidConfig(
                "accepted extensions must be non-empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_contract() {
        let c = ConversionConfig::default();
        assert_eq!(c.dpi, 100);
        assert_eq!(
            c.extensions,
            vec!["png", "jpg", "jpeg", "bmp", "tiff", "gif"]
        );
        assert!(c.title.is_none());
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn builder_clamps_dpi() {
        let c = ConversionConfig::builder().dpi(1).build().unwrap();
        assert_eq!(c.dpi, 12);
        let c = ConversionConfig::builder().dpi(100_000).build().unwrap();
        assert_eq!(c.dpi, 1200);
    }

    #[test]
    fn extensions_are_normalised() {
        let c = ConversionConfig::builder()
            .extensions([".PNG", "Jpg"])
            .build()
            .unwrap();
        assert_eq!(c.extensions, vec!["png", "jpg"]);
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let err = ConversionConfig::builder()
            .extensions(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, Img2PdfError::InvalidConfig(_)));
    }

    #[test]
    fn debug_impl_does_not_require_callback_debug() {
        use crate::progress::NoopProgressCallback;
        use std::sync::Arc;

        let c = ConversionConfig::builder()
            .progress_callback(Arc::new(NoopProgressCallback))
            .build()
            .unwrap();
        let dbg = format!("{c:?}");
        assert!(dbg.contains("dyn callback"), "got: {dbg}");
    }
}
