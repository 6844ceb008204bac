//! # img2pdf
//!
//! Convert raster images to PDF — a single file to a one-page document, or a
//! whole folder to one multi-page document with deterministic page order.
//!
//! ## Pipeline Overview
//!
//! ```text
//! image file(s)
//!  │
//!  ├─ 1. Input    validate path; folders: enumerate + filter + sort
//!  ├─ 2. Decode   raster file → RGB8 pixels (alpha dropped, palettes resolved)
//!  ├─ 3. Encode   all pages → one PDF, page size = pixel size at the set dpi
//!  └─ 4. Write    temp file + rename; never leaves a partial PDF
//! ```
//!
//! Everything is synchronous and sequential: one image is decoded at a time,
//! all pages are held in memory until the single encode step, and a failure
//! anywhere aborts the whole conversion with a typed error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use img2pdf::{convert_image, convert_folder, ConversionConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!
//!     // One image → photo_YYYYMMDD_HHMMSS.pdf next to the input.
//!     let out = convert_image(Path::new("photo.jpg"), None, &config)?;
//!     println!("wrote {}", out.output_path.display());
//!
//!     // A folder → combined_scans_YYYYMMDD_HHMMSS.pdf, pages sorted by name.
//!     let out = convert_folder(Path::new("scans/"), None, &config)?;
//!     println!("{} pages", out.page_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `img2pdf` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! img2pdf = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_EXTENSIONS};
pub use convert::{convert, convert_folder, convert_image, ConversionRequest, Source};
pub use error::Img2PdfError;
pub use output::{ConversionOutput, ConversionStats, PageInfo};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
