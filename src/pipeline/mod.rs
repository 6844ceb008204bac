//! The conversion pipeline, leaves first:
//!
//! ```text
//! input    validate paths, enumerate + filter + sort folders
//! decode   raster file → RGB8 PageImage (alpha dropped, palettes resolved)
//! encode   PageImage[] → PDF bytes via printpdf
//! ```
//!
//! [`crate::convert`] sequences these stages and owns the atomic write.

pub mod decode;
pub mod encode;
pub mod input;
