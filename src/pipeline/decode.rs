//! Image decoding and colour normalisation.
//!
//! Every source image is decoded fully into memory and normalised to 8-bit
//! RGB with no alpha channel before encoding. The PDF encoder requires
//! homogeneous input, so grayscale is expanded, palettes are resolved, and
//! alpha is dropped — all by the `image` crate's own conversion rules. The
//! file handle is released as soon as the pixels are captured, before the
//! next file is touched.

use crate::error::Img2PdfError;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

/// A decoded page image, normalised to truecolor-no-alpha.
///
/// `pixels` holds `width * height * 3` bytes of interleaved RGB8 data.
#[derive(Clone, Debug)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode the image at `path` and normalise it to RGB8.
///
/// Any codec failure (unreadable, truncated, unsupported format) maps to
/// [`Img2PdfError::DecodeFailed`] carrying the offending path.
pub fn decode_image(path: &Path) -> Result<PageImage, Img2PdfError> {
    let dynamic = image::open(path).map_err(|e| Img2PdfError::DecodeFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let page = normalize(dynamic);
    debug!(
        "Decoded {} → {}×{} RGB8",
        path.display(),
        page.width,
        page.height
    );
    Ok(page)
}

/// Collapse any colour mode to truecolor without alpha.
fn normalize(img: DynamicImage) -> PageImage {
    let width = img.width();
    let height = img.height();
    // into_rgb8 handles grayscale, palette-backed, 16-bit, and alpha-bearing
    // inputs; alpha is discarded, not composited.
    let rgb = img.into_rgb8();
    PageImage {
        width,
        height,
        pixels: rgb.into_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn rgba_input_loses_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 128])));
        let page = normalize(img);
        assert_eq!((page.width, page.height), (4, 3));
        assert_eq!(page.pixels.len(), 4 * 3 * 3);
        assert_eq!(&page.pixels[..3], &[10, 20, 30]);
    }

    #[test]
    fn grayscale_input_expands_to_rgb() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([200])));
        let page = normalize(img);
        assert_eq!(page.pixels.len(), 2 * 2 * 3);
        assert_eq!(&page.pixels[..3], &[200, 200, 200]);
    }

    #[test]
    fn decode_roundtrip_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("white.png");
        RgbaImage::from_pixel(8, 5, Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();

        let page = decode_image(&path).unwrap();
        assert_eq!((page.width, page.height), (8, 5));
        assert_eq!(page.pixels.len(), 8 * 5 * 3);
        assert!(page.pixels.iter().all(|&b| b == 255));
    }

    #[test]
    fn garbage_bytes_fail_with_decode_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"this is not a png").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, Img2PdfError::DecodeFailed { .. }));
        assert!(err.to_string().contains("broken.png"));
    }
}
