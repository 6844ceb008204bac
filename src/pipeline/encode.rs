//! PDF encoding: normalised page images → PDF bytes.
//!
//! printpdf 0.8 uses a data-oriented API: the document is built from
//! `PdfPage` structs holding `Vec<Op>` operation lists and serialised in one
//! `save()` call. Each page is sized so the image appears at exactly the
//! configured dpi — a 800×600 px image at 100 dpi becomes an 8×6 inch page
//! with the image placed full-bleed at the origin. Pixels are embedded
//! as-is, never resampled.

use crate::pipeline::decode::PageImage;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::debug;

const MM_PER_INCH: f32 = 25.4;

/// Serialise `pages` into a complete PDF document.
///
/// Page order is the order of `pages`. `dpi` is the resolution metadata:
/// it fixes the physical page size relative to the pixel dimensions.
pub fn encode_pdf(pages: Vec<PageImage>, dpi: u32, title: &str) -> Vec<u8> {
    let mut doc = PdfDocument::new(title);
    let mut pdf_pages: Vec<PdfPage> = Vec::with_capacity(pages.len());

    for page in pages {
        let (w_mm, h_mm) = page_size_mm(page.width, page.height, dpi);

        let raw = RawImage {
            pixels: RawImageData::U8(page.pixels),
            width: page.width as usize,
            height: page.height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: Some(1.0),
                scale_y: Some(1.0),
                dpi: Some(dpi as f32),
                rotate: None,
            },
        }];

        pdf_pages.push(PdfPage::new(Mm(w_mm), Mm(h_mm), ops));
    }

    let page_count = pdf_pages.len();
    doc.with_pages(pdf_pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    debug!(
        "Encoded {} page(s) at {} dpi → {} bytes",
        page_count,
        dpi,
        bytes.len()
    );
    bytes
}

/// Physical page size for an image of `width`×`height` px at `dpi`.
fn page_size_mm(width: u32, height: u32, dpi: u32) -> (f32, f32) {
    (
        width as f32 / dpi as f32 * MM_PER_INCH,
        height as f32 / dpi as f32 * MM_PER_INCH,
    )
}
