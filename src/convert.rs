//! Conversion entry points.
//!
//! Two operation modes share one pipeline shape:
//!
//! * [`convert_image`] — `decode → normalise → encode one page → write`.
//! * [`convert_folder`] — `enumerate + filter + sort → decode each →
//!   normalise each → encode multi-page → write`.
//!
//! Both are all-or-nothing: the PDF is assembled in memory and written to a
//! temporary file in the destination directory, renamed into place only on
//! full success. A failed conversion never leaves a truncated or partial
//! file behind.

use crate::config::ConversionConfig;
use crate::error::Img2PdfError;
use crate::naming::{self, COMBINED_PREFIX};
use crate::output::{ConversionOutput, ConversionStats, PageInfo};
use crate::pipeline::{decode, encode, input};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// What to convert, and where to put it.
///
/// Immutable once constructed; built by the CLI from its flags or by library
/// callers directly.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source: Source,
    /// Explicit output path. `None` triggers the timestamped naming policy.
    pub output: Option<PathBuf>,
}

/// The two mutually exclusive input kinds.
#[derive(Debug, Clone)]
pub enum Source {
    /// Convert a single image file into a one-page PDF.
    Image(PathBuf),
    /// Combine every matching image in a directory into one multi-page PDF.
    Folder(PathBuf),
}

/// Dispatch a [`ConversionRequest`] to the matching pipeline.
pub fn convert(
    request: &ConversionRequest,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Img2PdfError> {
    match &request.source {
        Source::Image(path) => convert_image(path, request.output.as_deref(), config),
        Source::Folder(dir) => convert_folder(dir, request.output.as_deref(), config),
    }
}

/// Convert a single image file into a one-page PDF.
///
/// When `output` is `None` the result lands next to the input as
/// `{stem}_{YYYYMMDD_HHMMSS}.pdf`.
///
/// # Errors
/// * [`Img2PdfError::InputNotFound`] / [`Img2PdfError::PermissionDenied`] —
///   pre-flight, before any decode is attempted
/// * [`Img2PdfError::DecodeFailed`] — the file is not a decodable image
/// * [`Img2PdfError::OutputWriteFailed`] — the PDF could not be persisted
pub fn convert_image(
    image_path: &Path,
    output: Option<&Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Img2PdfError> {
    let total_start = Instant::now();
    info!("Converting image: {}", image_path.display());

    // ── Step 1: Pre-flight ───────────────────────────────────────────────
    input::resolve_image(image_path)?;

    // ── Step 2: Decode + normalise ───────────────────────────────────────
    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(1);
        cb.on_page_start(1, 1, image_path);
    }
    let decode_start = Instant::now();
    let page = match decode::decode_image(image_path) {
        Ok(p) => p,
        Err(e) => {
            if let Some(ref cb) = config.progress_callback {
                cb.on_page_error(1, 1, e.to_string());
            }
            return Err(e);
        }
    };
    let decode_duration_ms = decode_start.elapsed().as_millis() as u64;
    if let Some(ref cb) = config.progress_callback {
        cb.on_page_complete(1, 1, image_path);
    }

    let pages_info = vec![PageInfo {
        page_num: 1,
        source: image_path.to_path_buf(),
        width: page.width,
        height: page.height,
    }];

    // ── Step 3: Resolve output path ──────────────────────────────────────
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => naming::timestamped_output_path(image_path, ""),
    };

    // ── Step 4: Encode + write ───────────────────────────────────────────
    let encode_start = Instant::now();
    let title = document_title(config, image_path);
    let bytes = encode::encode_pdf(vec![page], config.dpi, &title);
    write_pdf_atomic(&bytes, &output_path)?;
    let encode_duration_ms = encode_start.elapsed().as_millis() as u64;

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(1);
    }

    info!(
        "Converted {} → {} ({} bytes)",
        image_path.display(),
        output_path.display(),
        bytes.len()
    );

    Ok(ConversionOutput {
        output_path,
        pages: pages_info,
        stats: ConversionStats {
            page_count: 1,
            output_bytes: bytes.len() as u64,
            decode_duration_ms,
            encode_duration_ms,
            total_duration_ms: total_start.elapsed().as_millis() as u64,
        },
    })
}

/// Combine every matching image in `folder_path` into one multi-page PDF.
///
/// Page order is the lexicographic order of file names. The first decode
/// failure aborts the whole operation — no skip-bad-file behaviour. When
/// `output` is `None` the result is named after the folder itself:
/// `combined_{folder}_{YYYYMMDD_HHMMSS}.pdf`, placed inside the folder's
/// parent directory.
///
/// # Errors
/// * [`Img2PdfError::InputNotFound`] / [`Img2PdfError::NotADirectory`] —
///   pre-flight
/// * [`Img2PdfError::NoImagesFound`] — nothing matched the extension filter
/// * [`Img2PdfError::DecodeFailed`] — some matched file is not decodable
/// * [`Img2PdfError::OutputWriteFailed`] — the PDF could not be persisted
pub fn convert_folder(
    folder_path: &Path,
    output: Option<&Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Img2PdfError> {
    let total_start = Instant::now();
    info!("Combining folder: {}", folder_path.display());

    // ── Step 1: Enumerate + filter + sort ────────────────────────────────
    let sources = input::collect_images(folder_path, &config.extensions)?;
    let total = sources.len();
    debug!("Page order fixed: {} images", total);

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(total);
    }

    // ── Step 2: Decode + normalise each, in order ────────────────────────
    // All decoded pages are held in memory until the single encode step;
    // each source file's handle is closed before the next one is opened.
    let decode_start = Instant::now();
    let mut pages = Vec::with_capacity(total);
    let mut pages_info = Vec::with_capacity(total);
    for (idx, source) in sources.iter().enumerate() {
        let page_num = idx + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_start(page_num, total, source);
        }
        let page = match decode::decode_image(source) {
            Ok(p) => p,
            Err(e) => {
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_error(page_num, total, e.to_string());
                }
                return Err(e);
            }
        };
        if let Some(ref cb) = config.progress_callback {
            cb.on_page_complete(page_num, total, source);
        }
        pages_info.push(PageInfo {
            page_num,
            source: source.clone(),
            width: page.width,
            height: page.height,
        });
        pages.push(page);
    }
    let decode_duration_ms = decode_start.elapsed().as_millis() as u64;

    // ── Step 3: Resolve output path ──────────────────────────────────────
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => naming::timestamped_output_path(folder_path, COMBINED_PREFIX),
    };

    // ── Step 4: Encode + write ───────────────────────────────────────────
    let encode_start = Instant::now();
    let title = document_title(config, folder_path);
    let bytes = encode::encode_pdf(pages, config.dpi, &title);
    write_pdf_atomic(&bytes, &output_path)?;
    let encode_duration_ms = encode_start.elapsed().as_millis() as u64;

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(total);
    }

    info!(
        "Combined {} images from {} → {} ({} bytes)",
        total,
        folder_path.display(),
        output_path.display(),
        bytes.len()
    );

    Ok(ConversionOutput {
        output_path,
        pages: pages_info,
        stats: ConversionStats {
            page_count: total,
            output_bytes: bytes.len() as u64,
            decode_duration_ms,
            encode_duration_ms,
            total_duration_ms: total_start.elapsed().as_millis() as u64,
        },
    })
}

/// Title for the PDF /Info dictionary: the configured one, else the input's
/// own name.
fn document_title(config: &ConversionConfig, base: &Path) -> String {
    config.title.clone().unwrap_or_else(|| {
        base.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "img2pdf".to_string())
    })
}

/// Write `bytes` to `path` atomically: temp file in the destination
/// directory, then rename. A pre-existing file at `path` is replaced only
/// when the full document has been flushed; on any error the temp file is
/// removed on drop and `path` is left untouched.
fn write_pdf_atomic(bytes: &[u8], path: &Path) -> Result<(), Img2PdfError> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };

    let map_io = |e: std::io::Error| Img2PdfError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(map_io)?;
    tmp.write_all(bytes).map_err(map_io)?;
    tmp.flush().map_err(map_io)?;
    tmp.persist(path).map_err(|e| Img2PdfError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("doc.pdf");
        write_pdf_atomic(b"%PDF-1.7 test", &out).unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"%PDF-1.7 test");
    }

    #[test]
    fn atomic_write_replaces_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("doc.pdf");
        std::fs::write(&out, b"old").unwrap();
        write_pdf_atomic(b"new content", &out).unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"new content");
    }

    #[test]
    fn atomic_write_into_missing_dir_fails_cleanly() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("no/such/dir/doc.pdf");
        let err = write_pdf_atomic(b"data", &out).unwrap_err();
        assert!(matches!(err, Img2PdfError::OutputWriteFailed { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn document_title_prefers_config() {
        let config = ConversionConfig::builder().title("Holiday scans").build().unwrap();
        assert_eq!(document_title(&config, Path::new("x.png")), "Holiday scans");

        let config = ConversionConfig::default();
        assert_eq!(document_title(&config, Path::new("/a/b/photo.jpg")), "photo");
    }
}
