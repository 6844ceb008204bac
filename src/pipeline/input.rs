//! Input resolution: pre-flight path checks and folder enumeration.
//!
//! Existence and readability are checked before any decode is attempted, so
//! a missing path surfaces as [`Img2PdfError::InputNotFound`] rather than a
//! codec error. Folder enumeration is non-recursive, filters by extension
//! (case-insensitive), and sorts by file name in byte order so page order is
//! deterministic across platforms and runs.

use crate::error::Img2PdfError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate that `path` exists and is readable, for single-image mode.
///
/// No extension filter is applied here — single-image mode attempts to
/// decode whatever path it is given.
pub fn resolve_image(path: &Path) -> Result<(), Img2PdfError> {
    if !path.exists() {
        return Err(Img2PdfError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    // Probe read permission by opening; decode will re-open.
    match std::fs::File::open(path) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Img2PdfError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Img2PdfError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Resolved input image: {}", path.display());
    Ok(())
}

/// Enumerate the images directly inside `dir` that match `extensions`,
/// sorted lexicographically by file name.
///
/// `extensions` are lowercase, dot-less (e.g. `"png"`). Sub-directories and
/// non-matching files are ignored. An empty result is
/// [`Img2PdfError::NoImagesFound`] — the caller never sees a zero-page
/// document.
pub fn collect_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, Img2PdfError> {
    if !dir.exists() {
        return Err(Img2PdfError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(Img2PdfError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            Img2PdfError::PermissionDenied {
                path: dir.to_path_buf(),
            }
        } else {
            Img2PdfError::ReadDirFailed {
                dir: dir.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Img2PdfError::ReadDirFailed {
            dir: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && has_accepted_extension(&path, extensions) {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(Img2PdfError::NoImagesFound {
            dir: dir.to_path_buf(),
            extensions: extensions.join(", "),
        });
    }

    // Byte-order sort on the file name fixes page order deterministically.
    matches.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("Found {} matching images in {}", matches.len(), dir.display());
    Ok(matches)
}

/// Case-insensitive extension match against the accepted list.
fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            extensions.iter().any(|accepted| *accepted == lower)
        })
        .unwrap_or(false)
}
