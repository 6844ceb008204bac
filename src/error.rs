//! Error types for the img2pdf library.
//!
//! One enum covers every failure the pipeline can hit. All conversions are
//! all-or-nothing: an `Err` means no output file was written (or, for an
//! explicit pre-existing output path, the file was left untouched). There is
//! no partial-success state and no retry — every failure is terminal for the
//! invocation that hit it.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the img2pdf library.
#[derive(Debug, Error)]
pub enum Img2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file or folder was not found at the given path.
    #[error("input not found: '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// Process does not have read permission on the input.
    #[error("permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// Folder mode was given a path that is not a directory.
    #[error("'{path}' is not a directory\nUse -i/--image for single files.")]
    NotADirectory { path: PathBuf },

    /// Directory listing failed mid-enumeration.
    #[error("failed to read directory '{dir}': {source}")]
    ReadDirFailed {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Decode errors ─────────────────────────────────────────────────────
    /// The file exists but could not be decoded as an image.
    ///
    /// In folder mode a single decode failure aborts the whole combine;
    /// there is deliberately no skip-bad-file behaviour.
    #[error("failed to decode image '{path}': {source}")]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Folder mode found no file with an accepted extension.
    #[error("no valid images found in '{dir}' (accepted extensions: {extensions})")]
    NoImagesFound { dir: PathBuf, extensions: String },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create, write, or rename the output PDF.
    #[error("failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
