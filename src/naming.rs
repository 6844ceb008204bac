//! Default output-path policy.
//!
//! When the caller does not supply an output path, one is synthesised from
//! the input's name plus a local-time stamp at second resolution:
//!
//! ```text
//! photo.jpg            →  photo_20260827_143052.pdf
//! scans/  (folder)     →  scans/../combined_scans_20260827_143052.pdf
//! ```
//!
//! Two conversions of the same input within the same second produce the same
//! name; the later write silently overwrites the earlier one. This is
//! accepted behaviour, not deduplicated.

use chrono::Local;
use std::path::{Path, PathBuf};

/// Prefix used by folder mode for its synthesised output name.
pub const COMBINED_PREFIX: &str = "combined_";

/// Synthesise a timestamped `.pdf` path next to `base`.
///
/// The name is `{prefix}{stem}_{YYYYMMDD_HHMMSS}.pdf` where `stem` is
/// `base`'s file name with any extension stripped. For directory inputs the
/// trailing directory name (trailing separators stripped) is the stem. The
/// result is joined with `base`'s parent directory; a bare file name
/// resolves into the current directory.
pub fn timestamped_output_path(base: &Path, prefix: &str) -> PathBuf {
    output_path_with_stamp(base, prefix, &Local::now().format("%Y%m%d_%H%M%S").to_string())
}

fn output_path_with_stamp(base: &Path, prefix: &str, stamp: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let name = format!("{prefix}{stem}_{stamp}.pdf");

    match base.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension_and_appends_stamp() {
        let p = output_path_with_stamp(Path::new("/data/photo.jpg"), "", "20260827_143052");
        assert_eq!(p, PathBuf::from("/data/photo_20260827_143052.pdf"));
    }

    #[test]
    fn folder_base_uses_trailing_directory_name() {
        // Trailing separators are normalised away by Path itself.
        let p = output_path_with_stamp(Path::new("/data/scans/"), COMBINED_PREFIX, "20260827_143052");
        assert_eq!(p, PathBuf::from("/data/combined_scans_20260827_143052.pdf"));
    }

    #[test]
    fn bare_file_name_resolves_into_current_dir() {
        let p = output_path_with_stamp(Path::new("photo.png"), "", "20260827_143052");
        assert_eq!(p, PathBuf::from("photo_20260827_143052.pdf"));
    }

    #[test]
    fn live_stamp_has_expected_shape() {
        let p = timestamped_output_path(Path::new("/tmp/img.png"), "");
        let name = p.file_name().unwrap().to_string_lossy().into_owned();

        // img_YYYYMMDD_HHMMSS.pdf
        assert!(name.starts_with("img_"), "got: {name}");
        assert!(name.ends_with(".pdf"), "got: {name}");
        let stamp = &name["img_".len()..name.len() - ".pdf".len()];
        assert_eq!(stamp.len(), 15, "got stamp: {stamp}");
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(stamp[..8].bytes().all(|b| b.is_ascii_digit()));
        assert!(stamp[9..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn extensionless_input_keeps_full_name() {
        let p = output_path_with_stamp(Path::new("/data/scan"), "", "20260827_143052");
        assert_eq!(p, PathBuf::from("/data/scan_20260827_143052.pdf"));
    }
}
