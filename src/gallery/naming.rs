//! Image-extension filtering and the thumbnail naming convention.
//!
//! A thumbnail for `photo.png` is named `photo_thumb.png`. Any file whose
//! stem (case-insensitive) ends with `_thumb` or `_thumbnail` is treated as a
//! thumbnail and never as a source image, so a scan over a directory that
//! already contains thumbnails does not pick them up as new originals.

use std::ffi::OsString;
use std::path::Path;

/// File extensions (lowercase) recognized as gallery images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Suffix appended to a source's stem to form its thumbnail name.
pub const THUMBNAIL_SUFFIX: &str = "_thumb";

/// Check whether a path carries a recognized image extension.
///
/// Matching is case-insensitive; `PHOTO.PNG` qualifies. Files without an
/// extension never do.
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Check whether a filename follows the thumbnail naming convention.
#[must_use]
pub fn looks_like_thumbnail(path: &Path) -> bool {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    stem.ends_with(THUMBNAIL_SUFFIX) || stem.ends_with("_thumbnail")
}

/// Compute the thumbnail filename for a source image:
/// `{stem}_thumb{original-extension}`.
///
/// The extension is carried over verbatim, preserving its case. Returns
/// `None` for paths without a file stem (e.g. a bare `..`).
#[must_use]
pub fn thumbnail_file_name(source: &Path) -> Option<OsString> {
    let mut name = source.file_stem()?.to_os_string();
    name.push(THUMBNAIL_SUFFIX);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(name)
}
