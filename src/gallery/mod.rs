//! Gallery scanning and thumbnail caching.
//!
//! This module provides functionality for:
//! - Flat (non-recursive) discovery of image files in a gallery directory
//! - Classifying entries as originals or already-cached thumbnails
//! - Regenerating thumbnails only when the source file changed
//!
//! # Architecture
//!
//! The module is divided into submodules:
//! - [`naming`]: Image-extension filtering and the thumbnail naming convention
//! - [`cache`]: The [`GalleryCache`] scan/refresh logic
//!
//! # Cache Invalidation
//!
//! There is no manifest or database; the thumbnail files' own modification
//! times double as the staleness index. A thumbnail is regenerated when it is
//! missing or when its mtime is strictly earlier than its source's. Thumbnails
//! whose source disappears are never pruned.
//!
//! # Example
//!
//! ```no_run
//! use thumbcache::gallery::GalleryCache;
//! use std::path::Path;
//!
//! let mut cache = GalleryCache::new(Path::new("/home/user/Pictures"))?;
//! for item in cache.refresh()? {
//!     println!("{} -> {}", item.source.display(), item.thumbnail.display());
//! }
//! # Ok::<(), thumbcache::error::CacheError>(())
//! ```

pub mod cache;
pub mod naming;

use std::path::PathBuf;

use serde::Serialize;

pub use cache::GalleryCache;

/// A single original image paired with its cached thumbnail.
///
/// Plain value type; items are created fresh on every
/// [`refresh`](GalleryCache::refresh) and replaced wholesale on the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    /// Path to the original image file
    pub source: PathBuf,
    /// Path to the cached thumbnail for that image
    pub thumbnail: PathBuf,
}

impl GalleryItem {
    /// Create a new gallery item.
    #[must_use]
    pub fn new(source: PathBuf, thumbnail: PathBuf) -> Self {
        Self { source, thumbnail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_item_new() {
        let item = GalleryItem::new(
            PathBuf::from("/gallery/cat.png"),
            PathBuf::from("/gallery/thumbnails/cat_thumb.png"),
        );

        assert_eq!(item.source, PathBuf::from("/gallery/cat.png"));
        assert_eq!(
            item.thumbnail,
            PathBuf::from("/gallery/thumbnails/cat_thumb.png")
        );
    }

    #[test]
    fn test_gallery_item_serializes_both_paths() {
        let item = GalleryItem::new(
            PathBuf::from("/gallery/cat.png"),
            PathBuf::from("/gallery/thumbnails/cat_thumb.png"),
        );

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"source\""));
        assert!(json.contains("\"thumbnail\""));
        assert!(json.contains("cat_thumb.png"));
    }
}
