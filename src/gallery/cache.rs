//! Gallery cache implementation.
//!
//! [`GalleryCache`] scans one directory of images (non-recursive), pairs every
//! original with a deterministically named thumbnail in the thumbnail
//! directory, and recreates a thumbnail only when it is missing or older than
//! its source. Thumbnail "generation" is a byte-for-byte copy of the source,
//! not a resize.
//!
//! The refresh is synchronous and single-threaded: a sequence of blocking
//! listing, stat and copy calls, with exclusive access to both directories
//! assumed for its duration. Any filesystem error aborts the refresh and
//! propagates to the caller with no partial item list.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use super::naming;
use super::GalleryItem;
use crate::error::{CacheError, CacheResult};

/// Name of the default thumbnail subdirectory inside the image directory.
const DEFAULT_THUMBNAIL_DIR: &str = "thumbnails";

/// Thumbnail cache over a flat directory of images.
///
/// Holds the directory paths and the item list from the most recent
/// [`refresh`](Self::refresh).
///
/// # Example
///
/// ```no_run
/// use thumbcache::gallery::GalleryCache;
/// use std::path::Path;
///
/// let mut cache = GalleryCache::new(Path::new("/home/user/Pictures"))?;
/// let items = cache.refresh()?;
/// println!("{} images in the gallery", items.len());
/// # Ok::<(), thumbcache::error::CacheError>(())
/// ```
#[derive(Debug)]
pub struct GalleryCache {
    /// Directory holding the original images
    image_dir: PathBuf,
    /// Directory holding the cached thumbnails
    thumbnail_dir: PathBuf,
    /// Items from the most recent refresh
    items: Vec<GalleryItem>,
}

impl GalleryCache {
    /// Create a cache with the default thumbnail directory,
    /// `<image_dir>/thumbnails`.
    ///
    /// The thumbnail directory is created on disk (with missing parents) if
    /// absent. Creation is idempotent; constructing two caches against the
    /// same directory succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::CreateDir`] when the directory cannot be created,
    /// e.g. due to permissions or a non-directory file at that path.
    pub fn new(image_dir: &Path) -> CacheResult<Self> {
        let thumbnail_dir = image_dir.join(DEFAULT_THUMBNAIL_DIR);
        Self::with_thumbnail_dir(image_dir, &thumbnail_dir)
    }

    /// Create a cache storing thumbnails in an explicit directory.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::CreateDir`] when the directory cannot be created.
    pub fn with_thumbnail_dir(image_dir: &Path, thumbnail_dir: &Path) -> CacheResult<Self> {
        fs::create_dir_all(thumbnail_dir).map_err(|e| CacheError::CreateDir {
            path: thumbnail_dir.to_path_buf(),
            source: e,
        })?;
        log::debug!(
            "Gallery cache ready: images in {}, thumbnails in {}",
            image_dir.display(),
            thumbnail_dir.display()
        );

        Ok(Self {
            image_dir: image_dir.to_path_buf(),
            thumbnail_dir: thumbnail_dir.to_path_buf(),
            items: Vec::new(),
        })
    }

    /// Directory holding the original images.
    #[must_use]
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Directory holding the cached thumbnails.
    #[must_use]
    pub fn thumbnail_dir(&self) -> &Path {
        &self.thumbnail_dir
    }

    /// Items from the most recent refresh, without rescanning.
    ///
    /// Empty until [`refresh`](Self::refresh) has been called.
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Rescan the image directory, bring thumbnails up to date and return the
    /// resulting gallery items.
    ///
    /// Sources are ordered by filename for reproducible output. A missing
    /// image directory yields an empty list, not an error. The returned
    /// vector is a copy; mutating it does not affect the cache.
    ///
    /// # Errors
    ///
    /// Any listing, stat or copy failure aborts the refresh with no complete
    /// item list; the previously cached items are cleared up front, so a
    /// failed refresh never leaves the prior listing visible through
    /// [`items`](Self::items).
    pub fn refresh(&mut self) -> CacheResult<Vec<GalleryItem>> {
        self.items.clear();

        for source in self.scan_sources()? {
            let Some(file_name) = naming::thumbnail_file_name(&source) else {
                log::debug!("Skipping source without a file stem: {}", source.display());
                continue;
            };
            let thumbnail = self.thumbnail_dir.join(file_name);
            self.ensure_thumbnail(&source, &thumbnail)?;
            self.items.push(GalleryItem::new(source, thumbnail));
        }

        log::info!(
            "Gallery refresh complete: {} items in {}",
            self.items.len(),
            self.image_dir.display()
        );
        Ok(self.items.clone())
    }

    /// List source images directly inside the image directory, sorted by
    /// filename.
    ///
    /// Skips directories, files without a recognized image extension, and
    /// files already following the thumbnail naming convention.
    fn scan_sources(&self) -> CacheResult<Vec<PathBuf>> {
        if !self.image_dir.exists() {
            log::debug!(
                "Image directory {} does not exist; gallery is empty",
                self.image_dir.display()
            );
            return Ok(Vec::new());
        }

        let mut sources = Vec::new();
        for entry in WalkDir::new(&self.image_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| self.map_walk_error(e))?;
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            let path = entry.into_path();
            if !naming::has_image_extension(&path) {
                log::trace!("Skipping non-image file: {}", path.display());
                continue;
            }
            if naming::looks_like_thumbnail(&path) {
                log::trace!("Skipping existing thumbnail: {}", path.display());
                continue;
            }

            sources.push(path);
        }

        Ok(sources)
    }

    /// Create or update the thumbnail when required.
    ///
    /// The thumbnail is rewritten when it is missing or its modification time
    /// is strictly earlier than the source's; an up-to-date thumbnail is left
    /// untouched so its mtime does not change.
    fn ensure_thumbnail(&self, source: &Path, thumbnail: &Path) -> CacheResult<()> {
        if thumbnail.exists() {
            let thumbnail_mtime = modified_time(thumbnail)?;
            let source_mtime = modified_time(source)?;
            if thumbnail_mtime >= source_mtime {
                log::trace!("Thumbnail up to date: {}", thumbnail.display());
                return Ok(());
            }
            log::debug!(
                "Regenerating stale thumbnail {} from {}",
                thumbnail.display(),
                source.display()
            );
        } else {
            log::debug!(
                "Creating thumbnail {} from {}",
                thumbnail.display(),
                source.display()
            );
        }

        fs::copy(source, thumbnail).map_err(|e| CacheError::CopyThumbnail {
            from: source.to_path_buf(),
            to: thumbnail.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Convert a walkdir error into a listing error for the refresh.
    fn map_walk_error(&self, error: walkdir::Error) -> CacheError {
        let path = error
            .path()
            .map_or_else(|| self.image_dir.clone(), Path::to_path_buf);
        let source = error
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("directory walk error"));
        CacheError::ReadDir { path, source }
    }
}

/// Read a file's last modification time.
fn modified_time(path: &Path) -> CacheResult<SystemTime> {
    let metadata = fs::metadata(path).map_err(|e| CacheError::Metadata {
        path: path.to_path_buf(),
        source: e,
    })?;
    metadata.modified().map_err(|e| CacheError::Metadata {
        path: path.to_path_buf(),
        source: e,
    })
}
