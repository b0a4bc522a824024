//! Error taxonomy for the thumbnail cache.
//!
//! Every failure carries the path it happened on and the underlying
//! [`std::io::Error`]. The cache performs no retries and never suppresses a
//! problem file: a stat or copy failure aborts the whole refresh and surfaces
//! here unchanged, leaving the caller (typically a presentation layer) to
//! decide what to show the user.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur while constructing or refreshing a gallery cache.
#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    /// The thumbnail directory could not be created at construction time.
    ///
    /// Raised when creation is blocked by permissions or by an existing
    /// non-directory file at the target path. Fatal to that cache instance.
    #[error("Failed to create thumbnail directory {path}: {source}")]
    CreateDir {
        /// The thumbnail directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The image directory exists but could not be listed.
    #[error("Failed to list image directory {path}: {source}")]
    ReadDir {
        /// The image directory being scanned
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file's metadata could not be read during a refresh.
    #[error("Failed to stat {path}: {source}")]
    Metadata {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be copied to its thumbnail path.
    #[error("Failed to copy {from} to thumbnail {to}: {source}")]
    CopyThumbnail {
        /// The source image being copied
        from: PathBuf,
        /// The thumbnail path being written
        to: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
