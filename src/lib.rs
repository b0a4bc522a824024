//! ThumbCache - Deduplicated Thumbnail Cache
//!
//! A library for maintaining a thumbnail cache over a flat directory of images:
//! one cached thumbnail per original, regenerated only when the source file is
//! newer than its cached copy, with existing thumbnails never mistaken for new
//! source images.

pub mod error;
pub mod gallery;
pub mod logging;
