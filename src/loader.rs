// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image decoding and the in-memory store of decoded handles.
//!
//! Decoding happens on the blocking thread pool so the UI thread never
//! stalls on large files. Results come back through the application message
//! loop and land in an LRU-bounded [`ImageStore`].

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// A decoded image ready for rendering.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Decodes the image at `path` into an Iced handle.
pub async fn load(path: PathBuf) -> Result<LoadedImage> {
    tokio::task::spawn_blocking(move || -> Result<LoadedImage> {
        let image = image_rs::open(&path)?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(LoadedImage {
            handle: Handle::from_rgba(width, height, rgba.into_raw()),
            width,
            height,
        })
    })
    .await
    .map_err(|e| Error::Decode(format!("decode task failed: {e}")))?
}

/// LRU-bounded store of decoded images, keyed by source path.
///
/// Paths that failed to decode are remembered separately so the UI can show
/// an error surface instead of a perpetual loading state.
#[derive(Debug)]
pub struct ImageStore {
    cache: LruCache<PathBuf, LoadedImage>,
    failed: HashSet<PathBuf>,
}

impl ImageStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least one");
        Self {
            cache: LruCache::new(capacity),
            failed: HashSet::new(),
        }
    }

    pub fn insert(&mut self, path: PathBuf, image: LoadedImage) {
        self.failed.remove(&path);
        self.cache.put(path, image);
    }

    pub fn mark_failed(&mut self, path: PathBuf) {
        self.failed.insert(path);
    }

    /// Reads without updating recency, so views can borrow immutably.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&LoadedImage> {
        self.cache.peek(path)
    }

    /// Marks `path` as recently used.
    pub fn touch(&mut self, path: &Path) {
        self.cache.promote(path);
    }

    #[must_use]
    pub fn has_failed(&self, path: &Path) -> bool {
        self.failed.contains(path)
    }

    /// Whether `path` still needs a decode attempt.
    #[must_use]
    pub fn is_missing(&self, path: &Path) -> bool {
        !self.has_failed(path) && self.cache.peek(path).is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new(crate::config::IMAGE_CACHE_CAPACITY)
    }
}
