// SPDX-License-Identifier: MPL-2.0
//! Gallery model: named collections of immutable, ordered image items.
//!
//! A gallery is loaded once per session, either from a TOML manifest
//! describing collections or by scanning a directory of images. Item lists
//! never change afterwards, so an index into a collection stays valid for
//! the whole session.

pub mod manifest;
pub mod scanner;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// One image entry of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Filesystem path of the image resource.
    pub source: PathBuf,
    /// Display title shown on grid cells and in the lightbox.
    pub title: String,
    /// Optional caption (category, dimensions, short description).
    pub caption: Option<String>,
}

/// A named, ordered set of gallery items.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub name: String,
    pub subtitle: Option<String>,
    items: Vec<GalleryItem>,
}

impl Collection {
    pub fn new(name: String, subtitle: Option<String>, items: Vec<GalleryItem>) -> Self {
        Self {
            name,
            subtitle,
            items,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All collections of one viewing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    collections: Vec<Collection>,
}

impl Gallery {
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }

    /// Loads a gallery from `source`: a `.toml` manifest or a directory of
    /// images.
    pub fn load(source: &Path) -> Result<Self> {
        if source.is_dir() {
            let items = scanner::scan_directory(source)?;
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Portfolio".to_string());
            return Ok(Self::new(vec![Collection::new(name, None, items)]));
        }

        match source.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => manifest::load(source),
            _ => Err(Error::Manifest(format!(
                "unsupported gallery source: {}",
                source.display()
            ))),
        }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, index: usize) -> Option<&Collection> {
        self.collections.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.collections.iter().all(Collection::is_empty)
    }

    /// Iterates over every item of every collection.
    pub fn iter_items(&self) -> impl Iterator<Item = &GalleryItem> {
        self.collections.iter().flat_map(|c| c.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> GalleryItem {
        GalleryItem {
            source: PathBuf::from(format!("/gallery/{name}.jpg")),
            title: name.to_string(),
            caption: None,
        }
    }

    #[test]
    fn collection_exposes_fixed_item_order() {
        let collection = Collection::new(
            "Design Inspiration".to_string(),
            None,
            vec![item("bedroom"), item("kitchen"), item("bath")],
        );

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.item(1).map(|i| i.title.as_str()), Some("kitchen"));
        assert_eq!(collection.item(3), None);
    }

    #[test]
    fn empty_gallery_reports_empty() {
        let gallery = Gallery::new(vec![Collection::new("Empty".to_string(), None, vec![])]);
        assert!(gallery.is_empty());
    }

    #[test]
    fn iter_items_walks_all_collections() {
        let gallery = Gallery::new(vec![
            Collection::new("A".to_string(), None, vec![item("one")]),
            Collection::new("B".to_string(), None, vec![item("two"), item("three")]),
        ]);
        assert_eq!(gallery.iter_items().count(), 3);
    }

    #[test]
    fn load_rejects_unknown_source_kind() {
        let err = Gallery::load(Path::new("/no/such/gallery.json")).unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }
}
