// SPDX-License-Identifier: MPL-2.0
//! TOML gallery manifest.
//!
//! A manifest lists collections and their items:
//!
//! ```toml
//! [[collection]]
//! name = "Design Inspiration"
//! subtitle = "A curated collection of interior design ideas"
//!
//! [[collection.item]]
//! path = "interiors/royal-bedroom.jpg"
//! title = "Royal Bedroom Suite"
//! caption = "Bedroom Design"
//! ```
//!
//! Item paths are resolved relative to the manifest file's directory.

use super::{Collection, Gallery, GalleryItem};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ManifestDoc {
    #[serde(default, rename = "collection")]
    collections: Vec<ManifestCollection>,
}

#[derive(Debug, Deserialize)]
struct ManifestCollection {
    name: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default, rename = "item")]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    path: String,
    title: String,
    #[serde(default)]
    caption: Option<String>,
}

/// Loads and validates a gallery manifest.
pub fn load(path: &Path) -> Result<Gallery> {
    let content = fs::read_to_string(path)?;
    let doc: ManifestDoc =
        toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))?;

    if doc.collections.is_empty() {
        return Err(Error::Manifest(format!(
            "{} declares no collections",
            path.display()
        )));
    }

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let mut collections = Vec::with_capacity(doc.collections.len());

    for collection in doc.collections {
        if collection.items.is_empty() {
            tracing::warn!(
                collection = %collection.name,
                "skipping collection with no items"
            );
            continue;
        }

        let items = collection
            .items
            .into_iter()
            .map(|item| GalleryItem {
                source: base.join(item.path),
                title: item.title,
                caption: item.caption,
            })
            .collect();

        collections.push(Collection::new(collection.name, collection.subtitle, items));
    }

    if collections.is_empty() {
        return Err(Error::Manifest(format!(
            "{} declares no non-empty collections",
            path.display()
        )));
    }

    Ok(Gallery::new(collections))
}
