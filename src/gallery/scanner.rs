// SPDX-License-Identifier: MPL-2.0
//! Directory scanner: builds a gallery item list from the image files of a
//! single directory, sorted alphabetically.

use super::GalleryItem;
use crate::error::Result;
use std::path::Path;

/// File extensions recognized as images (case-insensitive).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// Derives a display title from a file name: stem with separators spaced out.
fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.replace(['-', '_'], " ")
}

/// Scans `directory` for supported images, sorted by file name.
pub fn scan_directory(directory: &Path) -> Result<Vec<GalleryItem>> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    paths.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    Ok(paths
        .into_iter()
        .map(|path| {
            let title = title_from_path(&path);
            GalleryItem {
                source: path,
                title,
                caption: None,
            }
        })
        .collect())
}
