// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and CLI flags.

use crate::error::Error;
use crate::loader::LoadedImage;
use crate::ui::{grid, lightbox};
use iced::Size;
use std::path::PathBuf;

/// Start-up options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override (BCP 47 tag).
    pub lang: Option<String>,
    /// Gallery source: a `.toml` manifest or a directory of images.
    pub source: Option<PathBuf>,
}

/// Root message type bridging the grid, the lightbox, and async loads.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Lightbox(lightbox::component::Message),
    ImageLoaded {
        path: PathBuf,
        result: Result<LoadedImage, Error>,
    },
    WindowResized(Size),
}
