// SPDX-License-Identifier: MPL-2.0
//! User preferences, persisted as `settings.toml` in the platform config
//! directory.
//!
//! Persisted values are clamped into their documented bounds on read, so a
//! hand-edited file cannot request nonsensical zoom steps or gesture
//! thresholds. A missing or unparsable file falls back to defaults instead
//! of failing startup.

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preferred UI language (BCP 47 tag, e.g. "en-US").
    pub language: Option<String>,
    /// Zoom increment for the zoom in/out controls.
    pub zoom_step: Option<f32>,
    /// Swipe displacement threshold override (logical px).
    pub swipe_threshold: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
        }
    }
}

impl Config {
    /// Reads the settings file from the platform config directory, falling
    /// back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        match settings_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads settings from an explicit path. Unparsable content yields
    /// defaults rather than an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw).unwrap_or_default())
    }

    /// Writes the settings to the platform config directory.
    pub fn save(&self) -> Result<()> {
        match settings_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Writes the settings to an explicit path, creating parent directories
    /// as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Effective zoom step, clamped into the supported range.
    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        self.zoom_step
            .unwrap_or(DEFAULT_ZOOM_STEP)
            .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
    }

    /// Effective swipe threshold, clamped into the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
            .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
    }
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("Veranda").join("settings.toml"))
}
