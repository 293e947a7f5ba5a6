// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and step sizes
//! - **Gesture**: Swipe and pinch recognition thresholds
//! - **Layout**: Compact-window breakpoint and thumbnail sizing
//! - **Cache**: Decoded image cache capacity

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor at which the image is shown at its fitted ("native") size.
pub const NATIVE_ZOOM: f32 = 1.0;

/// Default zoom factor when an item is opened.
pub const DEFAULT_ZOOM: f32 = NATIVE_ZOOM;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom step for zoom in/out operations.
pub const DEFAULT_ZOOM_STEP: f32 = 0.5;

/// Minimum allowed zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.1;

/// Maximum allowed zoom step.
pub const MAX_ZOOM_STEP: f32 = 2.0;

/// Zoom change applied per wheel scroll line, added to the current factor.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal displacement (logical px) a released swipe must exceed to
/// commit a navigation.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Swipe displacement threshold used on compact (narrow) windows.
pub const COMPACT_SWIPE_THRESHOLD: f32 = 30.0;

/// Minimum allowed swipe threshold override.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum allowed swipe threshold override.
pub const MAX_SWIPE_THRESHOLD: f32 = 200.0;

/// Horizontal release velocity (logical px/s) that commits a navigation
/// regardless of displacement.
pub const SWIPE_VELOCITY_THRESHOLD: f32 = 500.0;

/// Gestures shorter than this (seconds) report zero velocity; release
/// decisions then rest on displacement alone. Keeps a spurious
/// press-release pair from registering as an instantaneous fling.
pub const SWIPE_VELOCITY_WINDOW: f32 = 0.02;

/// Finger distances below this (logical px) are ignored when computing a
/// pinch scale factor, to avoid division blow-ups when fingers converge.
pub const MIN_PINCH_DISTANCE: f32 = 10.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Windows narrower than this (logical px) use the compact presentation:
/// shorter swipe threshold and a collapsible thumbnail strip.
pub const COMPACT_WIDTH_THRESHOLD: f32 = 700.0;

/// Number of columns in the thumbnail grid.
pub const GRID_COLUMNS: usize = 3;

/// Edge length (logical px) of a thumbnail strip cell.
pub const STRIP_THUMBNAIL_SIZE: f32 = 72.0;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Maximum number of decoded images retained in memory.
pub const IMAGE_CACHE_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < DEFAULT_ZOOM);
    assert!(MAX_ZOOM > DEFAULT_ZOOM);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    // Gesture validation
    assert!(COMPACT_SWIPE_THRESHOLD < DEFAULT_SWIPE_THRESHOLD);
    assert!(MIN_SWIPE_THRESHOLD <= COMPACT_SWIPE_THRESHOLD);
    assert!(MAX_SWIPE_THRESHOLD >= DEFAULT_SWIPE_THRESHOLD);
    assert!(SWIPE_VELOCITY_THRESHOLD > 0.0);
    assert!(SWIPE_VELOCITY_WINDOW > 0.0);
    assert!(MIN_PINCH_DISTANCE > 0.0);

    // Layout and cache validation
    assert!(COMPACT_WIDTH_THRESHOLD > 0.0);
    assert!(GRID_COLUMNS > 0);
    assert!(IMAGE_CACHE_CAPACITY > 0);
};
