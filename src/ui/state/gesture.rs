// SPDX-License-Identifier: MPL-2.0
//! Gesture interpretation for the lightbox.
//!
//! A drag means two different things depending on the zoom level: at or
//! below native scale it is a swipe that navigates between items, above
//! native scale it pans the image. [`GestureMode`] makes that duality a
//! tagged union derived from the zoom factor, so the pan offset does not
//! even exist while swiping and vice versa.

use super::pan::PanState;
use super::zoom::Zoom;
use crate::config::{MIN_PINCH_DISTANCE, SWIPE_VELOCITY_THRESHOLD, SWIPE_VELOCITY_WINDOW};
use iced::{Point, Vector};
use std::time::Instant;

/// Direction of a navigation step through the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the previous item (wraps to the last).
    Previous,
    /// Toward the next item (wraps to the first).
    Next,
}

impl Direction {
    /// Signed index offset of one step.
    #[must_use]
    pub fn offset(self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Horizontal swipe tracking while at or below native zoom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeState {
    start: Option<(Point, Instant)>,
    /// Current horizontal displacement, for rendering the in-flight drag.
    pub offset_x: f32,
}

/// Displacement and velocity of a released swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeRelease {
    pub offset_x: f32,
    pub velocity_x: f32,
}

impl SwipeState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Starts tracking a swipe at the given pointer position.
    pub fn grab(&mut self, position: Point, now: Instant) {
        self.start = Some((position, now));
        self.offset_x = 0.0;
    }

    /// Updates the tracked displacement.
    pub fn drag_to(&mut self, position: Point) {
        if let Some((start, _)) = self.start {
            self.offset_x = position.x - start.x;
        }
    }

    /// Ends the swipe, yielding displacement and velocity. Returns `None`
    /// when no swipe was in progress.
    pub fn release(&mut self, position: Point, now: Instant) -> Option<SwipeRelease> {
        let (start, started_at) = self.start.take()?;
        let offset_x = position.x - start.x;
        self.offset_x = 0.0;

        let elapsed = now.duration_since(started_at).as_secs_f32();
        let velocity_x = if elapsed >= SWIPE_VELOCITY_WINDOW {
            offset_x / elapsed
        } else {
            0.0
        };

        Some(SwipeRelease {
            offset_x,
            velocity_x,
        })
    }

    /// Discards the swipe without producing a release (e.g. when a second
    /// finger lands and the gesture becomes a pinch).
    pub fn cancel(&mut self) {
        self.start = None;
        self.offset_x = 0.0;
    }
}

/// Decides whether a released swipe commits a navigation.
///
/// A rightward gesture reveals the previous item, a leftward one the next.
/// The gesture commits when either the displacement exceeds
/// `distance_threshold` or the release velocity exceeds the fling cutoff in
/// the same direction; anything else springs back.
#[must_use]
pub fn swipe_decision(release: SwipeRelease, distance_threshold: f32) -> Option<Direction> {
    let SwipeRelease {
        offset_x,
        velocity_x,
    } = release;

    if offset_x > distance_threshold || (offset_x > 0.0 && velocity_x > SWIPE_VELOCITY_THRESHOLD) {
        Some(Direction::Previous)
    } else if offset_x < -distance_threshold
        || (offset_x < 0.0 && velocity_x < -SWIPE_VELOCITY_THRESHOLD)
    {
        Some(Direction::Next)
    } else {
        None
    }
}

/// Two-finger pinch tracking.
///
/// Each step scales the zoom by the ratio of the current finger distance to
/// the previous one, so the gesture composes multiplicatively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinchState {
    previous_distance: Option<f32>,
}

impl PinchState {
    /// Feeds the current finger distance; returns the scale factor to apply,
    /// if any.
    pub fn step(&mut self, distance: f32) -> Option<f32> {
        let previous = self.previous_distance.replace(distance);
        match previous {
            Some(prev) if prev >= MIN_PINCH_DISTANCE && distance >= MIN_PINCH_DISTANCE => {
                Some(distance / prev)
            }
            _ => None,
        }
    }

    /// Forgets the tracked distance (a finger lifted).
    pub fn reset(&mut self) {
        self.previous_distance = None;
    }
}

/// Euclidean distance between two touch points.
#[must_use]
pub fn finger_distance(a: Point, b: Point) -> f32 {
    a.distance(b)
}

/// Drag interpretation, derived purely from the zoom factor.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureMode {
    /// At or below native zoom: drags navigate.
    Swipe(SwipeState),
    /// Above native zoom: drags pan.
    Pan(PanState),
}

impl GestureMode {
    /// The mode matching a zoom factor, with idle gesture state.
    #[must_use]
    pub fn for_zoom(zoom: Zoom) -> Self {
        if zoom.is_native_or_below() {
            GestureMode::Swipe(SwipeState::default())
        } else {
            GestureMode::Pan(PanState::default())
        }
    }

    /// Whether this mode is the right one for `zoom`.
    #[must_use]
    pub fn matches_zoom(&self, zoom: Zoom) -> bool {
        match self {
            GestureMode::Swipe(_) => zoom.is_native_or_below(),
            GestureMode::Pan(_) => !zoom.is_native_or_below(),
        }
    }

    /// The current pan translation; zero while swiping.
    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        match self {
            GestureMode::Swipe(_) => Vector::new(0.0, 0.0),
            GestureMode::Pan(pan) => pan.offset,
        }
    }

    /// Whether a drag is in progress in either interpretation.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        match self {
            GestureMode::Swipe(swipe) => swipe.is_dragging(),
            GestureMode::Pan(pan) => pan.is_dragging(),
        }
    }
}

impl Default for GestureMode {
    fn default() -> Self {
        Self::for_zoom(Zoom::default())
    }
}
