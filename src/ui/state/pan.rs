// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! Handles grab-and-drag panning of an image shown above native scale. The
//! offset is deliberately unclamped: the image may be dragged arbitrarily
//! far, and the containing pane keeps it centered at its fitted size, so an
//! out-of-view image is recovered with a reset or by zooming out.

use iced::{Point, Vector};

/// Grab-and-drag pan state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanState {
    /// Current translation of the image, in logical px.
    pub offset: Vector,
    /// Pointer position minus `offset` at grab time; `Some` while dragging.
    anchor: Option<Point>,
}

impl PanState {
    /// Whether a drag is currently adjusting the offset.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Starts a drag at the given pointer position.
    pub fn grab(&mut self, position: Point) {
        self.anchor = Some(position - self.offset);
    }

    /// Moves the drag; the offset follows the pointer relative to the anchor.
    pub fn drag_to(&mut self, position: Point) {
        if let Some(anchor) = self.anchor {
            self.offset = position - anchor;
        }
    }

    /// Ends the drag. The offset keeps its last value; no snapping, no
    /// inertia.
    pub fn release(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_pan_is_centered_and_idle() {
        let pan = PanState::default();
        assert!(!pan.is_dragging());
        assert_abs_diff_eq!(pan.offset.x, 0.0);
        assert_abs_diff_eq!(pan.offset.y, 0.0);
    }

    #[test]
    fn drag_moves_offset_by_pointer_delta() {
        let mut pan = PanState::default();
        pan.grab(Point::new(200.0, 150.0));
        pan.drag_to(Point::new(230.0, 130.0));

        assert_abs_diff_eq!(pan.offset.x, 30.0);
        assert_abs_diff_eq!(pan.offset.y, -20.0);
    }

    #[test]
    fn second_drag_continues_from_previous_offset() {
        let mut pan = PanState::default();
        pan.grab(Point::new(0.0, 0.0));
        pan.drag_to(Point::new(10.0, 5.0));
        pan.release();

        pan.grab(Point::new(100.0, 100.0));
        pan.drag_to(Point::new(110.0, 100.0));

        assert_abs_diff_eq!(pan.offset.x, 20.0);
        assert_abs_diff_eq!(pan.offset.y, 5.0);
    }

    #[test]
    fn moves_without_grab_are_ignored() {
        let mut pan = PanState::default();
        pan.drag_to(Point::new(50.0, 50.0));
        assert_abs_diff_eq!(pan.offset.x, 0.0);
    }

    #[test]
    fn offset_is_unbounded() {
        let mut pan = PanState::default();
        pan.grab(Point::new(0.0, 0.0));
        pan.drag_to(Point::new(-20_000.0, 40_000.0));

        assert_abs_diff_eq!(pan.offset.x, -20_000.0);
        assert_abs_diff_eq!(pan.offset.y, 40_000.0);
    }

    #[test]
    fn release_keeps_last_offset() {
        let mut pan = PanState::default();
        pan.grab(Point::new(0.0, 0.0));
        pan.drag_to(Point::new(12.0, 8.0));
        pan.release();

        assert!(!pan.is_dragging());
        assert_abs_diff_eq!(pan.offset.x, 12.0);
        assert_abs_diff_eq!(pan.offset.y, 8.0);
    }
}
