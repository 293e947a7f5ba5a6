// SPDX-License-Identifier: MPL-2.0
//! Interaction state for the lightbox, separated from widget code so the
//! gesture math is unit-testable without a renderer.

pub mod gesture;
pub mod pan;
pub mod zoom;

// Re-export commonly used types for convenience
pub use gesture::{Direction, GestureMode, PinchState, SwipeState};
pub use pan::PanState;
pub use zoom::Zoom;
