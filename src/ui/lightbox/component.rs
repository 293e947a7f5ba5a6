// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating viewer state and update logic.
//!
//! The component owns the "which item is open" index, the zoom factor, and
//! the gesture mode. Everything mutates synchronously on the event that
//! triggers it; the only effect handed back to the application is a request
//! to make sure the shown item's image is decoded.

use crate::config::COMPACT_SWIPE_THRESHOLD;
use crate::ui::scroll_lock::{ScrollLock, ScrollLockState};
use crate::ui::state::zoom::WHEEL_ZOOM_STEP;
use crate::ui::state::{gesture, Direction, GestureMode, PinchState, Zoom};
use iced::keyboard::{self, key};
use iced::{event, mouse, touch, Point, Vector};
use std::collections::HashMap;
use std::time::Instant;

/// Messages handled by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the viewer at a thumbnail's index.
    Open(usize),
    /// Close the viewer.
    Close,
    /// Step to the previous or next item.
    Navigate(Direction),
    /// Jump to an index from the thumbnail strip.
    JumpTo(usize),
    ZoomIn,
    ZoomOut,
    ResetView,
    /// Show or hide the thumbnail strip (compact layout).
    ToggleStrip,
    /// A raw window event routed here by the application subscription.
    RawEvent(event::Event),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The viewer now shows this item; ensure its image is decoded.
    ItemShown(usize),
}

/// State that only exists while the viewer is open.
///
/// Owning the scroll-lock guard here ties the lock's lifetime to the open
/// state: dropping this struct releases it, whatever the path out.
#[derive(Debug)]
struct OpenState {
    index: usize,
    zoom: Zoom,
    mode: GestureMode,
    pinch: PinchState,
    fingers: HashMap<touch::Finger, Point>,
    strip_visible: bool,
    mouse_pressed: bool,
    _scroll_lock: ScrollLock,
}

impl OpenState {
    /// Switches to another item: default zoom, idle gesture state.
    fn show(&mut self, index: usize) {
        self.index = index;
        self.zoom = Zoom::default();
        self.mode = GestureMode::for_zoom(self.zoom);
        self.pinch.reset();
    }

    fn two_finger_distance(&self) -> Option<f32> {
        if self.fingers.len() != 2 {
            return None;
        }
        let mut points = self.fingers.values();
        let a = *points.next()?;
        let b = *points.next()?;
        Some(gesture::finger_distance(a, b))
    }
}

/// Complete lightbox component state.
#[derive(Debug)]
pub struct State {
    item_count: usize,
    zoom_step: f32,
    swipe_threshold: f32,
    compact: bool,
    cursor: Option<Point>,
    locks: ScrollLockState,
    open: Option<OpenState>,
}

impl State {
    #[must_use]
    pub fn new(locks: ScrollLockState, zoom_step: f32, swipe_threshold: f32) -> Self {
        Self {
            item_count: 0,
            zoom_step,
            swipe_threshold,
            compact: false,
            cursor: None,
            locks,
            open: None,
        }
    }

    /// Sets the length of the active item list. Changing it closes the
    /// viewer so an index can never refer across lists.
    pub fn set_item_count(&mut self, count: usize) {
        if count != self.item_count {
            self.item_count = count;
            self.close();
        }
    }

    /// Switches between compact and regular presentation.
    pub fn set_compact(&mut self, compact: bool) {
        if self.compact != compact {
            self.compact = compact;
            if let Some(open) = self.open.as_mut() {
                open.strip_visible = !compact;
            }
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(index) | Message::JumpTo(index) => self.open(index),
            Message::Close => {
                self.close();
                Effect::None
            }
            Message::Navigate(direction) => self.navigate(direction),
            Message::ZoomIn => {
                self.zoom_in();
                Effect::None
            }
            Message::ZoomOut => {
                self.zoom_out();
                Effect::None
            }
            Message::ResetView => {
                self.reset_view();
                Effect::None
            }
            Message::ToggleStrip => {
                if let Some(open) = self.open.as_mut() {
                    open.strip_visible = !open.strip_visible;
                }
                Effect::None
            }
            Message::RawEvent(event) => self.handle_event(event),
        }
    }

    // ----------------------------------------------------------------------
    // Core operations
    // ----------------------------------------------------------------------

    fn open(&mut self, index: usize) -> Effect {
        if index >= self.item_count {
            return Effect::None;
        }

        match self.open.as_mut() {
            Some(open) => open.show(index),
            None => {
                self.open = Some(OpenState {
                    index,
                    zoom: Zoom::default(),
                    mode: GestureMode::default(),
                    pinch: PinchState::default(),
                    fingers: HashMap::new(),
                    strip_visible: !self.compact,
                    mouse_pressed: false,
                    _scroll_lock: self.locks.acquire(),
                });
            }
        }
        Effect::ItemShown(index)
    }

    /// Closes the viewer; the scroll-lock guard is released by the drop.
    pub fn close(&mut self) {
        self.open = None;
    }

    fn navigate(&mut self, direction: Direction) -> Effect {
        let count = self.item_count as i64;
        let Some(open) = self.open.as_mut() else {
            return Effect::None;
        };
        // rem_euclid keeps negative intermediates in range.
        let next = (open.index as i64 + direction.offset()).rem_euclid(count) as usize;
        open.show(next);
        Effect::ItemShown(next)
    }

    /// Clamped absolute zoom assignment.
    pub fn set_zoom(&mut self, value: f32) {
        self.apply_zoom_if_open(|_| Zoom::new(value));
    }

    fn zoom_in(&mut self) {
        let step = self.zoom_step;
        self.apply_zoom_if_open(|zoom| zoom.stepped_in(step));
    }

    fn zoom_out(&mut self) {
        let step = self.zoom_step;
        self.apply_zoom_if_open(|zoom| zoom.stepped_out(step));
    }

    fn reset_view(&mut self) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        open.zoom = Zoom::default();
        open.mode = GestureMode::for_zoom(open.zoom);
        open.pinch.reset();
    }

    fn apply_zoom_if_open(&mut self, f: impl FnOnce(Zoom) -> Zoom) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        open.zoom = f(open.zoom);
        // Crossing the native boundary swaps the drag interpretation; the
        // pan offset of a left mode is discarded with it.
        if !open.mode.matches_zoom(open.zoom) {
            open.mode = GestureMode::for_zoom(open.zoom);
        }
    }

    // ----------------------------------------------------------------------
    // Raw event handling
    // ----------------------------------------------------------------------

    fn handle_event(&mut self, event: event::Event) -> Effect {
        if self.open.is_none() {
            return Effect::None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(&key)
            }
            event::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            event::Event::Touch(touch_event) => self.handle_touch(touch_event),
            _ => Effect::None,
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key) -> Effect {
        match key.as_ref() {
            keyboard::Key::Named(key::Named::ArrowLeft) => self.navigate(Direction::Previous),
            keyboard::Key::Named(key::Named::ArrowRight) => self.navigate(Direction::Next),
            keyboard::Key::Named(key::Named::Escape) => {
                self.close();
                Effect::None
            }
            keyboard::Key::Character("+") | keyboard::Key::Character("=") => {
                self.zoom_in();
                Effect::None
            }
            keyboard::Key::Character("-") => {
                self.zoom_out();
                Effect::None
            }
            keyboard::Key::Character("0") => {
                self.reset_view();
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_mouse(&mut self, event: mouse::Event) -> Effect {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(position);
                if self.open.as_ref().is_some_and(|open| open.mouse_pressed) {
                    self.pointer_moved(position);
                }
                Effect::None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if let Some(position) = self.cursor {
                    if let Some(open) = self.open.as_mut() {
                        open.mouse_pressed = true;
                    }
                    self.pointer_pressed(position);
                }
                Effect::None
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let position = self.cursor;
                if let Some(open) = self.open.as_mut() {
                    open.mouse_pressed = false;
                }
                match position {
                    Some(position) => self.pointer_released(position),
                    None => Effect::None,
                }
            }
            mouse::Event::WheelScrolled { delta } => {
                self.wheel_zoom(delta);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn wheel_zoom(&mut self, delta: mouse::ScrollDelta) {
        let amount = match delta {
            mouse::ScrollDelta::Lines { y, .. } => y * WHEEL_ZOOM_STEP,
            mouse::ScrollDelta::Pixels { y, .. } => y / 100.0 * WHEEL_ZOOM_STEP,
        };
        if amount != 0.0 {
            self.apply_zoom_if_open(|zoom| zoom.nudged(amount));
        }
    }

    fn handle_touch(&mut self, event: touch::Event) -> Effect {
        match event {
            touch::Event::FingerPressed { id, position } => {
                let finger_count = {
                    let Some(open) = self.open.as_mut() else {
                        return Effect::None;
                    };
                    open.fingers.insert(id, position);
                    open.fingers.len()
                };
                match finger_count {
                    1 => self.pointer_pressed(position),
                    2 => self.begin_pinch(),
                    _ => {}
                }
                Effect::None
            }
            touch::Event::FingerMoved { id, position } => {
                let finger_count = {
                    let Some(open) = self.open.as_mut() else {
                        return Effect::None;
                    };
                    if !open.fingers.contains_key(&id) {
                        return Effect::None;
                    }
                    open.fingers.insert(id, position);
                    open.fingers.len()
                };
                match finger_count {
                    1 => self.pointer_moved(position),
                    2 => self.pinch_step(),
                    _ => {}
                }
                Effect::None
            }
            touch::Event::FingerLifted { id, position }
            | touch::Event::FingerLost { id, position } => {
                let remaining = {
                    let Some(open) = self.open.as_mut() else {
                        return Effect::None;
                    };
                    open.fingers.remove(&id);
                    open.fingers.len()
                };
                if remaining == 0 {
                    self.pointer_released(position)
                } else {
                    // The pinch ended; remaining fingers start no new drag
                    // until they are lifted and pressed again.
                    if let Some(open) = self.open.as_mut() {
                        open.pinch.reset();
                    }
                    Effect::None
                }
            }
        }
    }

    // ----------------------------------------------------------------------
    // Unified pointer gestures (mouse and single-finger touch)
    // ----------------------------------------------------------------------

    fn pointer_pressed(&mut self, position: Point) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        match &mut open.mode {
            GestureMode::Swipe(swipe) => swipe.grab(position, Instant::now()),
            GestureMode::Pan(pan) => pan.grab(position),
        }
    }

    fn pointer_moved(&mut self, position: Point) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        match &mut open.mode {
            GestureMode::Swipe(swipe) => swipe.drag_to(position),
            GestureMode::Pan(pan) => pan.drag_to(position),
        }
    }

    fn pointer_released(&mut self, position: Point) -> Effect {
        let threshold = self.active_swipe_threshold();
        let direction = {
            let Some(open) = self.open.as_mut() else {
                return Effect::None;
            };
            match &mut open.mode {
                GestureMode::Swipe(swipe) => swipe
                    .release(position, Instant::now())
                    .and_then(|release| gesture::swipe_decision(release, threshold)),
                GestureMode::Pan(pan) => {
                    pan.release();
                    None
                }
            }
        };
        match direction {
            Some(direction) => self.navigate(direction),
            None => Effect::None,
        }
    }

    fn begin_pinch(&mut self) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        // A second finger turns the drag into a pinch; the in-flight drag
        // is discarded, not committed.
        match &mut open.mode {
            GestureMode::Swipe(swipe) => swipe.cancel(),
            GestureMode::Pan(pan) => pan.release(),
        }
        open.pinch.reset();
        if let Some(distance) = open.two_finger_distance() {
            open.pinch.step(distance);
        }
    }

    fn pinch_step(&mut self) {
        let scale = {
            let Some(open) = self.open.as_mut() else {
                return;
            };
            match open.two_finger_distance() {
                Some(distance) => open.pinch.step(distance),
                None => None,
            }
        };
        if let Some(scale) = scale {
            self.apply_zoom_if_open(|zoom| zoom.scaled(scale));
        }
    }

    fn active_swipe_threshold(&self) -> f32 {
        if self.compact {
            COMPACT_SWIPE_THRESHOLD
        } else {
            self.swipe_threshold
        }
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open.as_ref().map(|open| open.index)
    }

    #[must_use]
    pub fn zoom(&self) -> Option<Zoom> {
        self.open.as_ref().map(|open| open.zoom)
    }

    /// Current pan translation; zero while closed or swiping.
    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.open
            .as_ref()
            .map(|open| open.mode.pan_offset())
            .unwrap_or(Vector::new(0.0, 0.0))
    }

    /// In-flight swipe displacement, for rendering the drag.
    #[must_use]
    pub fn swipe_offset_x(&self) -> f32 {
        match self.open.as_ref().map(|open| &open.mode) {
            Some(GestureMode::Swipe(swipe)) => swipe.offset_x,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.mode.is_dragging())
    }

    #[must_use]
    pub fn strip_visible(&self) -> bool {
        self.open.as_ref().is_some_and(|open| open.strip_visible)
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SWIPE_THRESHOLD, DEFAULT_ZOOM_STEP, MAX_ZOOM, MIN_ZOOM};
    use crate::test_utils::assert_abs_diff_eq;

    fn viewer(items: usize) -> State {
        let mut state = State::new(
            ScrollLockState::new(),
            DEFAULT_ZOOM_STEP,
            DEFAULT_SWIPE_THRESHOLD,
        );
        state.set_item_count(items);
        state
    }

    fn drag(state: &mut State, from: Point, to: Point) -> Effect {
        state.pointer_pressed(from);
        state.pointer_moved(to);
        state.pointer_released(to)
    }

    #[test]
    fn open_resets_zoom_and_pan() {
        let mut state = viewer(12);
        let effect = state.handle(Message::Open(7));

        assert_eq!(effect, Effect::ItemShown(7));
        assert_eq!(state.open_index(), Some(7));
        assert_eq!(state.zoom().map(Zoom::value), Some(1.0));
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
        assert_abs_diff_eq!(state.pan_offset().y, 0.0);
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut state = viewer(3);
        assert_eq!(state.handle(Message::Open(3)), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = viewer(3);
        state.handle(Message::Open(0));
        state.handle(Message::Close);
        state.handle(Message::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let mut state = viewer(15);
        state.handle(Message::Open(0));

        assert_eq!(
            state.handle(Message::Navigate(Direction::Previous)),
            Effect::ItemShown(14)
        );
        assert_eq!(
            state.handle(Message::Navigate(Direction::Next)),
            Effect::ItemShown(0)
        );
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut state = viewer(15);
        state.handle(Message::Open(4));

        for _ in 0..15 {
            state.handle(Message::Navigate(Direction::Next));
            let index = state.open_index().expect("viewer stays open");
            assert!(index < 15);
        }
        assert_eq!(state.open_index(), Some(4));
    }

    #[test]
    fn navigate_while_closed_is_a_no_op() {
        let mut state = viewer(5);
        assert_eq!(state.handle(Message::Navigate(Direction::Next)), Effect::None);
        assert!(!state.is_open());
    }

    #[test]
    fn navigation_resets_zoom_and_pan() {
        let mut state = viewer(5);
        state.handle(Message::Open(2));
        state.set_zoom(3.0);
        drag(&mut state, Point::new(0.0, 0.0), Point::new(40.0, 25.0));
        assert_abs_diff_eq!(state.pan_offset().x, 40.0);

        state.handle(Message::Navigate(Direction::Next));
        assert_eq!(state.zoom().map(Zoom::value), Some(1.0));
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
    }

    #[test]
    fn zoom_in_steps_then_clamps() {
        let mut state = viewer(5);
        state.handle(Message::Open(3));

        for _ in 0..3 {
            state.handle(Message::ZoomIn);
        }
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), 2.5);

        for _ in 0..7 {
            state.handle(Message::ZoomIn);
        }
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), MAX_ZOOM);
    }

    #[test]
    fn set_zoom_clamps_both_ends() {
        let mut state = viewer(2);
        state.handle(Message::Open(0));

        state.set_zoom(0.05);
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), MIN_ZOOM);

        state.set_zoom(50.0);
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), MAX_ZOOM);
    }

    #[test]
    fn reset_view_is_idempotent() {
        let mut state = viewer(2);
        state.handle(Message::Open(1));
        state.set_zoom(4.0);
        drag(&mut state, Point::new(0.0, 0.0), Point::new(-30.0, 10.0));

        state.handle(Message::ResetView);
        assert_eq!(state.zoom().map(Zoom::value), Some(1.0));
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);

        state.handle(Message::ResetView);
        assert_eq!(state.zoom().map(Zoom::value), Some(1.0));
    }

    #[test]
    fn pan_requires_zoomed_in_state() {
        let mut state = viewer(5);
        state.handle(Message::Open(0));

        // At native zoom a drag is a swipe, so no pan offset appears.
        state.pointer_pressed(Point::new(100.0, 100.0));
        state.pointer_moved(Point::new(120.0, 100.0));
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
        assert_abs_diff_eq!(state.swipe_offset_x(), 20.0);
        state.pointer_released(Point::new(120.0, 100.0));
    }

    #[test]
    fn zooming_out_to_native_discards_pan() {
        let mut state = viewer(5);
        state.handle(Message::Open(0));
        state.set_zoom(2.0);
        drag(&mut state, Point::new(0.0, 0.0), Point::new(55.0, -15.0));
        assert_abs_diff_eq!(state.pan_offset().x, 55.0);

        state.set_zoom(1.0);
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
        assert_abs_diff_eq!(state.pan_offset().y, 0.0);
    }

    #[test]
    fn swipe_below_threshold_springs_back() {
        let mut state = viewer(15);
        state.handle(Message::Open(5));

        let effect = drag(&mut state, Point::new(100.0, 50.0), Point::new(140.0, 50.0));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.open_index(), Some(5));
        assert_abs_diff_eq!(state.swipe_offset_x(), 0.0);
    }

    #[test]
    fn rightward_swipe_past_threshold_goes_to_previous() {
        let mut state = viewer(15);
        state.handle(Message::Open(0));

        let effect = drag(&mut state, Point::new(100.0, 50.0), Point::new(160.0, 50.0));
        assert_eq!(effect, Effect::ItemShown(14));
    }

    #[test]
    fn leftward_swipe_past_threshold_goes_to_next() {
        let mut state = viewer(15);
        state.handle(Message::Open(14));

        let effect = drag(&mut state, Point::new(200.0, 50.0), Point::new(140.0, 50.0));
        assert_eq!(effect, Effect::ItemShown(0));
    }

    #[test]
    fn compact_windows_use_the_shorter_threshold() {
        let mut state = viewer(15);
        state.set_compact(true);
        state.handle(Message::Open(5));

        // 40 px: under the regular 50 px threshold, over the compact 30 px.
        let effect = drag(&mut state, Point::new(100.0, 50.0), Point::new(140.0, 50.0));
        assert_eq!(effect, Effect::ItemShown(4));
    }

    #[test]
    fn drags_above_native_zoom_never_navigate() {
        let mut state = viewer(15);
        state.handle(Message::Open(5));
        state.set_zoom(2.0);

        let effect = drag(&mut state, Point::new(100.0, 50.0), Point::new(400.0, 50.0));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.open_index(), Some(5));
        assert_abs_diff_eq!(state.pan_offset().x, 300.0);
    }

    #[test]
    fn pinch_scales_zoom_by_distance_ratio() {
        let mut state = viewer(5);
        state.handle(Message::Open(0));

        let touch = |e| Message::RawEvent(event::Event::Touch(e));
        state.handle(touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(0.0, 0.0),
        }));
        state.handle(touch(touch::Event::FingerPressed {
            id: touch::Finger(2),
            position: Point::new(100.0, 0.0),
        }));
        state.handle(touch(touch::Event::FingerMoved {
            id: touch::Finger(2),
            position: Point::new(150.0, 0.0),
        }));

        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), 1.5);
    }

    #[test]
    fn pinch_cancels_the_in_flight_swipe() {
        let mut state = viewer(5);
        state.handle(Message::Open(2));

        let touch = |e| Message::RawEvent(event::Event::Touch(e));
        state.handle(touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(0.0, 0.0),
        }));
        state.handle(touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(80.0, 0.0),
        }));
        // Second finger lands: the 80 px swipe must not commit on release.
        state.handle(touch(touch::Event::FingerPressed {
            id: touch::Finger(2),
            position: Point::new(200.0, 0.0),
        }));
        state.handle(touch(touch::Event::FingerLifted {
            id: touch::Finger(2),
            position: Point::new(200.0, 0.0),
        }));
        let effect = state.handle(touch(touch::Event::FingerLifted {
            id: touch::Finger(1),
            position: Point::new(80.0, 0.0),
        }));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.open_index(), Some(2));
    }

    #[test]
    fn wheel_zoom_is_additive() {
        let mut state = viewer(5);
        state.handle(Message::Open(0));

        state.handle(Message::RawEvent(event::Event::Mouse(
            mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 2.0 },
            },
        )));
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), 1.2);
    }

    #[test]
    fn keyboard_navigates_and_closes() {
        let mut state = viewer(15);
        state.handle(Message::Open(0));

        state.handle_key(&keyboard::Key::Named(key::Named::ArrowLeft));
        assert_eq!(state.open_index(), Some(14));

        state.handle_key(&keyboard::Key::Named(key::Named::ArrowRight));
        assert_eq!(state.open_index(), Some(0));

        state.handle_key(&keyboard::Key::Named(key::Named::Escape));
        assert!(!state.is_open());
    }

    #[test]
    fn keyboard_zoom_bindings() {
        let mut state = viewer(3);
        state.handle(Message::Open(0));

        state.handle_key(&keyboard::Key::Character("+".into()));
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), 1.5);

        state.handle_key(&keyboard::Key::Character("-".into()));
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), 1.0);

        state.handle_key(&keyboard::Key::Character("+".into()));
        state.handle_key(&keyboard::Key::Character("0".into()));
        assert_abs_diff_eq!(state.zoom().map(Zoom::value).unwrap(), 1.0);
    }

    #[test]
    fn scroll_lock_balances_across_cycles() {
        let locks = ScrollLockState::new();
        let mut state = State::new(locks.clone(), DEFAULT_ZOOM_STEP, DEFAULT_SWIPE_THRESHOLD);
        state.set_item_count(6);

        for index in 0..6 {
            state.handle(Message::Open(index));
            assert_eq!(locks.active_locks(), 1);
            state.handle(Message::Close);
            assert_eq!(locks.active_locks(), 0);
        }
    }

    #[test]
    fn reopening_a_different_index_holds_a_single_lock() {
        let locks = ScrollLockState::new();
        let mut state = State::new(locks.clone(), DEFAULT_ZOOM_STEP, DEFAULT_SWIPE_THRESHOLD);
        state.set_item_count(6);

        state.handle(Message::Open(1));
        state.handle(Message::Open(4));
        state.handle(Message::Navigate(Direction::Next));
        assert_eq!(locks.active_locks(), 1);

        state.handle(Message::Close);
        assert_eq!(locks.active_locks(), 0);
    }

    #[test]
    fn dropping_the_component_releases_the_lock() {
        let locks = ScrollLockState::new();
        {
            let mut state =
                State::new(locks.clone(), DEFAULT_ZOOM_STEP, DEFAULT_SWIPE_THRESHOLD);
            state.set_item_count(3);
            state.handle(Message::Open(2));
            assert!(locks.is_locked());
        }
        assert!(!locks.is_locked());
    }

    #[test]
    fn changing_item_count_closes_the_viewer() {
        let locks = ScrollLockState::new();
        let mut state = State::new(locks.clone(), DEFAULT_ZOOM_STEP, DEFAULT_SWIPE_THRESHOLD);
        state.set_item_count(6);
        state.handle(Message::Open(5));

        state.set_item_count(3);
        assert!(!state.is_open());
        assert!(!locks.is_locked());
    }

    #[test]
    fn strip_toggle_only_matters_when_open() {
        let mut state = viewer(4);
        assert!(!state.strip_visible());

        state.handle(Message::Open(0));
        assert!(state.strip_visible());

        state.set_compact(true);
        assert!(!state.strip_visible());
        state.handle(Message::ToggleStrip);
        assert!(state.strip_visible());
    }
}
