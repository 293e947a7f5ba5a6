// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! While the lightbox is open, raw keyboard, mouse, and touch events are
//! routed to it; otherwise only window resizes are observed and every other
//! event stays with the widgets under the cursor.

use super::Message;
use crate::ui::lightbox::component;
use iced::{event, mouse, window, Subscription};

/// Creates the event subscription matching the current viewer state.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(viewer_events)
    } else {
        event::listen_with(browse_events)
    }
}

fn viewer_events(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::Resized(size)) = &event {
        return Some(Message::WindowResized(*size));
    }

    // Wheel scroll always reaches the lightbox for zoom, even if a widget
    // under the cursor would capture it.
    if matches!(
        event,
        event::Event::Mouse(mouse::Event::WheelScrolled { .. })
    ) {
        return Some(Message::Lightbox(component::Message::RawEvent(event)));
    }

    match status {
        event::Status::Ignored => Some(Message::Lightbox(component::Message::RawEvent(event))),
        event::Status::Captured => None,
    }
}

fn browse_events(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::Resized(size)) = &event {
        return Some(Message::WindowResized(*size));
    }
    None
}
