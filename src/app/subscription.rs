// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, window) to top-level
//! messages and drives the periodic tick for notification auto-dismiss.

use super::Message;
use iced::{event, keyboard, time, Subscription};

/// Creates the native event subscription.
///
/// Window close requests are intercepted so persisted state can be flushed
/// before exit. File drops and Escape are routed to the update loop; Escape
/// is only forwarded when no widget (such as the text input) captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = &event
        {
            return match status {
                event::Status::Ignored => Some(Message::EscapePressed),
                event::Status::Captured => None,
            };
        }

        None
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while notifications are showing, so an idle application
/// does not wake up every 100ms for nothing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
