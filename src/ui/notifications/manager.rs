// SPDX-License-Identifier: MPL-2.0
//! Queuing and lifecycle for toast notifications.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in a queue
//! and move up as visible ones are dismissed. Expiry is driven by the
//! application tick so the manager itself owns no timers.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// State changes the toast overlay can request.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss one toast by its ID.
    Dismiss(NotificationId),
    /// Periodic check for expired toasts.
    Tick,
}

/// Holds the visible toasts and the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    /// On-screen toasts, newest first.
    visible: VecDeque<Notification>,
    /// Overflow, oldest first.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification, or queues it when the screen is full.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a toast wherever it currently is.
    ///
    /// Returns `false` when no toast has this ID, which happens when an
    /// auto-dismiss and a click race each other.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops visible toasts that have outlived their display window.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// On-screen toasts, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether anything is shown or queued; gates the tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops every toast, visible and queued.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Drops all decode error toasts.
    ///
    /// Called when a picked file decodes successfully, so errors from an
    /// earlier failed pick don't linger next to the new preview.
    pub fn clear_decode_errors(&mut self) {
        let is_decode_error =
            |n: &Notification| n.message_key().starts_with("notification-decode-");

        self.visible.retain(|n| !is_decode_error(n));
        self.queue.retain(|n| !is_decode_error(n));
        self.promote_from_queue();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_shows_immediately_while_there_is_room() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn overflow_goes_to_the_queue() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.push(Notification::success("one-too-many"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismissing_a_visible_toast_promotes_a_queued_one() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("waiting"));

        assert!(manager.dismiss(first_id));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismissing_an_unknown_id_reports_false() {
        let mut manager = Manager::new();
        let unknown = Notification::success("never-pushed").id();
        assert!(!manager.dismiss(unknown));
    }

    #[test]
    fn clear_drops_everything() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();

        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_message_removes_the_toast() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));

        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn tick_spares_errors_but_manual_dismiss_works() {
        let mut manager = Manager::new();
        let notification = Notification::error("test-error");
        let id = notification.id();
        manager.push(notification);

        manager.tick();
        assert_eq!(manager.visible_count(), 1);

        manager.dismiss(id);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn clear_decode_errors_spares_unrelated_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-decode-corrupted"));
        manager.push(Notification::error("notification-decode-unsupported-format"));
        manager.push(Notification::success("notification-upload-confirmed"));
        manager.push(Notification::error("some-other-error"));

        assert_eq!(manager.visible_count(), 3);
        assert_eq!(manager.queued_count(), 1);

        manager.clear_decode_errors();

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);
        for notification in manager.visible() {
            assert!(!notification
                .message_key()
                .starts_with("notification-decode-"));
        }
    }
}
