//! Ephemeral user notifications ("Copied 😀!").

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{FinderError, FinderResult};

/// How long the copy confirmation stays on screen by default.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Fire-and-forget message sink.
pub trait Notifier {
    fn notify(&mut self, message: &str, duration: Duration) -> FinderResult<()>;
}

/// A message shown until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// In-app toasts, oldest first.
#[derive(Debug)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
    max_items: usize,
}

impl ToastQueue {
    pub fn new(max_items: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(max_items),
            max_items: max_items.max(1),
        }
    }

    /// Queue a toast that expires `duration` after `now`.
    pub fn push(&mut self, message: &str, duration: Duration, now: Instant) {
        self.items.push_back(Toast {
            message: message.to_string(),
            expires_at: now + duration,
        });

        while self.items.len() > self.max_items {
            self.items.pop_front();
        }
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.expires_at > now);
        self.items.len() != before
    }

    /// Toasts still visible at `now`
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        self.items.iter().filter(move |toast| toast.expires_at > now)
    }

    /// Earliest expiry, for scheduling the next prune
    pub fn next_expiry(&self) -> Option<Instant> {
        self.items.iter().map(|toast| toast.expires_at).min()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Desktop notifications using notify-rust
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&mut self, message: &str, duration: Duration) -> FinderResult<()> {
        let timeout = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        notify_rust::Notification::new()
            .appname(&self.app_name)
            .summary(&self.app_name)
            .body(message)
            .timeout(notify_rust::Timeout::Milliseconds(timeout))
            .show()
            .map_err(|e| FinderError::Notification(e.to_string()))?;
        Ok(())
    }
}

/// Message shown after a successful copy.
pub fn copied_message(character: &str) -> String {
    format!("Copied {}!", character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let now = Instant::now();
        let mut toasts = ToastQueue::default();

        toasts.push("Copied 😀!", Duration::from_millis(2000), now);
        assert_eq!(toasts.active(now).count(), 1);
        assert_eq!(toasts.next_expiry(), Some(now + Duration::from_millis(2000)));

        let later = now + Duration::from_millis(2000);
        assert_eq!(toasts.active(later).count(), 0);
        assert!(toasts.prune(later));
        assert!(toasts.is_empty());
        assert!(!toasts.prune(later));
    }

    #[test]
    fn test_toast_limit_drops_oldest() {
        let now = Instant::now();
        let mut toasts = ToastQueue::new(2);

        toasts.push("one", DEFAULT_TOAST_DURATION, now);
        toasts.push("two", DEFAULT_TOAST_DURATION, now);
        toasts.push("three", DEFAULT_TOAST_DURATION, now);

        let messages: Vec<&str> = toasts.active(now).map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(toasts.len(), 2);
    }
}
