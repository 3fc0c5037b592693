//! Notification queue. Not persisted.
//!
//! ## Lifecycle
//!
//! ```text
//! enqueue → visible → dismiss(id)       → removed
//!                   → tick() past expiry → removed
//! ```
//!
//! Expiry is driven by explicit ticks rather than background timers. A tick
//! after a dismiss finds nothing to remove, which is fine: removal is
//! idempotent on a missing id.

use chrono::{DateTime, Utc};

use crate::config::DEFAULT_TOAST_MS;
use crate::ids;
use crate::model::{NewToast, Toast, ToastVariant};

#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    default_duration_ms: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_default_duration(DEFAULT_TOAST_MS)
    }

    pub fn with_default_duration(default_duration_ms: u64) -> Self {
        ToastQueue {
            toasts: Vec::new(),
            default_duration_ms,
        }
    }

    /// Entries in insertion order.
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Appends a notification and returns its id.
    pub fn enqueue(&mut self, toast: NewToast) -> String {
        self.enqueue_at(toast, Utc::now())
    }

    pub fn enqueue_at(&mut self, toast: NewToast, now: DateTime<Utc>) -> String {
        let id = ids::new_toast_id();
        self.toasts.push(Toast {
            id: id.clone(),
            title: toast.title,
            description: toast.description,
            variant: toast.variant.unwrap_or(ToastVariant::Default),
            duration_ms: toast.duration_ms.unwrap_or(self.default_duration_ms),
            created_at: now,
        });
        id
    }

    pub fn success(&mut self, title: &str, description: Option<&str>) -> String {
        self.enqueue_variant(ToastVariant::Success, title, description)
    }

    pub fn error(&mut self, title: &str, description: Option<&str>) -> String {
        self.enqueue_variant(ToastVariant::Error, title, description)
    }

    pub fn info(&mut self, title: &str, description: Option<&str>) -> String {
        self.enqueue_variant(ToastVariant::Default, title, description)
    }

    fn enqueue_variant(
        &mut self,
        variant: ToastVariant,
        title: &str,
        description: Option<&str>,
    ) -> String {
        let mut toast = NewToast::new(title).variant(variant);
        toast.description = description.map(str::to_string);
        self.enqueue(toast)
    }

    /// Removes `id` now. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Timer callback: drops every expired entry and returns their ids.
    pub fn tick(&mut self) -> Vec<String> {
        self.tick_at(Utc::now())
    }

    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let mut expired = Vec::new();
        self.toasts.retain(|t| {
            if t.is_expired_at(now) {
                expired.push(t.id.clone());
                false
            } else {
                true
            }
        });
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_enqueue_applies_defaults() {
        let mut queue = ToastQueue::new();
        let id = queue.enqueue(NewToast::new("Hello"));
        let toast = &queue.visible()[0];
        assert_eq!(toast.id, id);
        assert_eq!(toast.variant, ToastVariant::Default);
        assert_eq!(toast.duration_ms, DEFAULT_TOAST_MS);
    }

    #[test]
    fn test_configured_default_duration() {
        let mut queue = ToastQueue::with_default_duration(250);
        queue.info("Hi", None);
        assert_eq!(queue.visible()[0].duration_ms, 250);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut queue = ToastQueue::new();
        let a = queue.success("a", None);
        let b = queue.error("b", Some("details"));
        let c = queue.info("c", None);
        let ids: Vec<_> = queue.visible().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(queue.visible()[1].description.as_deref(), Some("details"));
        assert_eq!(queue.visible()[1].variant, ToastVariant::Error);
    }

    #[test]
    fn test_zero_duration_removed_on_next_tick() {
        let mut queue = ToastQueue::new();
        let now = Utc::now();
        let id = queue.enqueue_at(NewToast::new("Gone").duration_ms(0), now);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.tick_at(now), vec![id]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_tick_keeps_unexpired() {
        let mut queue = ToastQueue::new();
        let now = Utc::now();
        queue.enqueue_at(NewToast::new("short").duration_ms(100), now);
        let long = queue.enqueue_at(NewToast::new("long").duration_ms(5000), now);

        let expired = queue.tick_at(now + Duration::milliseconds(100));
        assert_eq!(expired.len(), 1);
        assert_eq!(queue.visible()[0].id, long);
    }

    #[test]
    fn test_dismiss_before_expiry_removes_once() {
        let mut queue = ToastQueue::new();
        let now = Utc::now();
        let id = queue.enqueue_at(NewToast::new("x").duration_ms(1000), now);

        assert!(queue.dismiss(&id));
        assert!(!queue.dismiss(&id));
        assert!(queue.tick_at(now + Duration::seconds(5)).is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut queue = ToastQueue::new();
        queue.info("stay", None);
        assert!(!queue.dismiss("nope"));
        assert_eq!(queue.len(), 1);
    }
}
