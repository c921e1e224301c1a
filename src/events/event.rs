//! # Events carried by the [`Bus`](crate::Bus).
//!
//! Events are addressed by **name** (a plain string such as `"Flash.showMessage"`)
//! and carry optional metadata set through builder methods.
//!
//! ## Well-known names
//! - [`Event::SHOW_MESSAGE`] payload: `message`
//! - [`Event::ACTION_FAILED`] payload: `key`, `reason`
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use flashkit::{Event, FlashMessage};
//!
//! let ev = Event::show_message(FlashMessage::success("Saved"));
//!
//! assert_eq!(&*ev.name, Event::SHOW_MESSAGE);
//! assert_eq!(ev.message.as_ref().map(|m| m.text.as_str()), Some("Saved"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::flash::FlashMessage;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Named event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the event name
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Name the event is dispatched under.
    pub name: Arc<str>,

    /// Flash message to show.
    pub message: Option<FlashMessage>,
    /// Key of the item the event concerns (e.g. the debounced note id).
    pub key: Option<Arc<str>>,
    /// Human-readable reason (errors, panics, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Request to display a flash message.
    pub const SHOW_MESSAGE: &'static str = "Flash.showMessage";

    /// A debounced action failed when its timer fired.
    pub const ACTION_FAILED: &'static str = "Debounce.actionFailed";

    /// Creates a new event with current timestamp and next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
            message: None,
            key: None,
            reason: None,
        }
    }

    /// Attaches a flash message.
    #[inline]
    pub fn with_message(mut self, message: FlashMessage) -> Self {
        self.message = Some(message);
        self
    }

    /// Attaches an item key.
    #[inline]
    pub fn with_key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates a [`SHOW_MESSAGE`](Self::SHOW_MESSAGE) event.
    #[inline]
    pub fn show_message(message: FlashMessage) -> Self {
        Event::new(Self::SHOW_MESSAGE).with_message(message)
    }

    /// Creates an [`ACTION_FAILED`](Self::ACTION_FAILED) event.
    #[inline]
    pub fn action_failed(key: impl Into<Arc<str>>, reason: impl Into<Arc<str>>) -> Self {
        Event::new(Self::ACTION_FAILED)
            .with_key(key)
            .with_reason(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let a = Event::new("a");
        let b = Event::new("b");
        assert!(b.seq > a.seq);
    }

    #[test]
    fn action_failed_carries_key_and_reason() {
        let ev = Event::action_failed("note-1", "boom");
        assert_eq!(&*ev.name, Event::ACTION_FAILED);
        assert_eq!(ev.key.as_deref(), Some("note-1"));
        assert_eq!(ev.reason.as_deref(), Some("boom"));
        assert!(ev.message.is_none());
    }
}
