//! # FlashQueue: ordered, auto-expiring list of flash messages.
//!
//! The queue owns the list a view renders. Messages arrive either directly via
//! [`FlashQueue::show`] or through the bus ([`Event::SHOW_MESSAGE`]) once the
//! queue is [mounted](FlashQueue::mount).
//!
//! ## Lifecycle of an entry
//! ```text
//! show(msg) ──► insert (tail, or head in prepend mode) ──► render
//!      │
//!      └─ timeout > 0 ──► spawn expiry timer ──► sleep(timeout)
//!                                                   │
//! dismiss(id) ─────────────┐                        ▼
//!                          └──────► remove(id) ◄── fire
//!                                      │
//!                                      ├─ present → remove, keep order, render
//!                                      └─ absent  → no-op
//! ```
//!
//! ## Rules
//! - **Identity**: entries are matched by [`FlashId`], never by value.
//! - **Idempotent removal**: of {expiry, dismiss} exactly one removes the entry.
//! - **No stale snapshots**: timers hold a `Weak` handle and lock the live list
//!   when they fire.
//! - **Mounted guard**: after [`unmount`](FlashQueue::unmount) (or drop) every
//!   mutation, including pending expiries, is a no-op.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::{runtime::Handle, select, time};
use tokio_util::sync::CancellationToken;

use super::message::{FlashEntry, FlashId, FlashMessage};
use crate::config::FlashConfig;
use crate::error::HandlerError;
use crate::events::{Bus, Event};
use crate::subscribers::Subscribe;

/// Render snapshot published after each change.
pub type FlashList = Arc<[FlashEntry]>;

/// Mutable queue state.
struct State {
    cfg: FlashConfig,
    list: Vec<FlashEntry>,
}

/// Bus registration owned by a mounted queue.
struct Mount {
    bus: Bus,
    handler: Arc<dyn Subscribe>,
}

struct Shared {
    state: Mutex<State>,
    /// Cancelled on unmount; doubles as the "is mounted" flag.
    lifecycle: CancellationToken,
    view: watch::Sender<FlashList>,
    mount: Mutex<Option<Mount>>,
}

impl Shared {
    fn show(self: &Arc<Self>, message: FlashMessage) -> Option<FlashId> {
        if self.lifecycle.is_cancelled() {
            tracing::trace!(text = %message.text, "flash queue unmounted; message dropped");
            return None;
        }

        let (id, expiry) = {
            let mut st = self.state.lock();
            if st.cfg.timeout.is_disabled() {
                return None;
            }
            let entry = FlashEntry::new(message);
            let id = entry.id;
            if st.cfg.prepend {
                st.list.insert(0, entry);
            } else {
                st.list.push(entry);
            }
            self.render(&st.list);
            (id, st.cfg.timeout.expiry())
        };

        if let Some(after) = expiry {
            self.schedule_expiry(id, after);
        }
        Some(id)
    }

    fn remove(&self, id: FlashId) -> bool {
        if self.lifecycle.is_cancelled() {
            return false;
        }
        let mut st = self.state.lock();
        let Some(pos) = st.list.iter().position(|e| e.id == id) else {
            return false;
        };
        st.list.remove(pos);
        self.render(&st.list);
        true
    }

    fn render(&self, list: &[FlashEntry]) {
        self.view.send_replace(FlashList::from(list));
    }

    fn schedule_expiry(self: &Arc<Self>, id: FlashId, after: Duration) {
        let Ok(rt) = Handle::try_current() else {
            tracing::warn!(%id, "no tokio runtime; flash message will persist until dismissed");
            return;
        };
        let weak = Arc::downgrade(self);
        let lifecycle = self.lifecycle.clone();

        rt.spawn(async move {
            select! {
                _ = time::sleep(after) => {}
                _ = lifecycle.cancelled() => return,
            }
            if let Some(shared) = weak.upgrade()
                && shared.remove(id)
            {
                tracing::trace!(%id, "flash message expired");
            }
        });
    }

    fn unmount(&self) {
        self.lifecycle.cancel();
        if let Some(Mount { bus, handler }) = self.mount.lock().take() {
            bus.unsubscribe_handler(Event::SHOW_MESSAGE, &handler);
        }
    }
}

/// Bus handler forwarding [`Event::SHOW_MESSAGE`] into a queue.
struct ShowHandler {
    shared: Weak<Shared>,
}

impl Subscribe for ShowHandler {
    fn on_event(&self, ev: &Event) -> Result<(), HandlerError> {
        let Some(shared) = self.shared.upgrade() else {
            return Ok(());
        };
        let Some(message) = ev.message.clone() else {
            return Err(HandlerError::MissingPayload {
                event: ev.name.to_string(),
            });
        };
        shared.show(message);
        Ok(())
    }

    fn name(&self) -> &str {
        "FlashQueue"
    }
}

/// Ordered list of transient messages with per-entry expiry.
///
/// Dropping the queue unmounts it.
pub struct FlashQueue {
    shared: Arc<Shared>,
}

impl FlashQueue {
    /// Creates a queue that is not attached to any bus.
    pub fn new(cfg: FlashConfig) -> Self {
        let (view, _) = watch::channel(FlashList::from(Vec::new()));
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    cfg,
                    list: Vec::new(),
                }),
                lifecycle: CancellationToken::new(),
                view,
                mount: Mutex::new(None),
            }),
        }
    }

    /// Creates a queue and subscribes it to [`Event::SHOW_MESSAGE`] on `bus`.
    ///
    /// A queue mounted earlier on the same bus is displaced (single slot).
    pub fn mount(cfg: FlashConfig, bus: &Bus) -> Self {
        let queue = Self::new(cfg);
        let handler: Arc<dyn Subscribe> = Arc::new(ShowHandler {
            shared: Arc::downgrade(&queue.shared),
        });
        bus.subscribe(Event::SHOW_MESSAGE, Arc::clone(&handler));
        *queue.shared.mount.lock() = Some(Mount {
            bus: bus.clone(),
            handler,
        });
        queue
    }

    /// Replaces the configuration used for **future** messages.
    ///
    /// Entries already queued keep the expiry they were scheduled with.
    pub fn configure(&self, cfg: FlashConfig) {
        self.shared.state.lock().cfg = cfg;
    }

    /// Returns the current configuration.
    pub fn config(&self) -> FlashConfig {
        self.shared.state.lock().cfg
    }

    /// Queues `message` and returns its id.
    ///
    /// Returns `None` without any effect when the queue is unmounted or the
    /// timeout is [disabled](crate::FlashTimeout::Disabled).
    pub fn show(&self, message: FlashMessage) -> Option<FlashId> {
        self.shared.show(message)
    }

    /// Removes the entry with `id`.
    ///
    /// Returns `true` if this call removed it; `false` if it was already gone
    /// (expired or dismissed before) or the queue is unmounted.
    pub fn dismiss(&self, id: FlashId) -> bool {
        self.shared.remove(id)
    }

    /// Returns the entries in render order.
    pub fn entries(&self) -> Vec<FlashEntry> {
        self.shared.state.lock().list.clone()
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        self.shared.state.lock().list.len()
    }

    /// Returns `true` if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().list.is_empty()
    }

    /// Subscribes to render snapshots (one per add/remove).
    pub fn watch(&self) -> watch::Receiver<FlashList> {
        self.shared.view.subscribe()
    }

    /// Returns `false` once the queue has been unmounted.
    pub fn is_mounted(&self) -> bool {
        !self.shared.lifecycle.is_cancelled()
    }

    /// Tears the queue down: releases its bus registration (if still owned)
    /// and turns every later mutation into a no-op.
    pub fn unmount(&self) {
        self.shared.unmount();
    }
}

impl Drop for FlashQueue {
    fn drop(&mut self) {
        self.shared.unmount();
    }
}

impl fmt::Debug for FlashQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.shared.state.lock();
        f.debug_struct("FlashQueue")
            .field("cfg", &st.cfg)
            .field("len", &st.list.len())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::flash::Severity;

    fn texts(q: &FlashQueue) -> Vec<String> {
        q.entries().into_iter().map(|e| e.message.text).collect()
    }

    fn msg(text: &str) -> FlashMessage {
        FlashMessage::new(text, Severity::Info)
    }

    #[tokio::test(start_paused = true)]
    async fn append_mode_keeps_call_order() {
        let q = FlashQueue::new(FlashConfig::from_millis(-1, false));
        for t in ["a", "b", "c"] {
            q.show(msg(t));
        }
        assert_eq!(texts(&q), vec!["a", "b", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn prepend_mode_reverses_call_order() {
        let q = FlashQueue::new(FlashConfig::from_millis(-1, true));
        q.show(msg("A"));
        q.show(msg("B"));
        assert_eq!(texts(&q), vec!["B", "A"]);
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_timeout_drops_messages() {
        let q = FlashQueue::new(FlashConfig::from_millis(0, false));
        assert_eq!(q.show(msg("hidden")), None);
        time::sleep(Duration::from_secs(1)).await;
        assert!(q.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn persistent_messages_never_expire() {
        let q = FlashQueue::new(FlashConfig::from_millis(-1, false));
        q.show(msg("sticky"));
        time::sleep(Duration::from_secs(3600)).await;
        assert_eq!(q.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_removes_after_timeout() {
        let q = FlashQueue::new(FlashConfig::from_millis(1000, false));
        q.show(msg("short"));

        time::sleep(Duration::from_millis(999)).await;
        assert_eq!(q.len(), 1);

        time::sleep(Duration::from_millis(2)).await;
        assert!(q.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_then_expiry_removes_once() {
        let q = FlashQueue::new(FlashConfig::from_millis(1000, false));
        let mut view = q.watch();
        let id = q.show(msg("x")).unwrap();
        let _ = view.borrow_and_update();

        assert!(q.dismiss(id));
        assert!(view.has_changed().unwrap());
        let _ = view.borrow_and_update();

        time::sleep(Duration::from_millis(1500)).await;
        assert!(!q.dismiss(id));
        assert!(!view.has_changed().unwrap(), "expiry must not re-render");
        assert!(q.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_after_expiry_is_a_no_op() {
        let q = FlashQueue::new(FlashConfig::from_millis(100, false));
        let id = q.show(msg("x")).unwrap();
        time::sleep(Duration::from_millis(150)).await;
        assert!(!q.dismiss(id));
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_removes_only_its_own_entry() {
        let q = FlashQueue::new(FlashConfig::from_millis(1000, false));
        q.show(msg("first"));
        time::sleep(Duration::from_millis(400)).await;
        q.show(msg("second"));
        q.show(msg("third"));

        time::sleep(Duration::from_millis(700)).await;
        assert_eq!(texts(&q), vec!["second", "third"]);
    }

    #[tokio::test(start_paused = true)]
    async fn identical_messages_are_distinct_entries() {
        let q = FlashQueue::new(FlashConfig::from_millis(-1, false));
        let a = q.show(msg("same")).unwrap();
        let b = q.show(msg("same")).unwrap();
        assert!(q.dismiss(a));
        assert_eq!(q.entries().len(), 1);
        assert_eq!(q.entries()[0].id, b);
    }

    #[tokio::test(start_paused = true)]
    async fn configure_applies_to_future_messages() {
        let q = FlashQueue::new(FlashConfig::from_millis(-1, false));
        q.show(msg("old"));
        q.configure(FlashConfig::from_millis(100, true));
        q.show(msg("new"));
        assert_eq!(texts(&q), vec!["new", "old"]);

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(texts(&q), vec!["old"]);
    }

    #[tokio::test(start_paused = true)]
    async fn unmounted_queue_ignores_everything() {
        let bus = Bus::new();
        let q = FlashQueue::mount(FlashConfig::from_millis(1000, false), &bus);
        let id = q.show(msg("before")).unwrap();

        q.unmount();
        assert!(!q.is_mounted());
        assert!(!bus.is_subscribed(Event::SHOW_MESSAGE));
        assert_eq!(q.show(msg("after")), None);
        assert!(!q.dismiss(id));

        time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(texts(&q), vec!["before"]);
    }

    #[tokio::test(start_paused = true)]
    async fn show_event_without_message_is_rejected() {
        let bus = Bus::new();
        let _q = FlashQueue::mount(FlashConfig::default(), &bus);
        let err = bus.dispatch(Event::new(Event::SHOW_MESSAGE)).unwrap_err();
        assert_eq!(err.as_label(), "handler_missing_payload");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_an_old_queue_keeps_the_new_registration() {
        let bus = Bus::new();
        let old = FlashQueue::mount(FlashConfig::default(), &bus);
        let new = FlashQueue::mount(FlashConfig::default(), &bus);
        drop(old);

        assert!(bus.is_subscribed(Event::SHOW_MESSAGE));
        bus.dispatch(Event::show_message(msg("hi"))).unwrap();
        assert_eq!(new.len(), 1);

        drop(new);
        assert!(!bus.is_subscribed(Event::SHOW_MESSAGE));
    }

    #[test]
    fn show_outside_runtime_persists() {
        let q = FlashQueue::new(FlashConfig::from_millis(10, false));
        assert!(q.show(msg("no runtime")).is_some());
        assert_eq!(q.len(), 1);
    }
}
