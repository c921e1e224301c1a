//! # Debouncer: one trailing call per burst, per key.
//!
//! [`Debouncer::run`] is called on every high-frequency trigger (a keystroke,
//! say) with the action to perform. Only the action from the last call of a
//! burst runs, once, after `delay` of quiet.
//!
//! ## Timeline
//! ```text
//! t=0     run("a", f1, 1000)  → slot["a"] = gen 1, timer 1 started
//! t=500   run("a", f2, 1000)  → timer 1 cancelled, slot["a"] = gen 2, timer 2 started
//! t=1500  timer 2 fires       → claim slot["a"] (gen 2 matches) → remove → f2()
//! ```
//!
//! ## Rules
//! - **Per-key slots**: keys never interfere with each other.
//! - **Claim before run**: a timer only runs its action if its generation still
//!   owns the slot, so a `run` racing with an elapsing timer wins.
//! - **Failures are reported**, never swallowed: logged via `tracing` and, when a
//!   bus is attached, dispatched as [`Event::ACTION_FAILED`]. Panics inside the
//!   action are caught and reported the same way.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::Duration;

use futures::FutureExt;
use parking_lot::Mutex;
use tokio::{runtime::Handle, select, time};
use tokio_util::sync::CancellationToken;

use super::slot::PendingSlot;
use crate::error::ActionError;
use crate::events::{Bus, Event};

struct Inner {
    slots: Mutex<HashMap<String, PendingSlot>>,
    generation: AtomicU64,
    bus: Option<Bus>,
    /// Parent of every slot token; cancelled on shutdown.
    runtime_token: CancellationToken,
}

impl Inner {
    /// Takes the slot for `key` if timer `generation` still owns it.
    fn claim(&self, key: &str, generation: u64) -> bool {
        let mut slots = self.slots.lock();
        match slots.get(key) {
            Some(slot) if slot.generation == generation => {
                slots.remove(key);
                true
            }
            _ => false,
        }
    }

    fn report(&self, key: &str, err: &ActionError) {
        tracing::warn!(key, label = err.as_label(), error = %err, "debounced action failed");

        if let Some(bus) = &self.bus
            && let Err(e) = bus.dispatch(Event::action_failed(key, err.to_string()))
        {
            tracing::warn!(key, error = %e, "action failure handler failed");
        }
    }
}

/// Per-key trailing-edge debouncer.
///
/// Cheap to clone; clones share the same slots.
#[derive(Clone)]
pub struct Debouncer {
    inner: Arc<Inner>,
}

impl Debouncer {
    /// Creates a debouncer that only logs action failures.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a debouncer that also dispatches [`Event::ACTION_FAILED`] on `bus`.
    pub fn with_bus(bus: Bus) -> Self {
        Self::build(Some(bus))
    }

    fn build(bus: Option<Bus>) -> Self {
        Self {
            inner: Arc::new(Inner {
                slots: Mutex::new(HashMap::new()),
                generation: AtomicU64::new(1),
                bus,
                runtime_token: CancellationToken::new(),
            }),
        }
    }

    /// Schedules `action` to run after `delay`, superseding any pending action
    /// for the same `key`.
    ///
    /// Must be called from within a Tokio runtime; otherwise the call is
    /// dropped with a warning. Calls after [`shutdown`](Self::shutdown) are ignored.
    pub fn run<F, Fut>(&self, key: impl Into<String>, action: F, delay: Duration)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        let key = key.into();
        let Ok(rt) = Handle::try_current() else {
            tracing::warn!(key = %key, "no tokio runtime; debounced action dropped");
            return;
        };
        if self.inner.runtime_token.is_cancelled() {
            tracing::trace!(key = %key, "debouncer shut down; action dropped");
            return;
        }

        let generation = self.inner.generation.fetch_add(1, AtomicOrdering::Relaxed);
        let cancel = self.inner.runtime_token.child_token();
        {
            let mut slots = self.inner.slots.lock();
            let slot = PendingSlot::new(generation, cancel.clone(), delay);
            if let Some(prev) = slots.insert(key.clone(), slot) {
                prev.cancel.cancel();
            }
        }

        let inner = Arc::clone(&self.inner);
        rt.spawn(async move {
            select! {
                _ = time::sleep(delay) => {}
                _ = cancel.cancelled() => return,
            }
            if !inner.claim(&key, generation) {
                return;
            }

            let outcome = AssertUnwindSafe(async move { action().await })
                .catch_unwind()
                .await;
            let result = match outcome {
                Ok(res) => res,
                Err(panic_err) => Err(ActionError::Panicked {
                    info: panic_message(&*panic_err),
                }),
            };
            if let Err(e) = result {
                inner.report(&key, &e);
            }
        });
    }

    /// Cancels the pending action for `key`.
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&self, key: &str) -> bool {
        match self.inner.slots.lock().remove(key) {
            Some(slot) => {
                slot.cancel.cancel();
                true
            }
            None => false,
        }
    }

    /// Returns `true` if an action is waiting for `key`.
    pub fn is_pending(&self, key: &str) -> bool {
        self.inner.slots.lock().contains_key(key)
    }

    /// Returns sorted list of keys with a pending action.
    pub fn pending(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.slots.lock().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Time left until the action for `key` is due, if one is pending.
    pub fn remaining(&self, key: &str) -> Option<Duration> {
        self.inner
            .slots
            .lock()
            .get(key)
            .map(|slot| slot.due_at.saturating_duration_since(time::Instant::now()))
    }

    /// Drops every pending action and ignores later calls to [`run`](Self::run).
    pub fn shutdown(&self) {
        self.inner.runtime_token.cancel();
        self.inner.slots.lock().clear();
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("pending", &self.pending())
            .field("shut_down", &self.inner.runtime_token.is_cancelled())
            .finish()
    }
}

fn panic_message(any: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
