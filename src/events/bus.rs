//! # Event bus for named, synchronous dispatch.
//!
//! [`Bus`] maps an event name to **one** handler and invokes it synchronously
//! on the caller's context.
//!
//! ## Architecture
//! ```text
//! Producers (many):                       Handler (one per name):
//!   show_flash() ──┐
//!   NoteEditor  ───┼──► Bus::dispatch(ev) ──► registry[ev.name].on_event(&ev)
//!   Debouncer   ───┘         │
//!                            └─ no handler registered → Ok(()), nothing happens
//! ```
//!
//! ## Rules
//! - **Single slot**: subscribing under a taken name replaces the old handler.
//! - **Synchronous**: `dispatch()` runs the handler before returning; no queuing.
//! - **Errors propagate**: the handler's `Err` is returned from `dispatch()` as is.
//! - **Re-entrant**: the registry lock is released before the handler runs, so
//!   a handler may subscribe, unsubscribe or dispatch itself.
//! - **Explicit instance**: there is no global registry; clone the bus to share it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::event::Event;
use crate::error::HandlerError;
use crate::subscribers::Subscribe;

/// Named publish/subscribe registry.
///
/// ### Properties
/// - **Cloneable**: cheap to clone (internally an `Arc`-backed registry);
///   all clones observe the same registrations.
/// - **Thread-safe**: may be shared with timer tasks.
#[derive(Clone, Default)]
pub struct Bus {
    handlers: Arc<RwLock<HashMap<Arc<str>, Arc<dyn Subscribe>>>>,
}

impl Bus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, returning the handler it replaced.
    pub fn subscribe(
        &self,
        name: impl Into<Arc<str>>,
        handler: Arc<dyn Subscribe>,
    ) -> Option<Arc<dyn Subscribe>> {
        let name = name.into();
        let replaced = self.handlers.write().insert(Arc::clone(&name), handler);
        if let Some(old) = &replaced {
            tracing::debug!(event = %name, replaced = old.name(), "bus handler replaced");
        }
        replaced
    }

    /// Removes the registration for `name`; no-op if absent.
    pub fn unsubscribe(&self, name: &str) -> Option<Arc<dyn Subscribe>> {
        self.handlers.write().remove(name)
    }

    /// Removes the registration for `name` only if it is still `handler`.
    ///
    /// Returns `true` if the registration was removed.
    pub fn unsubscribe_handler(&self, name: &str, handler: &Arc<dyn Subscribe>) -> bool {
        let mut handlers = self.handlers.write();
        let owned = handlers
            .get(name)
            .is_some_and(|current| same_handler(current, handler));
        if owned {
            handlers.remove(name);
        }
        owned
    }

    /// Invokes the handler registered for `ev.name`, if any.
    ///
    /// - Unknown names are not an error: returns `Ok(())` with no effect.
    /// - The handler's error is returned unchanged.
    pub fn dispatch(&self, ev: Event) -> Result<(), HandlerError> {
        let handler = self.handlers.read().get(&*ev.name).cloned();
        match handler {
            Some(h) => h.on_event(&ev),
            None => {
                tracing::trace!(event = %ev.name, seq = ev.seq, "no handler registered");
                Ok(())
            }
        }
    }

    /// Returns `true` if a handler is registered under `name`.
    pub fn is_subscribed(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    /// Number of registered event names.
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.read();
        let mut names: Vec<&str> = handlers.keys().map(|k| &**k).collect();
        names.sort_unstable();
        f.debug_struct("Bus").field("events", &names).finish()
    }
}

/// Identity comparison of two handlers (data pointer only).
fn same_handler(a: &Arc<dyn Subscribe>, b: &Arc<dyn Subscribe>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
