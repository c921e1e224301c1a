//! # Function-backed handler (`SubscribeFn`)
//!
//! [`SubscribeFn`] wraps a closure `F: Fn(&Event) -> Result<(), HandlerError>`
//! so small handlers do not need a dedicated type.
//!
//! ## Example
//! ```rust
//! use flashkit::{Bus, Event, SubscribeFn};
//!
//! let bus = Bus::new();
//! bus.subscribe("Note.saved", SubscribeFn::arc("saved", |ev: &Event| {
//!     println!("saved {:?}", ev.key);
//!     Ok(())
//! }));
//!
//! bus.dispatch(Event::new("Note.saved").with_key("n1")).unwrap();
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Function-backed handler implementation.
pub struct SubscribeFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscribeFn<F>
where
    F: Fn(&Event) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`SubscribeFn::arc`] when you immediately register it on a bus.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for SubscribeFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscribeFn").field("name", &self.name).finish()
    }
}

impl<F> Subscribe for SubscribeFn<F>
where
    F: Fn(&Event) -> Result<(), HandlerError> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event) -> Result<(), HandlerError> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
