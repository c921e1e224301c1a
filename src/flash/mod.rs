//! Flash messages: data model, the expiring queue and the producer helper.
//!
//! ## Contents
//! - [`FlashMessage`], [`Severity`], [`FlashEntry`], [`FlashId`] data model
//! - [`FlashQueue`] the list a view renders, fed by the bus
//! - [`show_flash`] helper producers call to request a message
//!
//! ## Wiring
//! ```text
//! show_flash(&bus, "Saved", Success)
//!     └─► Bus::dispatch(Event::SHOW_MESSAGE { message })
//!             └─► FlashQueue (mounted) ──► insert + render ──► expiry timer
//! ```

mod message;
mod queue;

pub use message::{FlashEntry, FlashId, FlashMessage, Severity};
pub use queue::{FlashList, FlashQueue};

use crate::error::HandlerError;
use crate::events::{Bus, Event};

/// Asks whichever queue is mounted on `bus` to show a message.
///
/// Does nothing if no queue is mounted.
///
/// # Example
/// ```
/// use flashkit::{Bus, FlashConfig, FlashQueue, Severity, show_flash};
///
/// let bus = Bus::new();
/// let queue = FlashQueue::mount(FlashConfig::from_millis(-1, false), &bus);
///
/// show_flash(&bus, "Saved", Severity::Success).unwrap();
/// assert_eq!(queue.entries()[0].text(), "Saved");
/// ```
pub fn show_flash(bus: &Bus, text: impl Into<String>, severity: Severity) -> Result<(), HandlerError> {
    bus.dispatch(Event::show_message(FlashMessage::new(text, severity)))
}
