//! Named events: types and the dispatch bus.
//!
//! This module groups the event **data model** and the **bus** used to hand
//! events from producers (flash helpers, editors, the debouncer) to the single
//! handler registered for each event name.
//!
//! ## Contents
//! - [`Event`] name plus optional metadata
//! - [`Bus`] single-slot registry with synchronous dispatch
//!
//! ## Quick reference
//! - **Publishers**: [`show_flash`](crate::show_flash), `NoteEditor`, `Debouncer`
//!   (action failures).
//! - **Consumers**: `FlashQueue` (under [`Event::SHOW_MESSAGE`]), `LogWriter`
//!   or any custom [`Subscribe`](crate::Subscribe) implementation.

mod bus;
mod event;

pub use bus::Bus;
pub use event::Event;
