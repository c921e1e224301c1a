//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging event handlers into the
//! [`Bus`](crate::Bus). The bus calls [`Subscribe::on_event`] synchronously from
//! [`Bus::dispatch`](crate::Bus::dispatch), on the dispatching context.
//!
//! ## Contract
//! - Keep handlers short: the producer waits for them. Spawn a task for slow work.
//! - A returned `Err` is handed to the producer unchanged; the bus never retries.
//!
//! ## Example
//! ```rust
//! use flashkit::{Event, HandlerError, Subscribe};
//!
//! struct Audit;
//!
//! impl Subscribe for Audit {
//!     fn on_event(&self, ev: &Event) -> Result<(), HandlerError> {
//!         println!("audit: {} #{}", ev.name, ev.seq);
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//! ```

use crate::error::HandlerError;
use crate::events::Event;

/// Contract for event handlers.
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    fn on_event(&self, event: &Event) -> Result<(), HandlerError>;

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
