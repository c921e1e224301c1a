//! # LogWriter: simple event logger
//!
//! A minimal handler that writes incoming [`Event`]s through `tracing`.
//! Register it under any name you want to observe (typically
//! [`Event::ACTION_FAILED`]). Use it for debugging or demos.
//!
//! ## Example output
//! ```text
//! INFO  flash: [show-message] severity=success text="Note deleted."
//! WARN  flash: [action-failed] key="note-1" reason="store unavailable: timeout"
//! DEBUG flash: [event] event="Note.opened" key="note-1"
//! ```

use crate::error::HandlerError;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Event writer handler.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Subscribe for LogWriter {
    fn on_event(&self, e: &Event) -> Result<(), HandlerError> {
        match &*e.name {
            Event::SHOW_MESSAGE => match &e.message {
                Some(m) => tracing::info!(
                    target: "flash",
                    severity = %m.severity,
                    text = %m.text,
                    "[show-message]"
                ),
                None => tracing::info!(target: "flash", "[show-message] <empty>"),
            },
            Event::ACTION_FAILED => {
                tracing::warn!(
                    target: "flash",
                    key = e.key.as_deref().unwrap_or("unknown"),
                    reason = e.reason.as_deref().unwrap_or("unknown"),
                    "[action-failed]"
                );
            }
            other => {
                tracing::debug!(
                    target: "flash",
                    event = other,
                    key = ?e.key,
                    reason = ?e.reason,
                    "[event]"
                );
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
