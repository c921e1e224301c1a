use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Due time used when `now + delay` does not fit in an [`Instant`] (~30 years).
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Pending timer for one debounce key.
///
/// At any given time **one** timer may be pending per key; a newer `run` for
/// the same key cancels this one and takes the slot.
pub(super) struct PendingSlot {
    /// Distinguishes this timer from any later one installed under the same key.
    pub generation: u64,
    /// Cancelled when superseded, cancelled explicitly, or on shutdown.
    pub cancel: CancellationToken,
    /// When the action is due.
    pub due_at: Instant,
}

impl PendingSlot {
    pub fn new(generation: u64, cancel: CancellationToken, delay: Duration) -> Self {
        let now = Instant::now();
        Self {
            generation,
            cancel,
            due_at: now
                .checked_add(delay)
                .unwrap_or_else(|| now + FAR_FUTURE),
        }
    }
}
