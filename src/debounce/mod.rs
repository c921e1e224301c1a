//! Per-key debouncing of deferred actions.
//!
//! - [`Debouncer`] collapses bursts of `run` calls into one trailing action per key.
//!
//! Pending timers live in slots keyed by the caller's identifier (a note id,
//! typically). Each slot holds a generation number and a cancellation token;
//! see `debouncer.rs` for the timeline.

mod debouncer;
mod slot;

pub use debouncer::Debouncer;
