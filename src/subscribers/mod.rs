//! # Event handlers for the [`Bus`](crate::Bus).
//!
//! This module provides the [`Subscribe`] trait, the closure adapter
//! [`SubscribeFn`] and (behind the `logging` feature) the built-in [`LogWriter`].
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   producer ── dispatch(Event) ──► Bus ──► handler registered for Event::name
//!                                             │
//!                                   ┌─────────┼──────────┬─────────┐
//!                                   ▼         ▼          ▼         ▼
//!                               FlashQueue LogWriter SubscribeFn Custom
//! ```
//!
//! ## Handler kinds
//! - **Stateful handlers** own state driven by events (`FlashQueue`)
//! - **Passive handlers** only observe (logging, audits)

#[cfg(feature = "logging")]
mod log;
mod subscribe;
mod subscribe_fn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscribe::Subscribe;
pub use subscribe_fn::SubscribeFn;
