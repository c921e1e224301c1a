//! # flashkit
//!
//! **flashkit** provides the small stateful pieces behind a note-taking UI:
//! transient flash messages that expire on their own, a named event bus that
//! decouples message producers from the view rendering them, and a per-key
//! debouncer that turns a stream of keystrokes into one autosave.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!   │  NoteEditor  │   │  NoteEditor  │   │  any caller  │
//!   │  (note #1)   │   │  (note #2)   │   │ show_flash() │
//!   └──┬────────┬──┘   └──┬────────┬──┘   └──────┬───────┘
//!      │        │         │        │             │
//!      │ on_change()      │ on_change()          │
//!      │        ▼         │        ▼             │
//!      │   ┌──────────────────────────┐          │
//!      │   │ Debouncer (slot per id)  │          │
//!      │   └────────────┬─────────────┘          │
//!      │                ▼ quiet period elapsed   │
//!      │        NoteStore::update()              │
//!      │                │ rejected               │
//!      ▼                ▼                        ▼
//! ┌───────────────────────────────────────────────────────┐
//! │  Bus  (one handler per event name, sync dispatch)     │
//! └──────────────────────────┬────────────────────────────┘
//!                            ▼ "Flash.showMessage"
//!                  ┌────────────────────┐
//!                  │     FlashQueue     │──► watch::Receiver<FlashList> ──► view
//!                  │ insert + expiry    │◄── dismiss(id)
//!                  └────────────────────┘
//! ```
//!
//! ## Features
//! | Area              | Description                                                 | Key types / traits                      |
//! |-------------------|-------------------------------------------------------------|-----------------------------------------|
//! | **Event bus**     | Named, single-handler, synchronous dispatch.                | [`Bus`], [`Event`], [`Subscribe`]       |
//! | **Flash queue**   | Ordered messages with expiry, dismissal and render snapshots.| [`FlashQueue`], [`FlashMessage`]       |
//! | **Debounce**      | One trailing action per burst, per key.                     | [`Debouncer`]                           |
//! | **Editor**        | Autosave, save indicator, delete with flash feedback.       | [`NoteEditor`], [`NoteStore`]           |
//! | **Errors**        | Typed errors with stable labels.                            | [`HandlerError`], [`ActionError`], [`StoreError`] |
//! | **Configuration** | Timeouts and delays with sentinel decoding.                 | [`Config`], [`FlashConfig`], [`EditorConfig`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use flashkit::{Bus, FlashConfig, FlashQueue, Severity, show_flash};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bus = Bus::new();
//!     let queue = FlashQueue::mount(FlashConfig::from_millis(50, false), &bus);
//!
//!     show_flash(&bus, "Saved", Severity::Success)?;
//!     assert_eq!(queue.len(), 1);
//!
//!     tokio::time::sleep(Duration::from_millis(100)).await;
//!     assert!(queue.is_empty());
//!     Ok(())
//! }
//! ```

mod config;
mod debounce;
mod editor;
mod error;
mod events;
mod flash;
mod subscribers;

// ---- Public re-exports ----

pub use config::{Config, EditorConfig, FlashConfig, FlashTimeout};
pub use debounce::Debouncer;
pub use editor::{MemoryStore, NoteEditor, NoteStore, SaveStatus};
pub use error::{ActionError, HandlerError, StoreError};
pub use events::{Bus, Event};
pub use flash::{FlashEntry, FlashId, FlashList, FlashMessage, FlashQueue, Severity, show_flash};
pub use subscribers::{Subscribe, SubscribeFn};

// Optional: expose a simple built-in logging handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
