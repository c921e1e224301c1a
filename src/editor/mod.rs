//! Autosaving note editor and its persistence seam.
//!
//! - [`NoteEditor`] debounced autosave, save indicator, delete with feedback
//! - [`NoteStore`] async persistence trait (the notes API lives elsewhere)
//! - [`MemoryStore`] in-memory store for demos and tests

mod note;
mod store;

pub use note::{NoteEditor, SaveStatus};
pub use store::{MemoryStore, NoteStore};
