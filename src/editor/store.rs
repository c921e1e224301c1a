//! # Note persistence seam.
//!
//! [`NoteStore`] is what an editor saves through; the real implementation talks
//! to the notes API and lives outside this crate. [`MemoryStore`] keeps notes in
//! a map and is handy for demos and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::StoreError;

/// # Asynchronous note persistence.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use flashkit::{NoteStore, StoreError};
///
/// struct ReadOnly;
///
/// #[async_trait]
/// impl NoteStore for ReadOnly {
///     async fn update(&self, _id: &str, _text: &str) -> Result<(), StoreError> {
///         Err(StoreError::Rejected { message: "notes are read-only".into() })
///     }
///
///     async fn delete(&self, _id: &str) -> Result<(), StoreError> {
///         Err(StoreError::Rejected { message: "notes are read-only".into() })
///     }
/// }
/// ```
#[async_trait]
pub trait NoteStore: Send + Sync + 'static {
    /// Replaces the text of note `id`.
    async fn update(&self, id: &str, text: &str) -> Result<(), StoreError>;

    /// Deletes note `id`.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory [`NoteStore`].
///
/// A failure set with [`fail_with`](Self::fail_with) is returned by every call
/// until cleared.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Mutex<HashMap<String, String>>,
    failure: Mutex<Option<StoreError>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a note directly.
    pub fn insert(&self, id: impl Into<String>, text: impl Into<String>) {
        self.notes.lock().insert(id.into(), text.into());
    }

    /// Returns the stored text of note `id`.
    pub fn get(&self, id: &str) -> Option<String> {
        self.notes.lock().get(id).cloned()
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }

    /// Makes every following call fail with `err` (`None` restores normal behavior).
    pub fn fail_with(&self, err: Option<StoreError>) {
        *self.failure.lock() = err;
    }

    fn check(&self) -> Result<(), StoreError> {
        match &*self.failure.lock() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn update(&self, id: &str, text: &str) -> Result<(), StoreError> {
        self.check()?;
        let mut notes = self.notes.lock();
        match notes.get_mut(id) {
            Some(current) => {
                *current = text.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check()?;
        match self.notes.lock().remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_requires_existing_note() {
        let store = MemoryStore::new();
        let err = store.update("n1", "text").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: "n1".into() });

        store.insert("n1", "old");
        store.update("n1", "new").await.unwrap();
        assert_eq!(store.get("n1").as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn injected_failure_is_sticky_until_cleared() {
        let store = MemoryStore::new();
        store.insert("n1", "text");
        store.fail_with(Some(StoreError::Unavailable { error: "offline".into() }));

        assert!(store.delete("n1").await.is_err());
        assert!(store.delete("n1").await.is_err());

        store.fail_with(None);
        store.delete("n1").await.unwrap();
        assert!(store.is_empty());
    }
}
