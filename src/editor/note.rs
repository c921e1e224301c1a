//! # NoteEditor: autosaving editor for a single note.
//!
//! Every edit goes through [`NoteEditor::on_change`], which records the text and
//! debounces a save keyed by the note id. Outcomes are reported as flash messages
//! on the bus.
//!
//! ## Save flow
//! ```text
//! on_change(text) ──► text = latest ──► Debouncer::run(id, save, autosave_delay)
//!                                                │ (quiet period elapsed)
//!                                                ▼
//!                      status = Saving ──► store.update(id, text at fire time)
//!                             │                  ├─ Ok
//!                             │                  └─ Rejected ─► flash warning
//!                             └─ after saving_indicator ─► status = Idle
//! ```
//!
//! The save reads the text when it fires, not when it was scheduled, so the
//! latest edit of a burst is always what gets persisted.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use parking_lot::Mutex;
use tokio::{runtime::Handle, sync::watch, time};

use super::store::NoteStore;
use crate::config::EditorConfig;
use crate::debounce::Debouncer;
use crate::error::{ActionError, StoreError};
use crate::events::Bus;
use crate::flash::{Severity, show_flash};

/// Save indicator shown next to the note.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
}

impl SaveStatus {
    /// Text shown to the user (empty while idle).
    pub fn label(&self) -> &'static str {
        match self {
            SaveStatus::Idle => "",
            SaveStatus::Saving => "Saving...",
        }
    }
}

struct EditorInner {
    id: String,
    text: Mutex<String>,
    status: watch::Sender<SaveStatus>,
    /// Bumped on every save; a status reset only applies to the latest save.
    saves: AtomicU64,
    store: Arc<dyn NoteStore>,
    debouncer: Debouncer,
    bus: Bus,
    cfg: EditorConfig,
}

impl EditorInner {
    async fn save(self: Arc<Self>) -> Result<(), ActionError> {
        let text = self.text.lock().clone();
        self.status.send_replace(SaveStatus::Saving);
        self.schedule_status_reset();

        match self.store.update(&self.id, &text).await {
            Ok(()) => {
                tracing::debug!(note = %self.id, bytes = text.len(), "note saved");
                Ok(())
            }
            Err(e) => {
                self.report("Could not update note", &e);
                Err(e.into())
            }
        }
    }

    fn schedule_status_reset(self: &Arc<Self>) {
        let save = self.saves.fetch_add(1, AtomicOrdering::Relaxed) + 1;
        let Ok(rt) = Handle::try_current() else {
            tracing::warn!(note = %self.id, "no tokio runtime; saving indicator will not reset");
            return;
        };
        let me = Arc::clone(self);
        rt.spawn(async move {
            time::sleep(me.cfg.saving_indicator).await;
            if me.saves.load(AtomicOrdering::Relaxed) == save {
                me.status.send_replace(SaveStatus::Idle);
            }
        });
    }

    fn report(&self, what: &str, err: &StoreError) {
        match err.user_message() {
            Some(msg) => self.flash(format!("{what}: {msg}"), Severity::Warning),
            None => tracing::error!(note = %self.id, error = %err, "{what}"),
        }
    }

    fn flash(&self, text: String, severity: Severity) {
        if let Err(e) = show_flash(&self.bus, text, severity) {
            tracing::warn!(note = %self.id, error = %e, "flash handler failed");
        }
    }
}

/// Editor state for one note with debounced autosave.
///
/// Must be used from within a Tokio runtime.
#[derive(Clone)]
pub struct NoteEditor {
    inner: Arc<EditorInner>,
}

impl NoteEditor {
    /// Creates an editor for note `id` showing `text`.
    ///
    /// `debouncer` is normally shared by every editor of a page; slots are keyed
    /// by note id, so editors never cancel each other's saves.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        store: Arc<dyn NoteStore>,
        debouncer: Debouncer,
        bus: Bus,
        cfg: EditorConfig,
    ) -> Self {
        let (status, _) = watch::channel(SaveStatus::Idle);
        Self {
            inner: Arc::new(EditorInner {
                id: id.into(),
                text: Mutex::new(text.into()),
                status,
                saves: AtomicU64::new(0),
                store,
                debouncer,
                bus,
                cfg,
            }),
        }
    }

    /// Note id.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Current text.
    pub fn text(&self) -> String {
        self.inner.text.lock().clone()
    }

    /// Current save indicator.
    pub fn status(&self) -> SaveStatus {
        *self.inner.status.borrow()
    }

    /// Subscribes to save indicator changes.
    pub fn watch_status(&self) -> watch::Receiver<SaveStatus> {
        self.inner.status.subscribe()
    }

    /// Records an edit and (re)schedules the autosave.
    pub fn on_change(&self, text: impl Into<String>) {
        *self.inner.text.lock() = text.into();

        let inner = Arc::clone(&self.inner);
        self.inner.debouncer.run(
            self.inner.id.clone(),
            move || inner.save(),
            self.inner.cfg.autosave_delay,
        );
    }

    /// Returns `true` while an autosave is waiting for its quiet period.
    pub fn has_pending_save(&self) -> bool {
        self.inner.debouncer.is_pending(&self.inner.id)
    }

    /// Drops any pending autosave and saves the current text right away.
    pub async fn save_now(&self) -> Result<(), ActionError> {
        self.inner.debouncer.cancel(&self.inner.id);
        Arc::clone(&self.inner).save().await
    }

    /// Deletes the note.
    ///
    /// A pending autosave is dropped first. On success a "Note deleted." flash is
    /// shown; a rejection is shown as a warning. The result is returned so the
    /// owning list can drop the editor.
    pub async fn delete(&self) -> Result<(), StoreError> {
        self.inner.debouncer.cancel(&self.inner.id);

        match self.inner.store.delete(&self.inner.id).await {
            Ok(()) => {
                self.inner.flash("Note deleted.".to_string(), Severity::Success);
                Ok(())
            }
            Err(e) => {
                self.inner.report("Could not delete note", &e);
                Err(e)
            }
        }
    }
}

impl fmt::Debug for NoteEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteEditor")
            .field("id", &self.inner.id)
            .field("status", &self.status())
            .field("cfg", &self.inner.cfg)
            .finish()
    }
}
