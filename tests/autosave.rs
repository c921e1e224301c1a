//! Autosave editor wired to a real debouncer, bus and flash queue.

use std::sync::Arc;
use std::time::Duration;

use flashkit::{
    Bus, Debouncer, EditorConfig, FlashConfig, FlashQueue, MemoryStore, NoteEditor, SaveStatus,
    Severity, StoreError,
};
use pretty_assertions::assert_eq;
use tokio::time;

struct Page {
    bus: Bus,
    flash: FlashQueue,
    store: Arc<MemoryStore>,
    debouncer: Debouncer,
}

impl Page {
    fn new() -> Self {
        let bus = Bus::new();
        let flash = FlashQueue::mount(FlashConfig::from_millis(-1, false), &bus);
        let store = Arc::new(MemoryStore::new());
        let debouncer = Debouncer::with_bus(bus.clone());
        Self {
            bus,
            flash,
            store,
            debouncer,
        }
    }

    fn editor(&self, id: &str, text: &str) -> NoteEditor {
        self.store.insert(id, text);
        NoteEditor::new(
            id,
            text,
            self.store.clone(),
            self.debouncer.clone(),
            self.bus.clone(),
            EditorConfig::default(),
        )
    }

    fn flashes(&self) -> Vec<(String, Severity)> {
        self.flash
            .entries()
            .into_iter()
            .map(|e| (e.message.text, e.message.severity))
            .collect()
    }
}

#[tokio::test(start_paused = true)]
async fn typing_burst_saves_latest_text_once() {
    let page = Page::new();
    let editor = page.editor("n1", "");

    for text in ["h", "he", "hel", "hell", "hello"] {
        editor.on_change(text);
        time::sleep(Duration::from_millis(200)).await;
    }
    assert_eq!(page.store.get("n1").as_deref(), Some(""));
    assert!(editor.has_pending_save());

    time::sleep(Duration::from_millis(900)).await;
    assert_eq!(page.store.get("n1").as_deref(), Some("hello"));
    assert!(!editor.has_pending_save());
    assert!(page.flashes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn saving_indicator_clears_after_a_second() {
    let page = Page::new();
    let editor = page.editor("n1", "draft");

    editor.on_change("draft 2");
    assert_eq!(editor.status(), SaveStatus::Idle);

    time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(editor.status(), SaveStatus::Saving);
    assert_eq!(editor.status().label(), "Saving...");

    time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(editor.status(), SaveStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn editors_do_not_cancel_each_other() {
    let page = Page::new();
    let a = page.editor("a", "");
    let b = page.editor("b", "");

    a.on_change("alpha");
    b.on_change("beta");
    time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(page.store.get("a").as_deref(), Some("alpha"));
    assert_eq!(page.store.get("b").as_deref(), Some("beta"));
}

#[tokio::test(start_paused = true)]
async fn rejected_update_shows_warning() {
    let page = Page::new();
    let editor = page.editor("n1", "text");
    page.store.fail_with(Some(StoreError::Rejected {
        message: "note too long".into(),
    }));

    editor.on_change("way too much text");
    time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(
        page.flashes(),
        vec![(
            "Could not update note: note too long".to_string(),
            Severity::Warning
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn unavailable_store_is_logged_not_flashed() {
    let page = Page::new();
    let editor = page.editor("n1", "text");
    page.store.fail_with(Some(StoreError::Unavailable {
        error: "connection refused".into(),
    }));

    let err = editor.save_now().await.unwrap_err();
    assert_eq!(err.as_label(), "store_unavailable");
    assert!(page.flashes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn delete_reports_success_and_drops_pending_save() {
    let page = Page::new();
    let editor = page.editor("n1", "text");

    editor.on_change("edited");
    editor.delete().await.unwrap();
    assert!(!editor.has_pending_save());

    time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(page.store.get("n1"), None);
    assert_eq!(
        page.flashes(),
        vec![("Note deleted.".to_string(), Severity::Success)]
    );
}

#[tokio::test(start_paused = true)]
async fn delete_rejection_shows_warning_and_returns_error() {
    let page = Page::new();
    let editor = page.editor("n1", "text");
    page.store.fail_with(Some(StoreError::Rejected {
        message: "not allowed".into(),
    }));

    let err = editor.delete().await.unwrap_err();
    assert_eq!(err.as_label(), "store_rejected");
    assert_eq!(
        page.flashes(),
        vec![(
            "Could not delete note: not allowed".to_string(),
            Severity::Warning
        )]
    );
}
