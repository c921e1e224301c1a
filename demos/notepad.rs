//! # Example: notepad
//!
//! Simulates a notes page: a flash area, two note editors sharing a debouncer,
//! a burst of keystrokes, a rejected save and a delete.
//!
//! Shows how to:
//! - Mount a [`FlashQueue`] on a [`Bus`] and render its snapshots.
//! - Drive [`NoteEditor::on_change`] and let the [`Debouncer`] collapse the burst.
//! - Observe action failures with the built-in [`LogWriter`].
//!
//! ## Run
//! ```bash
//! cargo run --example notepad --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use flashkit::{
    Bus, Config, Debouncer, Event, FlashQueue, LogWriter, MemoryStore, NoteEditor, StoreError,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = Config::default();
    let bus = Bus::new();
    bus.subscribe(Event::ACTION_FAILED, Arc::new(LogWriter::new()));

    let flash = FlashQueue::mount(cfg.flash, &bus);
    let mut view = flash.watch();
    tokio::spawn(async move {
        while view.changed().await.is_ok() {
            let list = view.borrow_and_update().clone();
            println!("── flash area ({} shown)", list.len());
            for entry in list.iter() {
                println!("   [{}] {}", entry.severity().css_class(), entry.text());
            }
        }
    });

    let store = Arc::new(MemoryStore::new());
    store.insert("groceries", "");
    store.insert("todo", "call mom");

    let debouncer = Debouncer::with_bus(bus.clone());
    let groceries = NoteEditor::new(
        "groceries",
        "",
        store.clone(),
        debouncer.clone(),
        bus.clone(),
        cfg.editor,
    );
    let todo = NoteEditor::new(
        "todo",
        "call mom",
        store.clone(),
        debouncer.clone(),
        bus.clone(),
        cfg.editor,
    );

    for text in ["m", "mi", "mil", "milk"] {
        groceries.on_change(text);
        tokio::time::sleep(Duration::from_millis(150)).await;
    }
    tokio::time::sleep(Duration::from_millis(1200)).await;
    println!("groceries saved as {:?}", store.get("groceries"));

    store.fail_with(Some(StoreError::Rejected {
        message: "note is locked".into(),
    }));
    todo.on_change("call mom tonight");
    tokio::time::sleep(Duration::from_millis(1200)).await;
    store.fail_with(None);

    todo.delete().await?;
    tokio::time::sleep(Duration::from_millis(cfg.flash.timeout.as_millis() as u64 + 100)).await;

    debouncer.shutdown();
    flash.unmount();
    Ok(())
}
