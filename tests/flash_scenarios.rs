//! End-to-end flash behavior through the bus.

use std::time::Duration;

use flashkit::{Bus, Event, FlashConfig, FlashMessage, FlashQueue, Severity, show_flash};
use pretty_assertions::assert_eq;
use tokio::time;

fn texts(q: &FlashQueue) -> Vec<String> {
    q.entries().into_iter().map(|e| e.message.text).collect()
}

#[tokio::test(start_paused = true)]
async fn dispatched_message_shows_then_expires() {
    let bus = Bus::new();
    let queue = FlashQueue::mount(FlashConfig::default(), &bus);

    bus.dispatch(Event::show_message(FlashMessage::new("Saved", Severity::Success)))
        .unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.entries()[0].severity(), Severity::Success);

    time::sleep(Duration::from_millis(4001)).await;
    assert_eq!(queue.len(), 0);
}

#[tokio::test(start_paused = true)]
async fn prepend_mode_renders_newest_first() {
    let bus = Bus::new();
    let queue = FlashQueue::mount(FlashConfig::from_millis(4000, true), &bus);

    show_flash(&bus, "A", Severity::Info).unwrap();
    show_flash(&bus, "B", Severity::Info).unwrap();
    assert_eq!(texts(&queue), vec!["B", "A"]);
}

#[tokio::test(start_paused = true)]
async fn show_without_mounted_queue_is_silent() {
    let bus = Bus::new();
    assert_eq!(show_flash(&bus, "nobody home", Severity::Dark), Ok(()));
}

#[tokio::test(start_paused = true)]
async fn render_snapshots_follow_every_change() {
    let bus = Bus::new();
    let queue = FlashQueue::mount(FlashConfig::from_millis(1000, false), &bus);
    let mut view = queue.watch();
    assert!(view.borrow().is_empty());

    show_flash(&bus, "one", Severity::Info).unwrap();
    view.changed().await.unwrap();
    assert_eq!(view.borrow_and_update().len(), 1);

    let id = queue.entries()[0].id;
    assert!(queue.dismiss(id));
    view.changed().await.unwrap();
    assert!(view.borrow_and_update().is_empty());
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_races_expiry_without_double_removal() {
    let bus = Bus::new();
    let queue = FlashQueue::mount(FlashConfig::from_millis(500, false), &bus);

    let keep = queue.show(FlashMessage::new("keep", Severity::Info)).unwrap();
    time::sleep(Duration::from_millis(100)).await;
    let gone = queue.show(FlashMessage::new("gone", Severity::Info)).unwrap();
    let tail = queue.show(FlashMessage::new("tail", Severity::Info)).unwrap();

    assert!(queue.dismiss(gone));
    time::sleep(Duration::from_millis(450)).await;
    // "keep" expired at 500ms; "gone" expiry (600ms) is still ahead.
    assert_eq!(texts(&queue), vec!["tail"]);

    time::sleep(Duration::from_millis(100)).await;
    assert!(queue.is_empty());
    assert!(!queue.dismiss(keep));
    assert!(!queue.dismiss(tail));
}
