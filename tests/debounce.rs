//! Debounce timing behavior, under tokio's paused clock.
//!
//! These tests drive the quiet period explicitly with `time::advance`; the
//! `settle` helper yields so spawned recompute tasks get polled between
//! steps.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::{advance, timeout};

use siftlist::prelude::*;

const QUIET: Duration = Duration::from_millis(1000);

/// Let spawned tasks run on the current-thread test runtime.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn fruits() -> Vec<Item> {
    vec![Item::new("1", "Apple"), Item::new("2", "Banana")]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test(start_paused = true)]
async fn test_rapid_edits_produce_one_recompute_with_final_value() {
    let list = SearchList::with_items(fruits());

    list.insert_char('a');
    settle().await;
    advance(Duration::from_millis(300)).await;

    list.insert_char('n');
    settle().await;

    // 999ms after the last keystroke: nothing has fired yet
    advance(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(list.filter_generation(), 0);
    assert_eq!(list.filtered_indices(), vec![0, 1]);

    // Quiet period elapses: exactly one recompute, with "an" only
    advance(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(list.filter_generation(), 1);
    assert_eq!(list.filtered_indices(), vec![1]);
    assert_eq!(list.filtered_items(), vec![Item::new("2", "Banana")]);
}

#[tokio::test(start_paused = true)]
async fn test_set_value_is_debounced() {
    let list = SearchList::with_items(fruits());

    list.set_value("banana");
    settle().await;
    assert_eq!(list.value(), "banana");
    assert!(list.refilter_pending());
    assert_eq!(list.filtered_count(), 2);

    advance(QUIET).await;
    settle().await;
    assert_eq!(list.filtered_indices(), vec![1]);
    assert!(!list.refilter_pending());
}

#[tokio::test(start_paused = true)]
async fn test_clear_goes_through_debounce() {
    let list = SearchList::with_items(fruits());
    list.set_value("an");
    settle().await;
    advance(QUIET).await;
    settle().await;
    assert_eq!(list.filtered_indices(), vec![1]);

    // Clearing resets the text at once but the view only after the quiet
    // period, matching normal typing semantics
    list.clear_search();
    settle().await;
    assert_eq!(list.value(), "");
    assert_eq!(list.filtered_indices(), vec![1]);

    advance(QUIET).await;
    settle().await;
    assert_eq!(list.filtered_indices(), vec![0, 1]);
}

#[tokio::test(start_paused = true)]
async fn test_selection_is_independent_of_pending_refilter() {
    let list = SearchList::with_items(fruits());

    list.insert_char('a');
    settle().await;

    // Toggle while the recompute is pending: applies immediately
    assert!(list.toggle("1"));
    assert!(list.is_selected("1"));

    advance(QUIET).await;
    settle().await;
    // Both Apple and Banana contain "a"; selection untouched by the fire
    assert_eq!(list.filtered_indices(), vec![0, 1]);
    assert!(list.is_selected("1"));
}

#[tokio::test(start_paused = true)]
async fn test_pending_refilter_applies_to_new_snapshot() {
    let list = SearchList::with_items(fruits());
    list.set_value("an");
    settle().await;

    // Snapshot swap resets the view synchronously; the pending recompute
    // still fires and applies the current term to the current store
    list.set_items(vec![Item::new("3", "Cherry"), Item::new("4", "Nectarine")]);
    assert_eq!(list.filtered_count(), 2);

    advance(QUIET).await;
    settle().await;
    assert_eq!(list.filtered_items(), vec![Item::new("4", "Nectarine")]);
}

#[tokio::test(start_paused = true)]
async fn test_debouncer_reschedule_discards_superseded_task() {
    let debouncer = Debouncer::new(QUIET);
    let fired = Arc::new(AtomicUsize::new(0));

    for _ in 0..5 {
        let fired = Arc::clone(&fired);
        debouncer.schedule(async move {
            fired.fetch_add(1, Ordering::SeqCst);
        });
        settle().await;
        advance(Duration::from_millis(200)).await;
    }

    advance(QUIET).await;
    settle().await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_debouncer_drop_cancels_pending_task() {
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let debouncer = Debouncer::new(QUIET);
        let fired = Arc::clone(&fired);
        debouncer.schedule(async move {
            fired.fetch_add(1, Ordering::SeqCst);
        });
        settle().await;
        assert!(debouncer.is_pending());
    }

    // The owner is gone; the task must never fire
    advance(QUIET + QUIET).await;
    settle().await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_list_cancels_pending_refilter() {
    let list = SearchList::with_items(fruits());
    let clone = list.clone();
    let wakeup = list.wakeup_handle();

    list.insert_char('a');
    settle().await;
    assert!(list.refilter_pending());
    // Consume the wakeup raised by the edit itself
    wakeup.awoken().await;

    // Clones share the timer; one survivor keeps it armed
    drop(list);
    assert!(clone.refilter_pending());

    // Last clone gone: the pending recompute is aborted and never fires,
    // so no wakeup arrives even well past the quiet period
    drop(clone);
    advance(QUIET + QUIET).await;
    settle().await;
    let fired = timeout(Duration::from_secs(5), wakeup.awoken()).await;
    assert!(fired.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_search_select_clear_scenario() {
    // data = [Apple, Banana]; type "an"; only Banana remains; select it;
    // clear; both return and Banana still shows "Selected"
    let list = SearchList::with_items(fruits());

    let (result, _) = list.handle_key(&key(KeyCode::Char('a')));
    assert!(result.is_handled());
    list.handle_key(&key(KeyCode::Char('n')));
    settle().await;
    advance(QUIET).await;
    settle().await;

    let rows = list.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "2");
    assert_eq!(rows[0].name, "Banana");

    // Move onto the row and toggle it
    list.handle_key(&key(KeyCode::Down));
    let (_, events) = list.handle_key(&key(KeyCode::Enter));
    let change = events.selection_change.expect("selection change");
    assert_eq!(change.id, "2");
    assert!(change.selected);
    assert_eq!(list.rows()[0].status_label(), "Selected");

    // Clear: full view comes back after the quiet period, selection intact
    list.handle_key(&key(KeyCode::Esc));
    assert_eq!(list.value(), "");
    settle().await;
    advance(QUIET).await;
    settle().await;

    let rows = list.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].status_label(), "Not selected");
    assert_eq!(rows[1].id, "2");
    assert_eq!(rows[1].status_label(), "Selected");
}

#[tokio::test(start_paused = true)]
async fn test_absent_name_matches_only_empty_term() {
    let list = SearchList::with_items(vec![Item::new("1", "Apple"), Item::unnamed("2")]);
    assert_eq!(list.filtered_count(), 2);

    list.set_value("a");
    settle().await;
    advance(QUIET).await;
    settle().await;
    assert_eq!(list.filtered_indices(), vec![0]);

    list.set_value("");
    settle().await;
    advance(QUIET).await;
    settle().await;
    assert_eq!(list.filtered_indices(), vec![0, 1]);
}
