//! End-to-end engine flows: debounced search driving the view.

use std::time::Duration;

use explorer_lib::{SortDirection, SortField, TableEngine, Topic};

fn sample() -> Vec<Topic> {
    vec![
        Topic::new(1, "Luxury Hotels", 50, "Mar 15, 2024"),
        Topic::new(2, "Beach Resorts", 75, "Mar 16, 2024"),
    ]
}

/// Drives the engine the way an event loop would: wait for the
/// debounce deadline, then commit.
async fn settle(engine: &mut TableEngine) {
    engine.debounce_elapsed().await;
    engine.commit_query();
}

#[tokio::test(start_paused = true)]
async fn search_settles_after_quiet_period() {
    let mut engine = TableEngine::with_records(sample());

    engine.set_query("Luxury");
    assert!(engine.is_pending());
    assert_eq!(engine.view().total_filtered, 2);

    settle(&mut engine).await;

    assert!(!engine.is_pending());
    let view = engine.view();
    assert_eq!(view.total_filtered, 1);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id, 1);
    assert_eq!(view.summary(), "Showing 1 to 1 of 1 results");
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_commit_once_with_final_value() {
    let mut engine = TableEngine::with_records(sample());

    // Keystrokes 300ms apart, all inside the 1000ms window.
    engine.set_query("B");
    tokio::time::advance(Duration::from_millis(300)).await;
    engine.set_query("Be");
    tokio::time::advance(Duration::from_millis(300)).await;
    engine.set_query("Beach");

    // 900ms after the last keystroke: still pending, nothing committed.
    tokio::time::advance(Duration::from_millis(900)).await;
    assert!(engine.is_pending());
    assert_eq!(engine.effective_query(), "");

    settle(&mut engine).await;

    // Only the final value took effect.
    assert_eq!(engine.effective_query(), "Beach");
    let view = engine.view();
    assert_eq!(view.total_filtered, 1);
    assert_eq!(view.rows[0].name, "Beach Resorts");
}

#[tokio::test(start_paused = true)]
async fn commit_resets_to_first_page() {
    let records: Vec<Topic> = (1..=30)
        .map(|id| Topic::new(id, format!("Topic {id:02}"), id, "Mar 15, 2024"))
        .collect();
    let mut engine = TableEngine::with_records(records);
    engine.go_to_page(3);

    engine.set_query("Topic 1");
    settle(&mut engine).await;

    // "Topic 1" matches topics 10 through 19.
    let view = engine.view();
    assert_eq!(view.total_filtered, 10);
    assert_eq!(view.page_index, 1);
    assert_eq!(view.total_pages, 1);
}

#[tokio::test(start_paused = true)]
async fn sort_and_page_size_survive_a_search_cycle() {
    let mut engine = TableEngine::with_records(sample());
    engine.set_sort(SortField::BrandsDiscovered);
    engine.set_sort(SortField::BrandsDiscovered);
    engine.set_page_size(20).unwrap();

    engine.set_query("resorts");
    settle(&mut engine).await;

    let view = engine.view();
    assert_eq!(view.sort_field, SortField::BrandsDiscovered);
    assert_eq!(view.sort_direction, SortDirection::Descending);
    assert_eq!(view.page_size, 20);
    assert_eq!(view.total_filtered, 1);
}

#[tokio::test(start_paused = true)]
async fn clearing_restores_the_full_collection() {
    let mut engine = TableEngine::with_records(sample());

    engine.set_query("Luxury");
    settle(&mut engine).await;
    assert_eq!(engine.view().total_filtered, 1);

    engine.clear_query();
    settle(&mut engine).await;
    assert_eq!(engine.view().total_filtered, 2);
    assert!(!engine.is_pending());
}
