//! Topic explorer terminal UI.
//!
//! Presentation glue around [`explorer_lib::TableEngine`]: generates
//! the mock topic collection, maps key events to engine operations, and
//! redraws the table after every state change.

mod mock;
mod ui;

use std::fs::File;
use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::warn;
use simplelog::{Config, LevelFilter, WriteLogger};

use explorer_lib::{PAGE_SIZE_OPTIONS, SortField, TableEngine};

const TOPIC_COUNT: usize = 500;
const FILTER_OPTIONS: [&str; 3] = ["All Brands", "All Topics", "All Prompts"];

#[tokio::main]
async fn main() {
    if let Ok(log_file) = File::create("explorer-tui.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
    }
}

async fn run() -> io::Result<()> {
    let _guard = ui::TerminalGuard::new()?;

    let mut engine = TableEngine::with_records(mock::generate_topics(TOPIC_COUNT));
    let mut active_filter = 0usize;
    let mut events = EventStream::new();

    loop {
        ui::draw(&engine.view(), engine.raw_query(), FILTER_OPTIONS[active_filter])?;

        tokio::select! {
            // The search quiet period elapsed: apply the typed query.
            _ = engine.debounce_elapsed() => engine.commit_query(),

            event = events.next() => match event {
                Some(event) => match event? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if key.code == KeyCode::Char('q')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            return Ok(());
                        }
                        handle_key(&mut engine, &mut active_filter, key.code);
                    }
                    // Resize redraws on the next loop iteration.
                    _ => {}
                },
                // Event stream exhausted: the terminal is gone, shut down.
                None => return Ok(()),
            },
        }
    }
}

fn handle_key(engine: &mut TableEngine, active_filter: &mut usize, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            let mut query = engine.raw_query().to_string();
            query.push(c);
            engine.set_query(query);
        }
        KeyCode::Backspace => {
            let mut query = engine.raw_query().to_string();
            query.pop();
            engine.set_query(query);
        }
        KeyCode::Esc => engine.clear_query(),
        KeyCode::F(1) => engine.set_sort(SortField::Name),
        KeyCode::F(2) => engine.set_sort(SortField::BrandsDiscovered),
        KeyCode::F(3) => engine.set_sort(SortField::LastUpdated),
        KeyCode::F(4) => *active_filter = (*active_filter + 1) % FILTER_OPTIONS.len(),
        KeyCode::F(5) => {
            if let Err(err) = engine.set_page_size(next_page_size(engine.page_size())) {
                warn!("page size rejected: {err}");
            }
        }
        KeyCode::Left => engine.prev_page(),
        KeyCode::Right => engine.next_page(),
        KeyCode::Home => engine.first_page(),
        KeyCode::End => engine.last_page(),
        _ => {}
    }
}

/// Next page-size option after `current`, wrapping at the end.
fn next_page_size(current: usize) -> usize {
    let position = PAGE_SIZE_OPTIONS.iter().position(|&s| s == current);
    match position {
        Some(i) => PAGE_SIZE_OPTIONS[(i + 1) % PAGE_SIZE_OPTIONS.len()],
        None => PAGE_SIZE_OPTIONS[0],
    }
}
