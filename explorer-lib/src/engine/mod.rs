//! Tabular data engine.
//!
//! [`TableEngine`] owns the view state for one mounted table: the raw
//! and debounced query, sort field and direction, and the page window.
//! It treats each supplied record collection as a full snapshot and
//! derives the visible slice by pure recomputation on every
//! [`TableEngine::view`] call, so there is no cached state to go stale.

mod debounce;
mod filter;
mod page;
mod sort;

pub use filter::filter_topics;
pub use page::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, clamp_page, paginate, total_pages};
pub use sort::{SortDirection, SortField, parse_updated_label, sort_topics};

use std::time::Duration;

use log::{debug, trace};

use crate::error::EngineError;
use crate::model::Topic;

use debounce::Debouncer;
use page::page_window;

/// Quiet period between the last keystroke and the query taking effect.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);

/// The table engine: searched, sorted, paginated views over an
/// in-memory topic collection.
///
/// The engine is single-threaded and owned by one caller, typically the
/// presentation event loop. All operations are synchronous except the
/// debounce deadline, which is exposed as the awaitable
/// [`TableEngine::debounce_elapsed`]; the caller selects on it and
/// calls [`TableEngine::commit_query`] when it resolves:
///
/// ```ignore
/// tokio::select! {
///     _ = engine.debounce_elapsed() => engine.commit_query(),
///     Some(event) = events.next() => handle(&mut engine, event?),
/// }
/// ```
///
/// Dropping the engine drops the deadline, so no commit can run after
/// the owning view is gone.
#[derive(Debug)]
pub struct TableEngine {
    records: Vec<Topic>,
    raw_query: String,
    effective_query: String,
    sort_field: SortField,
    sort_direction: SortDirection,
    page_index: usize,
    page_size: usize,
    debounce: Debouncer,
}

/// One computed view over the engine's collection: the visible rows
/// plus the counts the presentation layer needs for the summary line,
/// sort indicators, and pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Rows visible on the current page, filtered and sorted.
    pub rows: Vec<Topic>,
    /// Number of records matching the effective query.
    pub total_filtered: usize,
    /// Number of pages, at least 1 even when nothing matches.
    pub total_pages: usize,
    /// 1-based index of the first visible row, 1 when the page is empty.
    pub window_start: usize,
    /// 1-based index of the last visible row, 0 when the page is empty.
    pub window_end: usize,
    /// Current page, clamped into `[1, total_pages]`.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Current sort field.
    pub sort_field: SortField,
    /// Current sort direction.
    pub sort_direction: SortDirection,
    /// True while a debounce window is open on a changed query.
    pub is_pending: bool,
}

impl TableView {
    /// The result-summary line shown under the table.
    pub fn summary(&self) -> String {
        if self.is_pending {
            "Loading results...".to_string()
        } else {
            format!(
                "Showing {} to {} of {} results",
                self.window_start, self.window_end, self.total_filtered
            )
        }
    }
}

impl TableEngine {
    /// Creates an engine over an empty collection with default state:
    /// no query, sorted by name ascending, page 1 of 10 rows.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            raw_query: String::new(),
            effective_query: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
            debounce: Debouncer::new(DEBOUNCE_DELAY),
        }
    }

    /// Creates an engine over an initial record snapshot.
    pub fn with_records(records: Vec<Topic>) -> Self {
        let mut engine = Self::new();
        engine.set_records(records);
        engine
    }

    /// Overrides the debounce quiet period (default 1000 ms).
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce = Debouncer::new(delay);
        self
    }

    // =========================================================================
    // Input boundary
    // =========================================================================

    /// Replaces the record collection with a full snapshot.
    ///
    /// Re-clamps the page index, since the new collection may have
    /// fewer pages than the current position.
    pub fn set_records(&mut self, records: Vec<Topic>) {
        debug!("record snapshot replaced: {} records", records.len());
        self.records = records;
        self.clamp_page_index();
    }

    /// Updates the raw query and (re-)arms the debounce window.
    ///
    /// The raw query is visible immediately through
    /// [`TableEngine::raw_query`] for echoing the input box; filtering
    /// only picks it up when the window elapses and
    /// [`TableEngine::commit_query`] runs.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.raw_query {
            return;
        }
        trace!("raw query: {text:?}");
        self.raw_query = text;
        self.debounce.arm();
    }

    /// Clears the query and resets to the first page.
    pub fn clear_query(&mut self) {
        self.set_query("");
        self.page_index = 1;
    }

    /// Commits the debounced query: `effective_query := raw_query`,
    /// clears the deadline, and resets to page 1 if the effective query
    /// changed.
    ///
    /// Call this when [`TableEngine::debounce_elapsed`] resolves.
    pub fn commit_query(&mut self) {
        self.debounce.disarm();
        if self.effective_query == self.raw_query {
            return;
        }
        debug!("query settled: {:?}", self.raw_query);
        self.effective_query = self.raw_query.clone();
        self.page_index = 1;
    }

    /// Resolves once the debounce quiet period has elapsed; pends
    /// forever while no window is open.
    pub async fn debounce_elapsed(&self) {
        self.debounce.elapsed().await
    }

    /// Sorts by `field`, toggling direction when the field is already
    /// active and resetting to ascending otherwise. The page index is
    /// left untouched.
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Sets the rows-per-page and resets to the first page.
    ///
    /// The size must be one of [`PAGE_SIZE_OPTIONS`]; anything else is
    /// rejected with the state unchanged.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), EngineError> {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return Err(EngineError::InvalidPageSize(size));
        }
        self.page_size = size;
        self.page_index = 1;
        Ok(())
    }

    /// Moves to page `n`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, n: usize) {
        self.page_index = clamp_page(n, self.total_pages());
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    /// Moves to the previous page, staying on page 1 at the start.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.page_index.saturating_sub(1));
    }

    /// Moves to the next page, staying on the last page at the end.
    pub fn next_page(&mut self) {
        self.go_to_page(self.page_index + 1);
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) {
        self.go_to_page(usize::MAX);
    }

    // =========================================================================
    // Output boundary
    // =========================================================================

    /// Computes the current view: filter, sort, paginate.
    pub fn view(&self) -> TableView {
        let filtered = filter_topics(&self.records, &self.effective_query);
        let sorted = sort_topics(filtered, self.sort_field, self.sort_direction);

        let total_filtered = sorted.len();
        let total_pages = total_pages(total_filtered, self.page_size);
        let page_index = clamp_page(self.page_index, total_pages);

        let window = page_window(total_filtered, page_index, self.page_size);
        let window_start = window.start + 1;
        let window_end = window.end;
        let rows = sorted[window].to_vec();

        TableView {
            rows,
            total_filtered,
            total_pages,
            window_start,
            window_end,
            page_index,
            page_size: self.page_size,
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
            is_pending: self.is_pending(),
        }
    }

    /// True while a debounce window is open on a changed query, i.e.
    /// the raw query has not yet taken effect.
    pub fn is_pending(&self) -> bool {
        self.raw_query != self.effective_query
    }

    /// The literal, unfiltered query as typed.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// The debounced query currently applied to filtering.
    pub fn effective_query(&self) -> &str {
        &self.effective_query
    }

    /// Current sort field.
    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    /// Current sort direction.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Current 1-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Current rows-per-page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The full record snapshot.
    pub fn records(&self) -> &[Topic] {
        &self.records
    }

    fn total_pages(&self) -> usize {
        let filtered = filter_topics(&self.records, &self.effective_query);
        total_pages(filtered.len(), self.page_size)
    }

    fn clamp_page_index(&mut self) {
        self.page_index = clamp_page(self.page_index, self.total_pages());
    }
}

impl Default for TableEngine {
    fn default() -> Self {
        Self::new()
    }
}
