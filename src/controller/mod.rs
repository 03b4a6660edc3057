//! The list-view data controller.
//!
//! Every list screen (candidates, interviews, job openings, job requests,
//! referrals, users) is an instantiation of [`ListController`] with an
//! entity-specific [`ListConfig`]. The controller decides whether visible
//! rows come from the backend's current page or from a client-side slice of
//! the filtered snapshot, and keeps that decision consistent with debounced
//! search and asynchronously arriving data.
//!
//! Fetches are two-phase: `begin_*` hands out a [`FetchTicket`] carrying a
//! generation number, and `apply_*` only accepts the response if its ticket
//! is still current. A superseded response is dropped instead of clobbering
//! newer state.

pub mod debounce;
pub mod facet;
pub mod predicate;
pub mod snapshot;
pub mod window;

use jiff::Timestamp;

use crate::error::{HiretrackError, Result};
use crate::remote::{PageRequest, PageResponse, RecordSource};
use crate::types::{EntityKind, FacetOption, Id};

pub use debounce::{SEARCH_DEBOUNCE, SearchDebouncer};
pub use facet::{SortPolicy, derive_options};
pub use predicate::{ActiveFilterSet, DateRange, record_matches};
pub use snapshot::SnapshotCache;
pub use window::{DisplayMode, PageWindow, slice_window};

/// One filterable field of a list screen.
pub struct FacetConfig<R> {
    /// Key used in the filter panel, CLI flags, and persisted filter state.
    pub key: &'static str,
    /// Option list ordering for this field.
    pub sort: SortPolicy,
    /// Pulls the field's option out of a record; `None` when the record has
    /// no value for it.
    pub extract: fn(&R) -> Option<FacetOption>,
}

/// Per-entity controller configuration.
pub struct ListConfig<R> {
    pub entity: EntityKind,
    pub facets: Vec<FacetConfig<R>>,
    /// Fields covered by free-text search.
    pub search_fields: fn(&R) -> Vec<String>,
    /// Timestamp used by the date-range predicate, for entities that have
    /// one.
    pub timestamp: Option<fn(&R) -> Option<Timestamp>>,
    /// Whether a non-empty search term alone moves the screen into
    /// client-filtered mode.
    pub search_engages_filtering: bool,
    /// Whether entering client-filtered mode keeps the current page window
    /// instead of resetting to the first page.
    pub preserve_window_on_filter: bool,
    /// Whether the filter set survives leaving and re-entering the screen
    /// within one session.
    pub session_persistence: bool,
}

/// Handle for one in-flight fetch. A response is applied only while its
/// ticket is still the newest for its stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub request: PageRequest,
}

/// What happened to a fetch response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Response accepted and state updated.
    Applied,
    /// A newer request superseded this ticket; response dropped.
    Stale,
    /// The fetch failed; state was cleared and the message should surface as
    /// a notice.
    Failed(String),
}

/// Where a fired search goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDispatch {
    /// Server-paged mode: issue the search request carried by the ticket.
    Server(FetchTicket),
    /// Client-filtered mode: the predicate re-runs locally, nothing to fetch.
    Local,
}

pub struct ListController<R> {
    config: ListConfig<R>,
    window: PageWindow,
    filters: ActiveFilterSet,
    page: Vec<R>,
    server_total: u64,
    snapshot: SnapshotCache<R>,
    debouncer: SearchDebouncer,
    page_generation: u64,
    snapshot_generation: u64,
}

impl<R: Clone> ListController<R> {
    pub fn new(config: ListConfig<R>, page_size: usize) -> Self {
        Self {
            config,
            window: PageWindow::new(page_size),
            filters: ActiveFilterSet::new(),
            page: Vec::new(),
            server_total: 0,
            snapshot: SnapshotCache::new(),
            debouncer: SearchDebouncer::default(),
            page_generation: 0,
            snapshot_generation: 0,
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.config.entity
    }

    pub fn config(&self) -> &ListConfig<R> {
        &self.config
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn filters(&self) -> &ActiveFilterSet {
        &self.filters
    }

    pub fn server_total(&self) -> u64 {
        self.server_total
    }

    pub fn search_input(&self) -> &str {
        self.debouncer.input()
    }

    /// Restore a persisted filter set, e.g. when returning to a list from a
    /// detail view. Seeds the search box without firing a search.
    pub fn restore_filters(&mut self, filters: ActiveFilterSet) {
        self.debouncer
            .seed(filters.search.as_deref().unwrap_or_default());
        self.filters = filters;
    }

    fn client_filtered(&self) -> bool {
        self.filters.any_filter_active()
            || (self.config.search_engages_filtering && self.filters.search_term().is_some())
    }

    pub fn mode(&self) -> DisplayMode {
        if self.client_filtered() {
            DisplayMode::ClientFiltered
        } else {
            DisplayMode::ServerPaged
        }
    }

    // ------------------------------------------------------------------
    // Paged fetches
    // ------------------------------------------------------------------

    /// Start a fetch of the current window. Supersedes any page fetch still
    /// in flight.
    pub fn begin_page_fetch(&mut self) -> FetchTicket {
        self.page_generation += 1;
        let mut request = self.window.to_request();
        if let Some(term) = self.filters.search_term()
            && self.mode() == DisplayMode::ServerPaged
        {
            request = request.with_search(term);
        }
        FetchTicket {
            generation: self.page_generation,
            request,
        }
    }

    /// Apply a page response. Failure degrades to an empty page with a zero
    /// count; the screen stays interactive.
    pub fn apply_page(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PageResponse<R>>,
    ) -> ApplyOutcome {
        if ticket.generation != self.page_generation {
            tracing::debug!(
                entity = %self.config.entity,
                ticket = ticket.generation,
                current = self.page_generation,
                "dropping superseded page response"
            );
            return ApplyOutcome::Stale;
        }
        match outcome {
            Ok(response) => {
                self.server_total = response.total_count;
                self.snapshot
                    .observe(response.data.clone(), response.total_count);
                self.page = response.data;
                ApplyOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(entity = %self.config.entity, error = %e, "page fetch failed");
                self.page.clear();
                self.server_total = 0;
                ApplyOutcome::Failed(format!("failed to load {}: {}", self.config.entity, e))
            }
        }
    }

    /// Fetch the current window and apply the response.
    pub async fn refresh(&mut self, source: &dyn RecordSource<R>) -> ApplyOutcome {
        let ticket = self.begin_page_fetch();
        let outcome = source.fetch_page(&ticket.request).await;
        self.apply_page(&ticket, outcome)
    }

    // ------------------------------------------------------------------
    // Snapshot fetches
    // ------------------------------------------------------------------

    /// Whether opening the filter panel should trigger a full-snapshot
    /// fetch: nothing fetched for this filter session yet, and the known
    /// record count exceeds one page.
    pub fn snapshot_wanted(&self) -> bool {
        !self.snapshot.fetched() && self.server_total > self.window.page_size as u64
    }

    /// Start a fetch-everything request (`page_size = total_count`) if one
    /// is wanted. Marks the snapshot fetched so the request is idempotent
    /// per filter-panel-open.
    pub fn begin_snapshot_fetch(&mut self) -> Option<FetchTicket> {
        if !self.snapshot_wanted() {
            return None;
        }
        self.snapshot.mark_fetched();
        self.snapshot_generation += 1;
        Some(FetchTicket {
            generation: self.snapshot_generation,
            request: PageRequest::new(1, self.server_total as u32),
        })
    }

    /// Apply a full-snapshot response, subject to the replace policy and
    /// generation check.
    pub fn apply_snapshot(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PageResponse<R>>,
    ) -> ApplyOutcome {
        if ticket.generation != self.snapshot_generation {
            tracing::debug!(
                entity = %self.config.entity,
                ticket = ticket.generation,
                current = self.snapshot_generation,
                "dropping superseded snapshot response"
            );
            return ApplyOutcome::Stale;
        }
        match outcome {
            Ok(response) => {
                self.snapshot.observe(response.data, response.total_count);
                ApplyOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(entity = %self.config.entity, error = %e, "snapshot fetch failed");
                ApplyOutcome::Failed(format!(
                    "failed to load filter options for {}: {}",
                    self.config.entity, e
                ))
            }
        }
    }

    /// Fetch the full snapshot if wanted and apply it.
    pub async fn ensure_snapshot(&mut self, source: &dyn RecordSource<R>) -> Option<ApplyOutcome> {
        let ticket = self.begin_snapshot_fetch()?;
        let outcome = source.fetch_page(&ticket.request).await;
        Some(self.apply_snapshot(&ticket, outcome))
    }

    /// Upstream data changed (create/update/delete): the snapshot is stale
    /// and will be refetched lazily on the next filter-panel open.
    pub fn observe_mutation(&mut self) {
        self.snapshot.invalidate();
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    fn after_filter_change(&mut self, was_filtered: bool) {
        let is_filtered = self.client_filtered();
        if !was_filtered && is_filtered && !self.config.preserve_window_on_filter {
            self.window.reset();
        }
    }

    /// Toggle one option in a facet's selection.
    pub fn toggle_facet(&mut self, key: &str, id: Id) -> Result<()> {
        if !self.config.facets.iter().any(|f| f.key == key) {
            return Err(HiretrackError::UnknownFacet(
                key.to_string(),
                self.config.entity.to_string(),
            ));
        }
        let was = self.client_filtered();
        self.filters.toggle(key, id);
        self.after_filter_change(was);
        Ok(())
    }

    /// Replace a facet's selection wholesale.
    pub fn set_facet_selection(
        &mut self,
        key: &str,
        ids: impl IntoIterator<Item = Id>,
    ) -> Result<()> {
        if !self.config.facets.iter().any(|f| f.key == key) {
            return Err(HiretrackError::UnknownFacet(
                key.to_string(),
                self.config.entity.to_string(),
            ));
        }
        let was = self.client_filtered();
        self.filters.set_selection(key, ids);
        self.after_filter_change(was);
        Ok(())
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        let was = self.client_filtered();
        self.filters.date_range = range;
        self.after_filter_change(was);
    }

    /// Clear all facet selections and date bounds, reset to the first page,
    /// and allow the snapshot to be refetched on the next panel open.
    pub fn reset_filters(&mut self) {
        self.filters.clear_filters();
        self.snapshot.invalidate();
        self.window.reset();
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Record a keystroke in the search box.
    pub fn note_search_input(&mut self, text: &str, now: std::time::Instant) {
        self.debouncer.note_input(text, now);
    }

    /// Fire the debounced search if its delay has elapsed. Resets to the
    /// first page and either hands back a server search ticket or signals a
    /// local re-filter, depending on the display mode after the term lands.
    pub fn poll_search(&mut self, now: std::time::Instant) -> Option<SearchDispatch> {
        let term = self.debouncer.poll(now)?;
        self.window.reset();
        self.filters.search = if term.is_empty() { None } else { Some(term) };
        if self.client_filtered() {
            Some(SearchDispatch::Local)
        } else {
            Some(SearchDispatch::Server(self.begin_page_fetch()))
        }
    }

    // ------------------------------------------------------------------
    // Window changes
    // ------------------------------------------------------------------

    /// Move to a different first row. Server-paged mode needs a new fetch;
    /// client-filtered mode re-slices locally.
    pub fn set_first_index(&mut self, first_index: usize) -> Option<FetchTicket> {
        self.window.first_index = first_index;
        match self.mode() {
            DisplayMode::ServerPaged => Some(self.begin_page_fetch()),
            DisplayMode::ClientFiltered => None,
        }
    }

    /// Change rows-per-page. Same fetch rule as [`Self::set_first_index`].
    pub fn set_page_size(&mut self, page_size: usize) -> Option<FetchTicket> {
        if page_size == 0 {
            return None;
        }
        self.window.page_size = page_size;
        match self.mode() {
            DisplayMode::ServerPaged => Some(self.begin_page_fetch()),
            DisplayMode::ClientFiltered => None,
        }
    }

    // ------------------------------------------------------------------
    // Derived output
    // ------------------------------------------------------------------

    /// Snapshot records passing the active filters, in snapshot order.
    pub fn filtered_snapshot(&self) -> Vec<&R> {
        self.snapshot
            .records()
            .iter()
            .filter(|record| record_matches(*record, &self.filters, &self.config))
            .collect()
    }

    /// The rows the screen should display for the current window.
    pub fn visible_rows(&self) -> Vec<&R> {
        match self.mode() {
            DisplayMode::ServerPaged => self.page.iter().collect(),
            DisplayMode::ClientFiltered => {
                let filtered = self.filtered_snapshot();
                slice_window(&filtered, &self.window).to_vec()
            }
        }
    }

    /// The record count the paginator should report.
    pub fn effective_total(&self) -> u64 {
        match self.mode() {
            DisplayMode::ServerPaged => self.server_total,
            DisplayMode::ClientFiltered => self.filtered_snapshot().len() as u64,
        }
    }

    /// Derived option list for one facet, from the snapshot as currently
    /// known (possibly partial; recomputed when the full snapshot arrives).
    pub fn facet_options(&self, key: &str) -> Result<Vec<FacetOption>> {
        let facet = self
            .config
            .facets
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| {
                HiretrackError::UnknownFacet(key.to_string(), self.config.entity.to_string())
            })?;
        Ok(derive_options(
            self.snapshot.records(),
            facet.extract,
            facet.sort,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HiretrackError;
    use crate::types::{Id, OptionValue};
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
        status: Option<OptionValue>,
    }

    fn row(id: i64, name: &str, status: i64) -> Row {
        Row {
            id,
            name: name.to_string(),
            status: Some(OptionValue::new(status, format!("Status {status}"))),
        }
    }

    fn test_config() -> ListConfig<Row> {
        ListConfig {
            entity: EntityKind::Candidates,
            facets: vec![FacetConfig {
                key: "status",
                sort: SortPolicy::Traversal,
                extract: |r| r.status.as_ref().map(crate::types::FacetOption::from),
            }],
            search_fields: |r| vec![r.name.clone()],
            timestamp: None,
            search_engages_filtering: true,
            preserve_window_on_filter: false,
            session_persistence: false,
        }
    }

    fn preserve_config() -> ListConfig<Row> {
        ListConfig {
            preserve_window_on_filter: true,
            ..test_config()
        }
    }

    fn page(rows: Vec<Row>, total: u64) -> Result<PageResponse<Row>> {
        Ok(PageResponse {
            data: rows,
            total_count: total,
        })
    }

    fn controller_with_page(rows: Vec<Row>, total: u64) -> ListController<Row> {
        let mut controller = ListController::new(test_config(), 10);
        let ticket = controller.begin_page_fetch();
        controller.apply_page(&ticket, page(rows, total));
        controller
    }

    /// Snapshot with 25 records whose first five statuses are 1,1,2,2,3 and
    /// the rest 4.
    fn seeded_snapshot_controller() -> ListController<Row> {
        let mut rows: Vec<Row> = vec![
            row(1, "a", 1),
            row(2, "b", 1),
            row(3, "c", 2),
            row(4, "d", 2),
            row(5, "e", 3),
        ];
        rows.extend((6..=25).map(|i| row(i, "x", 4)));

        let mut controller = controller_with_page(rows[..10].to_vec(), 25);
        let ticket = controller.begin_snapshot_fetch().unwrap();
        controller.apply_snapshot(&ticket, page(rows, 25));
        controller
    }

    #[test]
    fn test_server_paged_shows_server_page() {
        let rows = vec![row(1, "a", 1), row(2, "b", 2)];
        let controller = controller_with_page(rows.clone(), 40);
        assert_eq!(controller.mode(), DisplayMode::ServerPaged);
        assert_eq!(controller.visible_rows().len(), 2);
        assert_eq!(controller.effective_total(), 40);
    }

    #[test]
    fn test_fetch_failure_degrades_to_empty() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 40);
        let ticket = controller.begin_page_fetch();
        let outcome = controller.apply_page(&ticket, Err(HiretrackError::Api("boom".to_string())));
        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert!(controller.visible_rows().is_empty());
        assert_eq!(controller.effective_total(), 0);
    }

    #[test]
    fn test_stale_page_response_dropped() {
        let mut controller = ListController::new(test_config(), 10);
        let old_ticket = controller.begin_page_fetch();
        let new_ticket = controller.begin_page_fetch();

        controller.apply_page(&new_ticket, page(vec![row(1, "new", 1)], 1));
        let outcome = controller.apply_page(&old_ticket, page(vec![row(9, "old", 9)], 1));

        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(controller.visible_rows()[0].name, "new");
    }

    #[test]
    fn test_stale_snapshot_response_dropped() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 40);
        let old_ticket = controller.begin_snapshot_fetch().unwrap();
        controller.snapshot.invalidate();
        let new_ticket = controller.begin_snapshot_fetch().unwrap();

        controller.apply_snapshot(&new_ticket, page(vec![row(2, "current", 2)], 1));
        let outcome = controller.apply_snapshot(&old_ticket, page(vec![row(3, "stale", 3)], 1));

        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(controller.filtered_snapshot().len(), 1);
        assert_eq!(controller.filtered_snapshot()[0].name, "current");
    }

    #[test]
    fn test_snapshot_wanted_only_past_one_page() {
        let small = controller_with_page(vec![row(1, "a", 1)], 5);
        assert!(!small.snapshot_wanted());

        let large = controller_with_page(vec![row(1, "a", 1)], 50);
        assert!(large.snapshot_wanted());
    }

    #[test]
    fn test_snapshot_fetch_idempotent_until_invalidated() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 50);
        assert!(controller.begin_snapshot_fetch().is_some());
        assert!(controller.begin_snapshot_fetch().is_none());

        controller.observe_mutation();
        assert!(controller.begin_snapshot_fetch().is_some());
    }

    #[test]
    fn test_snapshot_request_asks_for_everything() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 37);
        let ticket = controller.begin_snapshot_fetch().unwrap();
        assert_eq!(ticket.request.page_number, 1);
        assert_eq!(ticket.request.page_size, 37);
    }

    #[test]
    fn test_filter_moves_to_client_mode_and_resets_window() {
        let mut controller = seeded_snapshot_controller();
        controller.set_first_index(10);

        controller.toggle_facet("status", Id::Num(1)).unwrap();
        assert_eq!(controller.mode(), DisplayMode::ClientFiltered);
        assert_eq!(controller.window().first_index, 0);
    }

    #[test]
    fn test_preserve_window_entity_keeps_position() {
        let mut rows: Vec<Row> = (1..=25).map(|i| row(i, "x", 1)).collect();
        rows[0].status = Some(OptionValue::new(2, "Status 2"));

        let mut controller = ListController::new(preserve_config(), 10);
        let ticket = controller.begin_page_fetch();
        controller.apply_page(&ticket, page(rows[..10].to_vec(), 25));
        let ticket = controller.begin_snapshot_fetch().unwrap();
        controller.apply_snapshot(&ticket, page(rows, 25));

        controller.set_first_index(10);
        controller.toggle_facet("status", Id::Num(1)).unwrap();
        assert_eq!(controller.window().first_index, 10);
    }

    #[test]
    fn test_round_trip_scenario() {
        // 25 records, status values 1,1,2,2,3 on the first five; filter
        // status ∈ {1,3} → 3 records, all visible at rows=10/first=0.
        let mut controller = seeded_snapshot_controller();
        controller.toggle_facet("status", Id::Num(1)).unwrap();
        controller.toggle_facet("status", Id::Num(3)).unwrap();

        let filtered = controller.filtered_snapshot();
        assert_eq!(filtered.len(), 3);
        assert_eq!(controller.visible_rows().len(), 3);
        assert_eq!(controller.effective_total(), 3);
    }

    #[test]
    fn test_reset_scenario() {
        let mut controller = seeded_snapshot_controller();
        controller.toggle_facet("status", Id::Num(1)).unwrap();
        assert_eq!(controller.mode(), DisplayMode::ClientFiltered);

        controller.reset_filters();
        assert!(!controller.filters().any_filter_active());
        assert_eq!(controller.window().first_index, 0);
        assert_eq!(controller.mode(), DisplayMode::ServerPaged);
        // Visible rows revert to the server's current page
        assert_eq!(controller.visible_rows().len(), 10);
        assert_eq!(controller.effective_total(), 25);
    }

    #[test]
    fn test_reset_allows_snapshot_refetch() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 50);
        assert!(controller.begin_snapshot_fetch().is_some());
        controller.reset_filters();
        assert!(controller.begin_snapshot_fetch().is_some());
    }

    #[test]
    fn test_filtering_over_partial_snapshot() {
        // Filters applied before the full snapshot arrives run over the
        // bootstrap page, then recompute when the full set lands.
        let rows: Vec<Row> = (1..=10).map(|i| row(i, "x", 1)).collect();
        let mut controller = controller_with_page(rows, 25);

        controller.toggle_facet("status", Id::Num(1)).unwrap();
        assert_eq!(controller.effective_total(), 10);

        let ticket = controller.begin_snapshot_fetch().unwrap();
        let full: Vec<Row> = (1..=25).map(|i| row(i, "x", 1)).collect();
        controller.apply_snapshot(&ticket, page(full, 25));
        assert_eq!(controller.effective_total(), 25);
    }

    #[test]
    fn test_search_dispatch_server_when_unfiltered_non_engaging() {
        let mut controller = ListController::new(
            ListConfig {
                search_engages_filtering: false,
                ..test_config()
            },
            10,
        );
        let t0 = Instant::now();
        controller.note_search_input("rust", t0);
        let dispatch = controller
            .poll_search(t0 + Duration::from_millis(500))
            .unwrap();
        match dispatch {
            SearchDispatch::Server(ticket) => {
                assert_eq!(ticket.request.search_term.as_deref(), Some("rust"));
                assert_eq!(ticket.request.page_number, 1);
            }
            SearchDispatch::Local => panic!("expected server dispatch"),
        }
    }

    #[test]
    fn test_search_dispatch_local_when_engaging() {
        let mut controller = seeded_snapshot_controller();
        let t0 = Instant::now();
        controller.note_search_input("a", t0);
        let dispatch = controller
            .poll_search(t0 + Duration::from_millis(500))
            .unwrap();
        assert_eq!(dispatch, SearchDispatch::Local);
        assert_eq!(controller.mode(), DisplayMode::ClientFiltered);
    }

    #[test]
    fn test_search_burst_fires_once() {
        let mut controller = seeded_snapshot_controller();
        let t0 = Instant::now();
        controller.note_search_input("a", t0);
        controller.note_search_input("ab", t0 + Duration::from_millis(100));
        controller.note_search_input("abc", t0 + Duration::from_millis(200));

        assert!(controller.poll_search(t0 + Duration::from_millis(400)).is_none());
        let dispatch = controller.poll_search(t0 + Duration::from_millis(700));
        assert!(dispatch.is_some());
        assert_eq!(controller.filters().search_term(), Some("abc"));
        assert!(controller.poll_search(t0 + Duration::from_millis(900)).is_none());
    }

    #[test]
    fn test_search_fire_resets_window() {
        let mut controller = seeded_snapshot_controller();
        controller.set_first_index(20);
        let t0 = Instant::now();
        controller.note_search_input("b", t0);
        controller.poll_search(t0 + Duration::from_millis(500)).unwrap();
        assert_eq!(controller.window().first_index, 0);
    }

    #[test]
    fn test_clearing_search_returns_to_server_paged() {
        let mut controller = seeded_snapshot_controller();
        let t0 = Instant::now();
        controller.note_search_input("abc", t0);
        controller.poll_search(t0 + Duration::from_millis(500)).unwrap();
        assert_eq!(controller.mode(), DisplayMode::ClientFiltered);

        controller.note_search_input("", t0 + Duration::from_secs(1));
        let dispatch = controller.poll_search(t0 + Duration::from_secs(2)).unwrap();
        assert!(matches!(dispatch, SearchDispatch::Server(_)));
        assert_eq!(controller.mode(), DisplayMode::ServerPaged);
    }

    #[test]
    fn test_window_change_in_server_mode_fetches() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 40);
        let ticket = controller.set_first_index(10).unwrap();
        assert_eq!(ticket.request.page_number, 2);
    }

    #[test]
    fn test_window_change_in_client_mode_is_local() {
        let mut controller = seeded_snapshot_controller();
        controller.toggle_facet("status", Id::Num(4)).unwrap();
        assert!(controller.set_first_index(10).is_none());
        // 20 records have status 4; second page shows the tail
        assert_eq!(controller.effective_total(), 20);
        assert_eq!(controller.visible_rows().len(), 10);
    }

    #[test]
    fn test_unknown_facet_rejected() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 1);
        let err = controller.toggle_facet("department", Id::Num(1)).unwrap_err();
        assert!(matches!(err, HiretrackError::UnknownFacet(_, _)));
    }

    #[test]
    fn test_facet_options_from_snapshot() {
        let controller = seeded_snapshot_controller();
        let options = controller.facet_options("status").unwrap();
        assert_eq!(options.len(), 4);
        let mut ids: Vec<_> = options.iter().map(|o| o.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_restore_filters_does_not_fire_search() {
        let mut controller = controller_with_page(vec![row(1, "a", 1)], 1);
        let mut filters = ActiveFilterSet::new();
        filters.search = Some("seeded".to_string());
        controller.restore_filters(filters);

        assert_eq!(controller.search_input(), "seeded");
        let later = Instant::now() + Duration::from_secs(10);
        assert!(controller.poll_search(later).is_none());
    }
}
