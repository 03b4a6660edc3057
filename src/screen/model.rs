//! List screen model: state, actions, reducer, and view model.
//!
//! State transitions are pure; anything touching the network is handed back
//! to the caller as an [`Effect`] carrying a fetch ticket. The driver runs
//! the fetch and feeds the response back in as a `PageLoaded` or
//! `SnapshotLoaded` action, which keeps every transition unit-testable
//! without a backend.

use std::time::Instant;

use crate::controller::{
    ActiveFilterSet, ApplyOutcome, DateRange, DisplayMode, FetchTicket, ListController,
    SearchDispatch,
};
use crate::error::Result;
use crate::records::ListRecord;
use crate::remote::PageResponse;
use crate::types::{FacetOption, Id};

use super::filter_panel::FilterPanelState;
use super::notice::Notice;

// ============================================================================
// State Types
// ============================================================================

/// Raw state of one list screen
pub struct ScreenState<R: ListRecord> {
    /// The list controller driving rows and counts
    pub controller: ListController<R>,
    /// Filter panel state, when open
    pub panel: Option<FilterPanelState>,
    /// Pending notices, oldest first
    pub notices: Vec<Notice>,
    /// Whether a fetch is in flight
    pub is_loading: bool,
}

impl<R: ListRecord> ScreenState<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            controller: ListController::new(R::list_config(), page_size),
            panel: None,
            notices: Vec::new(),
            is_loading: false,
        }
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on a list screen
#[derive(Debug)]
pub enum ScreenAction<R> {
    /// Fetch the current page
    Load,
    /// Jump to a different first row
    SetFirstIndex(usize),
    /// Change rows-per-page
    SetPageSize(usize),
    /// A keystroke in the search box
    SearchInput { text: String, at: Instant },
    /// Check whether the debounced search should fire
    PollSearch { at: Instant },
    /// Open the filter panel
    OpenFilterPanel,
    /// Close the filter panel, keeping applied filters
    CloseFilterPanel,
    /// Focus the next facet in the panel
    FocusNextFacet,
    /// Focus the previous facet in the panel
    FocusPrevFacet,
    /// Update the fuzzy query narrowing the focused facet's options
    NarrowOptions(String),
    /// Toggle one option in a facet's selection
    ToggleOption { facet: String, id: Id },
    /// Set the date-range bounds
    SetDateRange(DateRange),
    /// Clear all facet selections and date bounds
    ResetFilters,
    /// Restore a persisted filter set
    RestoreFilters(ActiveFilterSet),
    /// Upstream data mutated; the snapshot is stale
    RecordsMutated,
    /// A page response arrived
    PageLoaded {
        ticket: FetchTicket,
        outcome: Result<PageResponse<R>>,
    },
    /// A full-snapshot response arrived
    SnapshotLoaded {
        ticket: FetchTicket,
        outcome: Result<PageResponse<R>>,
    },
    /// Drop the oldest notice
    DismissNotice,
}

/// Async work the reducer wants done. The driver executes the fetch and
/// feeds the response back as an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage(FetchTicket),
    FetchSnapshot(FetchTicket),
}

// ============================================================================
// Reducer
// ============================================================================

fn rebuild_panel_options<R: ListRecord>(
    panel: &mut Option<FilterPanelState>,
    controller: &ListController<R>,
    notices: &mut Vec<Notice>,
) {
    if let Some(panel) = panel
        && let Err(e) = panel.refresh_options(controller)
    {
        notices.push(Notice::error(e.to_string()));
    }
}

/// Pure function: apply an action to screen state (reducer pattern).
///
/// Network responses enter through `PageLoaded`/`SnapshotLoaded`; everything
/// else is a synchronous transition.
pub fn reduce<R: ListRecord>(
    mut state: ScreenState<R>,
    action: ScreenAction<R>,
) -> (ScreenState<R>, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        ScreenAction::Load => {
            let ticket = state.controller.begin_page_fetch();
            state.is_loading = true;
            effects.push(Effect::FetchPage(ticket));
        }

        ScreenAction::SetFirstIndex(first_index) => {
            if let Some(ticket) = state.controller.set_first_index(first_index) {
                state.is_loading = true;
                effects.push(Effect::FetchPage(ticket));
            }
        }
        ScreenAction::SetPageSize(page_size) => {
            if let Some(ticket) = state.controller.set_page_size(page_size) {
                state.is_loading = true;
                effects.push(Effect::FetchPage(ticket));
            }
        }

        ScreenAction::SearchInput { text, at } => {
            state.controller.note_search_input(&text, at);
        }
        ScreenAction::PollSearch { at } => match state.controller.poll_search(at) {
            Some(SearchDispatch::Server(ticket)) => {
                state.is_loading = true;
                effects.push(Effect::FetchPage(ticket));
            }
            Some(SearchDispatch::Local) | None => {}
        },

        ScreenAction::OpenFilterPanel => {
            match FilterPanelState::from_controller(&state.controller) {
                Ok(panel) => state.panel = Some(panel),
                Err(e) => state.notices.push(Notice::error(e.to_string())),
            }
            if let Some(ticket) = state.controller.begin_snapshot_fetch() {
                state.is_loading = true;
                effects.push(Effect::FetchSnapshot(ticket));
            }
        }
        ScreenAction::CloseFilterPanel => {
            state.panel = None;
        }
        ScreenAction::FocusNextFacet => {
            if let Some(panel) = &mut state.panel {
                panel.focus_next();
            }
        }
        ScreenAction::FocusPrevFacet => {
            if let Some(panel) = &mut state.panel {
                panel.focus_prev();
            }
        }
        ScreenAction::NarrowOptions(query) => {
            if let Some(panel) = &mut state.panel {
                panel.narrow = query;
            }
        }

        ScreenAction::ToggleOption { facet, id } => {
            if let Err(e) = state.controller.toggle_facet(&facet, id) {
                state.notices.push(Notice::error(e.to_string()));
            }
        }
        ScreenAction::SetDateRange(range) => {
            if let (Some(from), Some(to)) = (range.from, range.to)
                && to < from
            {
                state
                    .notices
                    .push(Notice::warning("end date is before start date"));
            } else {
                state.controller.set_date_range(range);
            }
        }
        ScreenAction::ResetFilters => {
            state.controller.reset_filters();
            rebuild_panel_options(&mut state.panel, &state.controller, &mut state.notices);
        }
        ScreenAction::RestoreFilters(filters) => {
            state.controller.restore_filters(filters);
        }
        ScreenAction::RecordsMutated => {
            state.controller.observe_mutation();
        }

        ScreenAction::PageLoaded { ticket, outcome } => {
            state.is_loading = false;
            match state.controller.apply_page(&ticket, outcome) {
                ApplyOutcome::Applied => {
                    rebuild_panel_options(&mut state.panel, &state.controller, &mut state.notices);
                }
                ApplyOutcome::Stale => {}
                ApplyOutcome::Failed(message) => {
                    state.notices.push(Notice::error(message));
                }
            }
        }
        ScreenAction::SnapshotLoaded { ticket, outcome } => {
            state.is_loading = false;
            match state.controller.apply_snapshot(&ticket, outcome) {
                ApplyOutcome::Applied => {
                    rebuild_panel_options(&mut state.panel, &state.controller, &mut state.notices);
                }
                ApplyOutcome::Stale => {}
                ApplyOutcome::Failed(message) => {
                    state.notices.push(Notice::error(message));
                }
            }
        }

        ScreenAction::DismissNotice => {
            if !state.notices.is_empty() {
                state.notices.remove(0);
            }
        }
    }

    (state, effects)
}

// ============================================================================
// View Model Types
// ============================================================================

/// Computed view model for rendering one list screen
#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    /// Column headers
    pub headers: Vec<&'static str>,
    /// Visible rows, formatted
    pub rows: Vec<Vec<String>>,
    /// Record count the paginator reports
    pub total: u64,
    /// Current 1-based page number
    pub page_number: u32,
    /// Total page count for the current rows-per-page
    pub page_count: u32,
    /// Who is driving rows and count
    pub mode: DisplayMode,
    /// Current search box content
    pub search_input: String,
    /// Whether any facet or date filter is applied
    pub filters_active: bool,
    /// Filter panel contents, when open
    pub panel: Option<PanelViewModel>,
    /// Pending notices
    pub notices: Vec<Notice>,
    /// Whether a fetch is in flight
    pub is_loading: bool,
    /// Whether the empty-state placeholder should show
    pub is_empty: bool,
}

/// View model for the filter panel
#[derive(Debug, Clone)]
pub struct PanelViewModel {
    pub facets: Vec<FacetViewModel>,
    pub narrow: String,
}

/// View model for one facet in the panel
#[derive(Debug, Clone)]
pub struct FacetViewModel {
    pub key: String,
    pub is_focused: bool,
    pub options: Vec<OptionViewModel>,
}

/// One selectable option
#[derive(Debug, Clone)]
pub struct OptionViewModel {
    pub option: FacetOption,
    pub is_selected: bool,
}

/// Pure function: compute the view model from screen state.
pub fn compute_view_model<R: ListRecord>(state: &ScreenState<R>) -> ScreenViewModel {
    let controller = &state.controller;
    let rows: Vec<Vec<String>> = controller
        .visible_rows()
        .into_iter()
        .map(|record| record.table_row())
        .collect();

    let total = controller.effective_total();
    let page_size = controller.window().page_size as u64;
    let page_count = if total == 0 {
        0
    } else {
        ((total - 1) / page_size + 1) as u32
    };

    let panel = state.panel.as_ref().map(|panel| PanelViewModel {
        narrow: panel.narrow.clone(),
        facets: panel
            .facets
            .iter()
            .enumerate()
            .map(|(index, facet)| FacetViewModel {
                key: facet.key.clone(),
                is_focused: index == panel.focused_facet,
                options: facet
                    .options
                    .iter()
                    .map(|option| OptionViewModel {
                        is_selected: controller
                            .filters()
                            .selection(&facet.key)
                            .is_some_and(|selection| selection.contains(&option.id)),
                        option: option.clone(),
                    })
                    .collect(),
            })
            .collect(),
    });

    ScreenViewModel {
        headers: R::table_headers(),
        is_empty: rows.is_empty() && !state.is_loading,
        rows,
        total,
        page_number: controller.window().page_number(),
        page_count,
        mode: controller.mode(),
        search_input: controller.search_input().to_string(),
        filters_active: controller.filters().any_filter_active(),
        panel,
        notices: state.notices.clone(),
        is_loading: state.is_loading,
    }
}

// ============================================================================
// Tests
// ============================================================================
