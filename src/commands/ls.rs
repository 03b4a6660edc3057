//! The `ls` command: one full list controller round trip per invocation.
//!
//! CLI flags map onto screen actions: `--filter`/`--from-date` open the
//! filter panel (triggering the snapshot fetch) and toggle options,
//! `--search` types into the search box and lets the debounce fire, and
//! `--page`/`--rows` move the window. The rendered output comes from the
//! same view model an interactive renderer would consume.

use std::sync::Arc;
use std::time::Instant;

use jiff::civil::Date;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::Config;
use crate::controller::{DateRange, SEARCH_DEBOUNCE};
use crate::display::{empty_placeholder, format_notice, format_paginator, render_table};
use crate::error::{HiretrackError, Result};
use crate::records::{
    Candidate, Interview, JobOpening, JobRequest, ListRecord, Referral, UserRecord,
};
use crate::remote::{RecordSource, RestClient};
use crate::screen::{Effect, ScreenAction, ScreenState, compute_view_model, reduce};
use crate::session::SessionContext;
use crate::types::{EntityKind, Id};

/// Parsed `ls` flags.
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    /// 1-based page number
    pub page: Option<u32>,
    /// Rows per page
    pub rows: Option<u32>,
    /// Free-text search term
    pub search: Option<String>,
    /// Facet selections: key → selected values
    pub filters: Vec<(String, Vec<String>)>,
    /// Date-range lower bound (YYYY-MM-DD)
    pub from_date: Option<String>,
    /// Date-range upper bound (YYYY-MM-DD)
    pub to_date: Option<String>,
    /// Emit JSON instead of a table
    pub output_json: bool,
}

/// Parse one `--filter key=v1,v2` argument.
pub fn parse_filter_arg(arg: &str) -> Result<(String, Vec<String>)> {
    let (key, values) = arg.split_once('=').ok_or_else(|| {
        HiretrackError::InvalidFilter(arg.to_string(), "expected key=value[,value...]".to_string())
    })?;
    if key.is_empty() {
        return Err(HiretrackError::InvalidFilter(
            arg.to_string(),
            "facet key cannot be empty".to_string(),
        ));
    }
    let values: Vec<String> = values
        .split(',')
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect();
    if values.is_empty() {
        return Err(HiretrackError::InvalidFilter(
            arg.to_string(),
            "at least one value is required".to_string(),
        ));
    }
    Ok((key.to_string(), values))
}

fn parse_date(s: &str) -> Result<Date> {
    s.parse::<Date>()
        .map_err(|_| HiretrackError::InvalidDate(s.to_string()))
}

/// List records of an entity.
pub async fn cmd_ls(entity: EntityKind, options: LsOptions) -> Result<()> {
    match entity {
        EntityKind::Candidates => run_list::<Candidate>(options).await,
        EntityKind::Interviews => run_list::<Interview>(options).await,
        EntityKind::JobOpenings => run_list::<JobOpening>(options).await,
        EntityKind::JobRequests => run_list::<JobRequest>(options).await,
        EntityKind::Referrals => run_list::<Referral>(options).await,
        EntityKind::Users => run_list::<UserRecord>(options).await,
    }
}

/// Run queued effects against the backend, feeding responses back into the
/// reducer.
async fn run_effects<R: ListRecord>(
    mut state: ScreenState<R>,
    effects: Vec<Effect>,
    source: &dyn RecordSource<R>,
) -> ScreenState<R> {
    for effect in effects {
        let action = match effect {
            Effect::FetchPage(ticket) => {
                let outcome = source.fetch_page(&ticket.request).await;
                ScreenAction::PageLoaded { ticket, outcome }
            }
            Effect::FetchSnapshot(ticket) => {
                let outcome = source.fetch_page(&ticket.request).await;
                ScreenAction::SnapshotLoaded { ticket, outcome }
            }
        };
        let (next, _) = reduce(state, action);
        state = next;
    }
    state
}

async fn run_list<R>(options: LsOptions) -> Result<()>
where
    R: ListRecord + DeserializeOwned + Serialize + 'static,
{
    let config = Config::load()?;
    let client = Arc::new(RestClient::from_config(&config)?);
    let list_config = R::list_config();
    let entity = list_config.entity;
    let source = client.entity::<R>(entity);

    let page_size = options.rows.unwrap_or(config.defaults.page_size).max(1) as usize;
    let mut state = ScreenState::<R>::new(page_size);

    // Session-persisted screens restore the filter set they had when the
    // user last left the list.
    let session = if list_config.session_persistence {
        Some(SessionContext::open()?)
    } else {
        None
    };
    if let Some(session) = &session
        && let Some(filters) = session.load_filters(entity)?
    {
        let (next, _) = reduce(state, ScreenAction::RestoreFilters(filters));
        state = next;
    }

    let (next, effects) = reduce(state, ScreenAction::Load);
    state = run_effects(next, effects, &source).await;

    if let Some(page) = options.page
        && page > 1
    {
        let first_index = (page as usize - 1) * page_size;
        let (next, effects) = reduce(state, ScreenAction::SetFirstIndex(first_index));
        state = run_effects(next, effects, &source).await;
    }

    let wants_filters = !options.filters.is_empty()
        || options.from_date.is_some()
        || options.to_date.is_some();
    if wants_filters {
        let (next, effects) = reduce(state, ScreenAction::OpenFilterPanel);
        state = run_effects(next, effects, &source).await;

        for (facet, values) in &options.filters {
            for value in values {
                let (next, effects) = reduce(
                    state,
                    ScreenAction::ToggleOption {
                        facet: facet.clone(),
                        id: Id::parse_lossy(value),
                    },
                );
                state = run_effects(next, effects, &source).await;
            }
        }

        if options.from_date.is_some() || options.to_date.is_some() {
            let range = DateRange {
                from: options.from_date.as_deref().map(parse_date).transpose()?,
                to: options.to_date.as_deref().map(parse_date).transpose()?,
            };
            let (next, _) = reduce(state, ScreenAction::SetDateRange(range));
            state = next;
        }

        let (next, _) = reduce(state, ScreenAction::CloseFilterPanel);
        state = next;
    }

    if let Some(term) = &options.search {
        let typed_at = Instant::now();
        let (next, _) = reduce(
            state,
            ScreenAction::SearchInput {
                text: term.clone(),
                at: typed_at,
            },
        );
        let (next, effects) = reduce(
            next,
            ScreenAction::PollSearch {
                at: typed_at + SEARCH_DEBOUNCE,
            },
        );
        state = run_effects(next, effects, &source).await;
    }

    if let Some(session) = &session {
        session.store_filters(entity, state.controller.filters())?;
    }

    let vm = compute_view_model(&state);
    for notice in &vm.notices {
        eprintln!("{}", format_notice(notice));
    }

    if options.output_json {
        let rows: Vec<&R> = state.controller.visible_rows();
        let output = json!({
            "data": rows,
            "totalCount": vm.total,
            "pageNumber": vm.page_number,
            "pageCount": vm.page_count,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if vm.rows.is_empty() {
        println!("{}", empty_placeholder(entity.as_str()));
    } else {
        println!("{}", render_table(&vm.headers, &vm.rows));
        println!("{}", format_paginator(&vm));
    }

    Ok(())
}
