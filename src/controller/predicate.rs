//! Predicate composition: facet selections, free-text search, date range.
//!
//! Inclusion of a record is the conjunction of three independent predicates:
//! facet selections (OR within a field, AND across fields), case-insensitive
//! substring search over the entity's search fields, and an inclusive date
//! range against the entity's timestamp field.

use std::collections::{BTreeMap, BTreeSet};

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::types::Id;

use super::ListConfig;

/// Inclusive date bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    pub fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether a timestamp falls within the bounds. A missing timestamp is
    /// treated as the Unix epoch: it fails any `from` bound and passes
    /// trivially when no bound is set.
    pub fn contains(&self, timestamp: Option<Timestamp>) -> bool {
        if !self.is_set() {
            return true;
        }
        let date = timestamp
            .unwrap_or(Timestamp::UNIX_EPOCH)
            .to_zoned(TimeZone::UTC)
            .date();
        if let Some(from) = self.from
            && date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && date > to
        {
            return false;
        }
        true
    }
}

/// The filters a user currently has applied to one list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilterSet {
    /// Facet key → selected option ids. An absent or empty selection does
    /// not constrain that facet.
    #[serde(default)]
    selections: BTreeMap<String, BTreeSet<Id>>,

    /// Committed free-text search term. Tracked with the filter set but it
    /// does not count toward [`ActiveFilterSet::any_filter_active`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Date bounds (interview screens).
    #[serde(default)]
    pub date_range: DateRange,
}

impl ActiveFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether client-side filtering is engaged by facets or dates. The
    /// search term deliberately does not count; whether search engages
    /// client-filtered mode is a per-entity policy.
    pub fn any_filter_active(&self) -> bool {
        self.selections.values().any(|set| !set.is_empty()) || self.date_range.is_set()
    }

    pub fn selection(&self, facet: &str) -> Option<&BTreeSet<Id>> {
        self.selections.get(facet)
    }

    /// Toggle one option id in a facet's selection.
    pub fn toggle(&mut self, facet: &str, id: Id) {
        let set = self.selections.entry(facet.to_string()).or_default();
        if !set.remove(&id) {
            set.insert(id);
        }
    }

    /// Replace a facet's selection wholesale.
    pub fn set_selection(&mut self, facet: &str, ids: impl IntoIterator<Item = Id>) {
        self.selections
            .insert(facet.to_string(), ids.into_iter().collect());
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Drop all facet selections and date bounds. The search term survives a
    /// filter reset; it has its own clear path.
    pub fn clear_filters(&mut self) {
        self.selections.clear();
        self.date_range = DateRange::default();
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }
}

/// Case-insensitive substring match.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a record is included under the active filters.
pub fn record_matches<R>(record: &R, filters: &ActiveFilterSet, config: &ListConfig<R>) -> bool {
    // Facets: OR within a field, AND across fields. Empty selections are
    // vacuously satisfied.
    for facet in &config.facets {
        let Some(selection) = filters.selection(facet.key) else {
            continue;
        };
        if selection.is_empty() {
            continue;
        }
        let matches = (facet.extract)(record)
            .map(|option| selection.contains(&option.id))
            .unwrap_or(false);
        if !matches {
            return false;
        }
    }

    // Free-text search: any search field containing the term.
    if let Some(term) = filters.search_term() {
        let fields = (config.search_fields)(record);
        if !fields.iter().any(|field| contains_ci(field, term)) {
            return false;
        }
    }

    // Date range against the entity's timestamp field, when it has one.
    if filters.date_range.is_set() {
        let timestamp = config.timestamp.and_then(|extract| extract(record));
        if !filters.date_range.contains(timestamp) {
            return false;
        }
    }

    true
}
