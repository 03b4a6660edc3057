//! Interview records.
//!
//! Interviews are the one entity with a date-range facet: the filter panel
//! exposes from/to bounds compared against the scheduled start time.

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::controller::{FacetConfig, ListConfig, SortPolicy};
use crate::types::{EntityKind, FacetOption, Id, OptionValue};

use super::{ListRecord, cell_of, label_of};

/// An interview as returned by `GET /interviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Id,
    pub title: String,
    pub candidate_name: String,
    #[serde(default)]
    pub interviewer: Option<OptionValue>,
    #[serde(default)]
    pub status: Option<OptionValue>,
    /// Scheduled start, ISO 8601.
    #[serde(default)]
    pub from_date_time: Option<Timestamp>,
    /// Scheduled end, ISO 8601.
    #[serde(default)]
    pub to_date_time: Option<Timestamp>,
}

fn format_schedule(timestamp: &Option<Timestamp>) -> String {
    match timestamp {
        Some(ts) => ts
            .to_zoned(TimeZone::UTC)
            .strftime("%Y-%m-%d %H:%M")
            .to_string(),
        None => "-".to_string(),
    }
}

impl ListRecord for Interview {
    fn key(&self) -> Id {
        self.id.clone()
    }

    fn list_config() -> ListConfig<Self> {
        ListConfig {
            entity: EntityKind::Interviews,
            facets: vec![
                FacetConfig {
                    key: "status",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.status.as_ref().map(FacetOption::from),
                },
                FacetConfig {
                    key: "interviewer",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.interviewer.as_ref().map(FacetOption::from),
                },
            ],
            search_fields: |r| {
                let mut fields = vec![r.title.clone(), r.candidate_name.clone()];
                fields.extend(label_of(&r.interviewer));
                fields.extend(label_of(&r.status));
                fields
            },
            timestamp: Some(|r| r.from_date_time),
            search_engages_filtering: true,
            preserve_window_on_filter: false,
            session_persistence: false,
        }
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Candidate", "Interviewer", "Status", "Scheduled"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.candidate_name.clone(),
            cell_of(&self.interviewer),
            cell_of(&self.status),
            format_schedule(&self.from_date_time),
        ]
    }
}
