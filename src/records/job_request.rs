//! Job request records.
//!
//! Job requests keep their filter state across screen changes within a
//! session, and applying a filter keeps the current page position instead of
//! jumping back to the first page.

use serde::{Deserialize, Serialize};

use crate::controller::{FacetConfig, ListConfig, SortPolicy};
use crate::types::{EntityKind, FacetOption, Id, OptionValue};

use super::{ListRecord, cell_of, label_of};

/// A job request as returned by `GET /job-requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub department: Option<OptionValue>,
    #[serde(default)]
    pub requested_by: Option<OptionValue>,
    #[serde(default)]
    pub status: Option<OptionValue>,
    #[serde(default)]
    pub positions: Option<u32>,
}

impl ListRecord for JobRequest {
    fn key(&self) -> Id {
        self.id.clone()
    }

    fn list_config() -> ListConfig<Self> {
        ListConfig {
            entity: EntityKind::JobRequests,
            facets: vec![
                FacetConfig {
                    key: "status",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.status.as_ref().map(FacetOption::from),
                },
                FacetConfig {
                    key: "department",
                    sort: SortPolicy::Alphabetical,
                    extract: |r| r.department.as_ref().map(FacetOption::from),
                },
                FacetConfig {
                    key: "requested-by",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.requested_by.as_ref().map(FacetOption::from),
                },
            ],
            search_fields: |r| {
                let mut fields = vec![r.title.clone()];
                fields.extend(label_of(&r.department));
                fields.extend(label_of(&r.requested_by));
                fields.extend(label_of(&r.status));
                fields
            },
            timestamp: None,
            // Search stays a server-side concern for this screen; only
            // facet selections move it into client-filtered mode.
            search_engages_filtering: false,
            preserve_window_on_filter: true,
            session_persistence: true,
        }
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Department", "Requested By", "Status", "Positions"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            cell_of(&self.department),
            cell_of(&self.requested_by),
            cell_of(&self.status),
            self.positions
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}
