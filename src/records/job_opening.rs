//! Job opening records.

use serde::{Deserialize, Serialize};

use crate::controller::{FacetConfig, ListConfig, SortPolicy};
use crate::types::{EntityKind, FacetOption, Id, OptionValue};

use super::{ListRecord, cell_of, label_of};

/// A job opening as returned by `GET /job-openings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub id: Id,
    pub posting_title: String,
    #[serde(default)]
    pub department: Option<OptionValue>,
    #[serde(default)]
    pub status: Option<OptionValue>,
    #[serde(default)]
    pub hiring_manager: Option<OptionValue>,
    /// Open positions under this posting.
    #[serde(default)]
    pub openings: Option<u32>,
}

impl ListRecord for JobOpening {
    fn key(&self) -> Id {
        self.id.clone()
    }

    fn list_config() -> ListConfig<Self> {
        ListConfig {
            entity: EntityKind::JobOpenings,
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
                    key: "hiring-manager",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.hiring_manager.as_ref().map(FacetOption::from),
                },
            ],
            search_fields: |r| {
                let mut fields = vec![r.posting_title.clone()];
                fields.extend(label_of(&r.department));
                fields.extend(label_of(&r.hiring_manager));
                fields.extend(label_of(&r.status));
                fields
            },
            timestamp: None,
            search_engages_filtering: true,
            preserve_window_on_filter: false,
            session_persistence: false,
        }
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["ID", "Posting", "Department", "Status", "Hiring Manager", "Openings"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.posting_title.clone(),
            cell_of(&self.department),
            cell_of(&self.status),
            cell_of(&self.hiring_manager),
            self.openings
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}
