//! Candidate records.

use serde::{Deserialize, Serialize};

use crate::controller::{FacetConfig, ListConfig, SortPolicy};
use crate::types::{EntityKind, FacetOption, Id, OptionValue};

use super::{ListRecord, cell_of, label_of};

/// A candidate as returned by `GET /candidates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<OptionValue>,
    #[serde(default)]
    pub owner: Option<OptionValue>,
    /// The job opening the candidate applied against.
    #[serde(default)]
    pub job_opening: Option<OptionValue>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl ListRecord for Candidate {
    fn key(&self) -> Id {
        self.id.clone()
    }

    fn list_config() -> ListConfig<Self> {
        ListConfig {
            entity: EntityKind::Candidates,
            facets: vec![
                FacetConfig {
                    key: "status",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.status.as_ref().map(FacetOption::from),
                },
                FacetConfig {
                    key: "owner",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.owner.as_ref().map(FacetOption::from),
                },
                FacetConfig {
                    key: "opening",
                    sort: SortPolicy::Alphabetical,
                    extract: |r| r.job_opening.as_ref().map(FacetOption::from),
                },
            ],
            search_fields: |r| {
                let mut fields = vec![r.first_name.clone(), r.last_name.clone()];
                fields.extend(r.email.clone());
                fields.extend(label_of(&r.job_opening));
                fields.extend(label_of(&r.owner));
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
        vec!["ID", "Name", "Email", "Status", "Owner", "Opening"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name(),
            self.email.clone().unwrap_or_else(|| "-".to_string()),
            cell_of(&self.status),
            cell_of(&self.owner),
            cell_of(&self.job_opening),
        ]
    }
}
