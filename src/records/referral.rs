//! Referral records.

use serde::{Deserialize, Serialize};

use crate::controller::{FacetConfig, ListConfig, SortPolicy};
use crate::types::{EntityKind, FacetOption, Id, OptionValue};

use super::{ListRecord, cell_of, label_of};

/// A referral as returned by `GET /referrals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: Id,
    pub candidate_name: String,
    #[serde(default)]
    pub referred_by: Option<OptionValue>,
    #[serde(default)]
    pub status: Option<OptionValue>,
    #[serde(default)]
    pub job_opening: Option<OptionValue>,
}

impl ListRecord for Referral {
    fn key(&self) -> Id {
        self.id.clone()
    }

    fn list_config() -> ListConfig<Self> {
        ListConfig {
            entity: EntityKind::Referrals,
            facets: vec![
                FacetConfig {
                    key: "status",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.status.as_ref().map(FacetOption::from),
                },
                FacetConfig {
                    key: "referred-by",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.referred_by.as_ref().map(FacetOption::from),
                },
            ],
            search_fields: |r| {
                let mut fields = vec![r.candidate_name.clone()];
                fields.extend(label_of(&r.referred_by));
                fields.extend(label_of(&r.status));
                fields
            },
            timestamp: None,
            search_engages_filtering: false,
            preserve_window_on_filter: false,
            session_persistence: true,
        }
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["ID", "Candidate", "Referred By", "Status", "Opening"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.candidate_name.clone(),
            cell_of(&self.referred_by),
            cell_of(&self.status),
            cell_of(&self.job_opening),
        ]
    }
}
