//! User administration records.

use serde::{Deserialize, Serialize};

use crate::controller::{FacetConfig, ListConfig, SortPolicy};
use crate::types::{EntityKind, FacetOption, Id, OptionValue};

use super::{ListRecord, cell_of, label_of};

/// A user as returned by `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<OptionValue>,
    #[serde(default)]
    pub status: Option<OptionValue>,
}

impl ListRecord for UserRecord {
    fn key(&self) -> Id {
        self.id.clone()
    }

    fn list_config() -> ListConfig<Self> {
        ListConfig {
            entity: EntityKind::Users,
            facets: vec![
                FacetConfig {
                    key: "role",
                    sort: SortPolicy::Alphabetical,
                    extract: |r| r.role.as_ref().map(FacetOption::from),
                },
                FacetConfig {
                    key: "status",
                    sort: SortPolicy::Traversal,
                    extract: |r| r.status.as_ref().map(FacetOption::from),
                },
            ],
            search_fields: |r| {
                let mut fields = vec![r.name.clone()];
                fields.extend(r.email.clone());
                fields.extend(label_of(&r.role));
                fields
            },
            timestamp: None,
            search_engages_filtering: false,
            preserve_window_on_filter: false,
            session_persistence: true,
        }
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Role", "Status"]
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone().unwrap_or_else(|| "-".to_string()),
            cell_of(&self.role),
            cell_of(&self.status),
        ]
    }
}
