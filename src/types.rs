//! Shared types for entity records and facet values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HiretrackError, Result};

/// The list screens served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Candidates,
    Interviews,
    JobOpenings,
    JobRequests,
    Referrals,
    Users,
}

pub const ALL_ENTITIES: [EntityKind; 6] = [
    EntityKind::Candidates,
    EntityKind::Interviews,
    EntityKind::JobOpenings,
    EntityKind::JobRequests,
    EntityKind::Referrals,
    EntityKind::Users,
];

impl EntityKind {
    /// Path segment used in backend URLs and session store keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Candidates => "candidates",
            EntityKind::Interviews => "interviews",
            EntityKind::JobOpenings => "job-openings",
            EntityKind::JobRequests => "job-requests",
            EntityKind::Referrals => "referrals",
            EntityKind::Users => "users",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = HiretrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "candidates" => Ok(EntityKind::Candidates),
            "interviews" => Ok(EntityKind::Interviews),
            "job-openings" => Ok(EntityKind::JobOpenings),
            "job-requests" => Ok(EntityKind::JobRequests),
            "referrals" => Ok(EntityKind::Referrals),
            "users" => Ok(EntityKind::Users),
            _ => Err(HiretrackError::UnknownEntity(s.to_string())),
        }
    }
}

/// Primary key or facet value identifier. The backend mixes numeric and
/// string keys across entities, so both are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

impl Id {
    /// Parse a CLI-supplied value, preferring the numeric form so that
    /// `--filter status=1` matches records whose status value is the number 1.
    pub fn parse_lossy(s: &str) -> Id {
        match s.parse::<i64>() {
            Ok(n) => Id::Num(n),
            Err(_) => Id::Text(s.to_string()),
        }
    }
}

/// A dropdown detail as embedded in backend records: a raw value plus the
/// label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    pub value: Id,
    pub label: String,
}

impl OptionValue {
    pub fn new(value: impl Into<Id>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One entry in a derived facet option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub id: Id,
    pub label: String,
}

impl FacetOption {
    pub fn new(id: impl Into<Id>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl From<&OptionValue> for FacetOption {
    fn from(opt: &OptionValue) -> Self {
        FacetOption {
            id: opt.value.clone(),
            label: opt.label.clone(),
        }
    }
}
