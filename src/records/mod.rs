//! Entity record types and their list screen configurations.
//!
//! Each backend entity gets one module defining the record shape the REST
//! API returns and a [`ListConfig`] wiring it into the list controller:
//! which fields are facets (and how their option lists sort), which fields
//! free-text search covers, and the entity's mode policies.

pub mod candidate;
pub mod interview;
pub mod job_opening;
pub mod job_request;
pub mod referral;
pub mod user;

use crate::controller::ListConfig;
use crate::types::{Id, OptionValue};

pub use candidate::Candidate;
pub use interview::Interview;
pub use job_opening::JobOpening;
pub use job_request::JobRequest;
pub use referral::Referral;
pub use user::UserRecord;

/// A record displayable in a list screen.
pub trait ListRecord: Clone + Send + Sync + Sized {
    /// Primary key as the backend carries it.
    fn key(&self) -> Id;

    /// The entity's controller configuration.
    fn list_config() -> ListConfig<Self>;

    /// Column headers for table output.
    fn table_headers() -> Vec<&'static str>;

    /// One table row for this record.
    fn table_row(&self) -> Vec<String>;
}

/// Label of a dropdown detail, for search field lists.
pub(crate) fn label_of(option: &Option<OptionValue>) -> Option<String> {
    option.as_ref().map(|o| o.label.clone())
}

/// Label of a dropdown detail for table cells, with a placeholder for
/// missing values.
pub(crate) fn cell_of(option: &Option<OptionValue>) -> String {
    option
        .as_ref()
        .map(|o| o.label.clone())
        .unwrap_or_else(|| "-".to_string())
}
