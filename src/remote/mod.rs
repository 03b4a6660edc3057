//! Backend access for list screens.
//!
//! The ATS backend is a plain REST service; every list screen consumes the
//! same paged contract:
//!
//! `GET /{entity}?pageNumber={n}&pageSize={m}[&searchTerm={s}]`
//! → `{ "data": [...], "totalCount": n }`
//!
//! Providers are behind the [`RecordSource`] trait so the controller and the
//! tests never touch the wire directly.

pub mod client;
pub mod master;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::OptionValue;

pub use client::{EntityClient, RestClient};
pub use master::{MasterDataCache, master_data};

/// One paged fetch as the backend expects it. `page_number` is 1-based,
/// matching the backend contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
    pub search_term: Option<String>,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            search_term: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }
}

/// The backend's paged response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<R> {
    pub data: Vec<R>,
    pub total_count: u64,
}

impl<R> Default for PageResponse<R> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total_count: 0,
        }
    }
}

/// Paged record access for one entity.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    /// Fetch one page, optionally server-searched. Exactly one request per
    /// call; supersession of stale responses is the controller's concern.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>>;
}

/// Master-data access: dropdown option lists maintained server-side.
#[async_trait]
pub trait OptionsSource: Send + Sync {
    async fn fetch_options(&self, field: &str) -> Result<Vec<OptionValue>>;
}
