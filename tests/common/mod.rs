#![allow(dead_code)]

pub mod mock_data;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use hiretrack::error::{HiretrackError, Result};
use hiretrack::remote::{PageRequest, PageResponse, RecordSource};

/// In-memory backend with the real paging contract: 1-based page numbers,
/// optional server-side substring search, `totalCount` of the (searched)
/// set.
pub struct MockSource<R> {
    records: Vec<R>,
    /// Server-side search predicate
    matcher: fn(&R, &str) -> bool,
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl<R: Clone> MockSource<R> {
    pub fn new(records: Vec<R>, matcher: fn(&R, &str) -> bool) -> Self {
        Self {
            records,
            matcher,
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent fetch fail.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Number of fetches served (or refused).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> RecordSource<R> for MockSource<R> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(HiretrackError::Api("mock backend down".to_string()));
        }

        let matched: Vec<&R> = match request.search_term.as_deref() {
            Some(term) => self
                .records
                .iter()
                .filter(|r| (self.matcher)(r, term))
                .collect(),
            None => self.records.iter().collect(),
        };

        let total_count = matched.len() as u64;
        let start = ((request.page_number.max(1) - 1) * request.page_size) as usize;
        let end = (start + request.page_size as usize).min(matched.len());
        let data = if start < matched.len() {
            matched[start..end].iter().map(|r| (*r).clone()).collect()
        } else {
            Vec::new()
        };

        Ok(PageResponse { data, total_count })
    }
}
