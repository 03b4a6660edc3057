//! List controller integration tests against an in-memory backend.
//!
//! The unit tests in `src/controller/` cover individual pieces in
//! isolation; these exercise full fetch round trips through the
//! `RecordSource` seam, including server search, snapshot loading, and
//! failure degradation.

mod common;

use common::mock_data::{candidate_matcher, candidate_pool};
use common::MockSource;

use hiretrack::controller::{ApplyOutcome, DisplayMode, ListController, SearchDispatch};
use hiretrack::records::{Candidate, ListRecord};
use hiretrack::remote::RecordSource;
use hiretrack::types::Id;

use std::time::{Duration, Instant};

fn controller() -> ListController<Candidate> {
    ListController::new(Candidate::list_config(), 10)
}

fn source() -> MockSource<Candidate> {
    MockSource::new(candidate_pool(), candidate_matcher)
}

#[tokio::test]
async fn test_refresh_loads_first_page() {
    let source = source();
    let mut controller = controller();

    let outcome = controller.refresh(&source).await;
    assert_eq!(outcome, ApplyOutcome::Applied);
    assert_eq!(controller.visible_rows().len(), 10);
    assert_eq!(controller.effective_total(), 25);
    assert_eq!(controller.mode(), DisplayMode::ServerPaged);
}

#[tokio::test]
async fn test_page_change_round_trip() {
    let source = source();
    let mut controller = controller();
    controller.refresh(&source).await;

    let ticket = controller.set_first_index(20).unwrap();
    let outcome = source.fetch_page(&ticket.request).await;
    controller.apply_page(&ticket, outcome);

    // 25 records, page 3 of 10 holds the last 5
    assert_eq!(controller.visible_rows().len(), 5);
    assert_eq!(controller.window().page_number(), 3);
}

#[tokio::test]
async fn test_server_search_round_trip() {
    let source = source();
    let mut controller = ListController::<Candidate>::new(
        hiretrack::ListConfig {
            search_engages_filtering: false,
            ..Candidate::list_config()
        },
        10,
    );
    controller.refresh(&source).await;

    let t0 = Instant::now();
    controller.note_search_input("amy", t0);
    let dispatch = controller
        .poll_search(t0 + Duration::from_millis(500))
        .unwrap();
    let SearchDispatch::Server(ticket) = dispatch else {
        panic!("expected server search");
    };

    let outcome = source.fetch_page(&ticket.request).await;
    controller.apply_page(&ticket, outcome);

    assert_eq!(controller.effective_total(), 1);
    assert_eq!(controller.visible_rows()[0].first_name, "Amy");
}

#[tokio::test]
async fn test_snapshot_flow_and_client_filtering() {
    let source = source();
    let mut controller = controller();
    controller.refresh(&source).await;

    let outcome = controller.ensure_snapshot(&source).await;
    assert_eq!(outcome, Some(ApplyOutcome::Applied));
    // Idempotent until invalidated
    assert!(controller.ensure_snapshot(&source).await.is_none());

    controller.toggle_facet("status", Id::Num(1)).unwrap();
    controller.toggle_facet("status", Id::Num(3)).unwrap();
    assert_eq!(controller.mode(), DisplayMode::ClientFiltered);
    assert_eq!(controller.effective_total(), 3);
    assert_eq!(controller.visible_rows().len(), 3);
}

#[tokio::test]
async fn test_snapshot_fetch_requests_full_set() {
    let source = source();
    let mut controller = controller();
    controller.refresh(&source).await;

    let before = source.call_count();
    controller.ensure_snapshot(&source).await;
    assert_eq!(source.call_count(), before + 1);

    // The snapshot holds all 25 records even though the page size is 10
    controller.toggle_facet("status", Id::Num(4)).unwrap();
    assert_eq!(controller.effective_total(), 20);
}

#[tokio::test]
async fn test_failure_degrades_then_recovers() {
    let source = source();
    let mut controller = controller();

    source.set_failing(true);
    let outcome = controller.refresh(&source).await;
    assert!(matches!(outcome, ApplyOutcome::Failed(_)));
    assert!(controller.visible_rows().is_empty());
    assert_eq!(controller.effective_total(), 0);

    // Manual retry succeeds; no state was wedged
    source.set_failing(false);
    let outcome = controller.refresh(&source).await;
    assert_eq!(outcome, ApplyOutcome::Applied);
    assert_eq!(controller.effective_total(), 25);
}

#[tokio::test]
async fn test_facet_options_dedupe_across_full_snapshot() {
    let source = source();
    let mut controller = controller();
    controller.refresh(&source).await;
    controller.ensure_snapshot(&source).await;

    let options = controller.facet_options("status").unwrap();
    assert_eq!(options.len(), 4);
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["New", "Screening", "Hired", "Archived"]);

    // Owner facet collapses to the single shared owner
    let owners = controller.facet_options("owner").unwrap();
    assert_eq!(owners.len(), 1);
}

#[tokio::test]
async fn test_mutation_invalidates_snapshot_for_refetch() {
    let source = source();
    let mut controller = controller();
    controller.refresh(&source).await;
    controller.ensure_snapshot(&source).await;

    controller.observe_mutation();
    let before = source.call_count();
    assert_eq!(
        controller.ensure_snapshot(&source).await,
        Some(ApplyOutcome::Applied)
    );
    assert_eq!(source.call_count(), before + 1);
}
