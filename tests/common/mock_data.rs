#![allow(dead_code)]

use hiretrack::records::{Candidate, Interview, JobRequest};
use hiretrack::types::{Id, OptionValue};

/// Candidate with a numeric status and an owner.
pub fn mock_candidate(id: i64, first_name: &str, status: i64, status_label: &str) -> Candidate {
    Candidate {
        id: Id::Num(id),
        first_name: first_name.to_string(),
        last_name: "Example".to_string(),
        email: Some(format!("{}@example.com", first_name.to_lowercase())),
        phone: None,
        status: Some(OptionValue::new(status, status_label)),
        owner: Some(OptionValue::new("u-1", "Dana Reyes")),
        job_opening: Some(OptionValue::new(31, "Backend Engineer")),
    }
}

/// A pool of 25 candidates: statuses 1,1,2,2,3 on the first five, 4 on the
/// rest.
pub fn candidate_pool() -> Vec<Candidate> {
    let mut pool = vec![
        mock_candidate(1, "Amy", 1, "New"),
        mock_candidate(2, "Bree", 1, "New"),
        mock_candidate(3, "Cal", 2, "Screening"),
        mock_candidate(4, "Dee", 2, "Screening"),
        mock_candidate(5, "Eli", 3, "Hired"),
    ];
    pool.extend((6..=25).map(|i| mock_candidate(i, "Zed", 4, "Archived")));
    pool
}

/// Server-side search predicate matching the backend's behavior for
/// candidates.
pub fn candidate_matcher(candidate: &Candidate, term: &str) -> bool {
    let term = term.to_lowercase();
    candidate.first_name.to_lowercase().contains(&term)
        || candidate.last_name.to_lowercase().contains(&term)
}

pub fn mock_interview(id: i64, title: &str, from: &str) -> Interview {
    Interview {
        id: Id::Num(id),
        title: title.to_string(),
        candidate_name: "Maya Singh".to_string(),
        interviewer: Some(OptionValue::new("u-2", "Lee Chen")),
        status: Some(OptionValue::new(1, "Scheduled")),
        from_date_time: Some(from.parse().unwrap()),
        to_date_time: None,
    }
}

pub fn mock_job_request(id: i64, title: &str, status: i64, status_label: &str) -> JobRequest {
    JobRequest {
        id: Id::Num(id),
        title: title.to_string(),
        department: Some(OptionValue::new(4, "Engineering")),
        requested_by: Some(OptionValue::new("u-3", "Priya Nair")),
        status: Some(OptionValue::new(status, status_label)),
        positions: Some(1),
    }
}

pub fn job_request_matcher(request: &JobRequest, term: &str) -> bool {
    request.title.to_lowercase().contains(&term.to_lowercase())
}
