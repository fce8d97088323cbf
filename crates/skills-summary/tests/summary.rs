use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use skills_summary::{
    CompletionBackend, CompletionRequest, RetryPolicy, SummaryError, complete_with_backoff,
    submit_summary,
};
use studio_jobs::{JobCache, JobQueue};

/// Backend that fails a set number of times before succeeding.
struct FlakyBackend {
    calls: AtomicU32,
    failures: u32,
    error_kind: fn() -> SummaryError,
}

impl FlakyBackend {
    fn new(failures: u32, error_kind: fn() -> SummaryError) -> Self {
        Self {
            calls: AtomicU32::new(0),
            failures,
            error_kind,
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CompletionBackend for FlakyBackend {
    fn complete(&self, _request: &CompletionRequest) -> Result<String, SummaryError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err((self.error_kind)())
        } else {
            Ok("generated summary".to_string())
        }
    }
}

fn network_error() -> SummaryError {
    SummaryError::Network("connection reset".to_string())
}

fn bad_request_error() -> SummaryError {
    SummaryError::Api {
        status: 400,
        message: "bad prompt".to_string(),
    }
}

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}

fn sample_request() -> CompletionRequest {
    CompletionRequest::new("text-model-1", "Write a profile summary for Alice.")
}

#[test]
fn retryable_failures_are_retried_to_success() {
    let backend = FlakyBackend::new(2, network_error);
    let text =
        complete_with_backoff(&backend, &sample_request(), &fast_policy(6)).expect("succeeds");
    assert_eq!(text, "generated summary");
    assert_eq!(backend.calls(), 3);
}

#[test]
fn non_retryable_failure_returns_after_one_attempt() {
    let backend = FlakyBackend::new(5, bad_request_error);
    let error =
        complete_with_backoff(&backend, &sample_request(), &fast_policy(6)).unwrap_err();
    assert!(matches!(error, SummaryError::Api { status: 400, .. }));
    assert_eq!(backend.calls(), 1);
}

#[test]
fn exhaustion_surfaces_the_last_error() {
    let backend = FlakyBackend::new(u32::MAX, network_error);
    let error =
        complete_with_backoff(&backend, &sample_request(), &fast_policy(3)).unwrap_err();
    match error {
        SummaryError::Exhausted { attempts, source } => {
            assert_eq!(attempts, 3);
            assert!(matches!(*source, SummaryError::Network(_)));
        }
        other => panic!("expected exhaustion, got {other}"),
    }
    assert_eq!(backend.calls(), 3);
}

#[test]
fn server_errors_are_retryable_and_client_errors_are_not() {
    assert!(
        SummaryError::Api {
            status: 503,
            message: String::new()
        }
        .is_retryable()
    );
    assert!(
        !SummaryError::Api {
            status: 404,
            message: String::new()
        }
        .is_retryable()
    );
    assert!(SummaryError::RateLimited { retry_after: 30 }.is_retryable());
    assert!(!SummaryError::MalformedResponse.is_retryable());
}

#[test]
fn submitted_summary_runs_through_the_queue() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let queue: JobQueue<String> =
        JobQueue::start(JobCache::open(tmp.path().join("jobs")).expect("cache"));
    let backend = Arc::new(FlakyBackend::new(1, network_error));

    let handle = submit_summary(
        &queue,
        backend.clone(),
        sample_request(),
        fast_policy(6),
    )
    .expect("submit");
    assert_eq!(handle.wait().expect("summary"), "generated summary");
    assert_eq!(backend.calls(), 2);
}
