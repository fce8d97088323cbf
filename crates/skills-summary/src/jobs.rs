//! Summary generation through the shared background queue.

use std::sync::Arc;

use studio_jobs::{JobHandle, JobKey, JobQueue};

use crate::client::{CompletionBackend, CompletionRequest};
use crate::error::Result;
use crate::retry::{RetryPolicy, complete_with_backoff};

/// Submit a summary generation to the queue.
///
/// The key covers the full request, so a duplicate click while a
/// generation for the same prompt is in flight joins the running job.
pub fn submit_summary(
    queue: &JobQueue<String>,
    backend: Arc<dyn CompletionBackend + Send + Sync>,
    request: CompletionRequest,
    policy: RetryPolicy,
) -> Result<JobHandle<String>> {
    let key = JobKey::derive("summary", &request)?;
    Ok(queue.submit(key, move || {
        complete_with_backoff(backend.as_ref(), &request, &policy).map_err(Into::into)
    }))
}
