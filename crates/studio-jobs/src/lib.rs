//! Background jobs for long-running dashboard callbacks.
//!
//! One worker thread drains submissions in order, so job execution is
//! serialized the same way the dashboard serializes callback invocation.
//! Submissions are keyed by a hash of their invocation; re-submitting a
//! key that is already pending or running hands back the in-flight
//! handle, and a key whose result is already on disk resolves immediately
//! without re-running the job. Widget disabling while a job is pending or
//! running is the embedder's reaction to [`JobState`], not part of the
//! queue contract. There is no cancellation.

pub mod cache;
pub mod error;
pub mod handle;
pub mod key;
pub mod queue;

pub use cache::JobCache;
pub use error::{JobError, Result};
pub use handle::{JobHandle, JobState};
pub use key::JobKey;
pub use queue::JobQueue;
