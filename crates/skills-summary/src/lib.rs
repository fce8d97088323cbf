//! Text summaries for the skills matrix.
//!
//! Prompts are assembled from the long frame, then a completion backend
//! turns them into prose. The single external call sits behind a capped
//! exponential retry with random jitter; exhaustion surfaces the last
//! error in place of the generated text, with no partial fallback.

pub mod client;
pub mod error;
pub mod jobs;
pub mod prompt;
pub mod retry;

pub use client::{CompletionBackend, CompletionRequest, HttpCompletionClient};
pub use error::{Result, SummaryError};
pub use jobs::submit_summary;
pub use prompt::{capability_prompt, profile_prompt};
pub use retry::{RetryPolicy, complete_with_backoff};
