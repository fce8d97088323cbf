use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    /// The job closure returned an error; the message is preserved.
    #[error("job failed: {0}")]
    Failed(String),

    /// The queue worker has shut down and can no longer accept work.
    #[error("job queue is shut down")]
    QueueClosed,

    #[error("failed to access job cache {path}: {source}")]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode job cache record {path}: {source}")]
    CacheDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode job cache record: {0}")]
    CacheEncode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JobError>;
