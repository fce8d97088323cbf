use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion API rate limited, retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    #[error("completion response carried no message content")]
    MalformedResponse,

    #[error("retries exhausted after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Box<SummaryError>,
    },

    #[error(transparent)]
    Ingest(#[from] skills_ingest::IngestError),

    #[error(transparent)]
    Pipeline(#[from] skills_pipeline::PipelineError),

    #[error(transparent)]
    Job(#[from] studio_jobs::JobError),
}

impl SummaryError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
