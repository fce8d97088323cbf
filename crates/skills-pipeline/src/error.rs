use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Ingest(#[from] skills_ingest::IngestError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
