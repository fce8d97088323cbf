use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown option for {field}: {value}")]
    UnknownOption { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
