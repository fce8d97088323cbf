//! Skills matrix ingestion.
//!
//! The source spreadsheet is wide: one row per technology with a rating
//! column per consultant. Downstream pipelines work on the long format,
//! one row per (technology, consultant) pair. This crate owns the reshape:
//!
//! - **columns**: canonical names plus the strict/loose header mapping
//! - **reshape**: melting rating columns and persona-stream cleanup
//! - **frame**: DataFrame column extraction helpers
//! - **load**: the CSV entry point producing a validated long frame

pub mod columns;
pub mod error;
pub mod frame;
pub mod load;
pub mod reshape;

pub use columns::{
    COL_CATEGORY, COL_CONSULTANT, COL_ID, COL_PERSONA_STREAM, COL_RATING, COL_RELEVANCE,
    COL_TECHNOLOGY, rename_headers,
};
pub use error::{IngestError, Result};
pub use frame::{i64_column, string_column};
pub use load::{MatrixTable, load_matrix, read_matrix_csv};
pub use reshape::{clean_persona_streams, melt_ratings, validate_columns};
