//! CSV loading for the skills matrix export.

use std::path::Path;

use tracing::info;

use crate::columns::rename_headers;
use crate::error::{IngestError, Result};
use crate::reshape::{clean_persona_streams, melt_ratings, validate_columns};

/// Raw sheet contents: headers plus string cells, one vector per row.
#[derive(Debug, Clone)]
pub struct MatrixTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Read the matrix export as-is, without header mapping.
pub fn read_matrix_csv(path: &Path) -> Result<MatrixTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row: Vec<String> = record.iter().map(normalize_cell).collect();
        // Ragged exports happen; align every row to the header width.
        row.resize(headers.len(), String::new());
        rows.push(row);
    }
    Ok(MatrixTable { headers, rows })
}

/// Load, reshape and validate a skills matrix export.
///
/// Produces the long frame the pipelines consume: one row per
/// (technology, consultant) with a single integer rating.
pub fn load_matrix(path: &Path) -> Result<polars::prelude::DataFrame> {
    let mut table = read_matrix_csv(path)?;
    table.headers = rename_headers(&table.headers);
    let mut df = melt_ratings(&table)?;
    clean_persona_streams(&mut df)?;
    validate_columns(&df)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        "skills matrix loaded"
    );
    Ok(df)
}
