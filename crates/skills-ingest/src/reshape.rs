//! Wide-to-long reshaping and persona-stream cleanup.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::columns::{
    COL_CATEGORY, COL_CONSULTANT, COL_ID, COL_IMPLEMENTABILITY, COL_PERSONA_STREAM, COL_PURE_COUNT,
    COL_RATING, COL_RELEVANCE, COL_TECHNOLOGY,
};
use crate::error::{IngestError, Result};
use crate::frame::string_column;
use crate::load::MatrixTable;

/// Columns every reshaped frame must carry.
const EXPECTED_COLUMNS: [&str; 7] = [
    COL_ID,
    COL_TECHNOLOGY,
    COL_PERSONA_STREAM,
    COL_CATEGORY,
    COL_RELEVANCE,
    COL_CONSULTANT,
    COL_RATING,
];

/// Melt the per-consultant rating block into long rows.
///
/// Identifier columns run up to and including `relevance`; the rating
/// block is everything between `relevance` and the first summary column.
/// A blank or non-numeric rating cell melts to 0. The summary columns are
/// dropped: the row-level fields are all the pipelines consume.
pub fn melt_ratings(table: &MatrixTable) -> Result<DataFrame> {
    let headers = &table.headers;
    let relevance_idx = headers
        .iter()
        .position(|header| header == COL_RELEVANCE)
        .ok_or_else(|| IngestError::MissingColumn {
            name: COL_RELEVANCE.to_string(),
        })?;
    let block_end = headers
        .iter()
        .position(|header| header == COL_PURE_COUNT || header == COL_IMPLEMENTABILITY)
        .unwrap_or(headers.len());

    let id_indices: Vec<usize> = (0..=relevance_idx).collect();
    let consultant_indices: Vec<usize> = (relevance_idx + 1..block_end).collect();

    let long_height = table.rows.len() * consultant_indices.len();
    let mut id_values: Vec<Vec<String>> = id_indices
        .iter()
        .map(|_| Vec::with_capacity(long_height))
        .collect();
    let mut consultants: Vec<String> = Vec::with_capacity(long_height);
    let mut ratings: Vec<i64> = Vec::with_capacity(long_height);

    for &consultant_idx in &consultant_indices {
        for row in &table.rows {
            for (slot, &id_idx) in id_values.iter_mut().zip(&id_indices) {
                slot.push(row.get(id_idx).cloned().unwrap_or_default());
            }
            consultants.push(headers[consultant_idx].clone());
            let rating = row
                .get(consultant_idx)
                .and_then(|cell| cell.trim().parse::<i64>().ok())
                .unwrap_or(0);
            ratings.push(rating);
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(id_indices.len() + 2);
    for (&id_idx, values) in id_indices.iter().zip(id_values) {
        columns.push(Series::new(headers[id_idx].as_str().into(), values).into());
    }
    columns.push(Series::new(COL_CONSULTANT.into(), consultants).into());
    columns.push(Series::new(COL_RATING.into(), ratings).into());
    DataFrame::new(columns).map_err(Into::into)
}

/// Canonicalize the persona-stream column in place: split on commas,
/// trim, title-case, sort, re-join.
pub fn clean_persona_streams(df: &mut DataFrame) -> Result<()> {
    let cleaned: Vec<String> = string_column(df, COL_PERSONA_STREAM)?
        .iter()
        .map(|raw| normalize_stream_list(raw))
        .collect();
    df.with_column(Series::new(COL_PERSONA_STREAM.into(), cleaned))?;
    Ok(())
}

/// Split a canonical persona-stream cell back into its entries.
pub fn split_streams(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_stream_list(raw: &str) -> String {
    let mut streams: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(title_case_words)
        .collect();
    streams.sort();
    streams.join(", ")
}

fn title_case_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Check the reshaped frame carries the full expected column set.
pub fn validate_columns(df: &DataFrame) -> Result<()> {
    for name in EXPECTED_COLUMNS {
        if df.column(name).is_err() {
            return Err(IngestError::MissingColumn {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
