//! Multi-select and range filtering.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use serde::{Deserialize, Serialize};

use skills_ingest::reshape::split_streams;
use skills_ingest::{
    COL_CATEGORY, COL_CONSULTANT, COL_PERSONA_STREAM, COL_RATING, COL_RELEVANCE, COL_TECHNOLOGY,
    i64_column, string_column,
};

use crate::error::Result;

/// Inclusive rating bounds from the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: i64,
    pub max: i64,
}

impl RatingRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, rating: i64) -> bool {
        rating >= self.min && rating <= self.max
    }
}

/// The transient state of every filter widget.
///
/// An empty vector means "no filter applied" for that column, never an
/// error and never an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub persona_streams: Vec<String>,
    pub categories: Vec<String>,
    pub relevance: Vec<String>,
    pub technologies: Vec<String>,
    pub consultants: Vec<String>,
    pub rating: Option<RatingRange>,
}

impl FilterSelection {
    /// True when every widget is in its pass-through state.
    pub fn is_pass_through(&self) -> bool {
        self.persona_streams.is_empty()
            && self.categories.is_empty()
            && self.relevance.is_empty()
            && self.technologies.is_empty()
            && self.consultants.is_empty()
            && self.rating.is_none()
    }
}

/// Apply the selection to the long frame.
///
/// Equality semantics for category, relevance, technology and consultant;
/// any-overlap semantics for the persona-stream multi-select; inclusive
/// bounds for the rating range.
pub fn apply_filters(df: &DataFrame, selection: &FilterSelection) -> Result<DataFrame> {
    if selection.is_pass_through() {
        return Ok(df.clone());
    }

    let mut keep = vec![true; df.height()];
    restrict_equals(df, COL_CATEGORY, &selection.categories, &mut keep)?;
    restrict_equals(df, COL_RELEVANCE, &selection.relevance, &mut keep)?;
    restrict_equals(df, COL_TECHNOLOGY, &selection.technologies, &mut keep)?;
    restrict_equals(df, COL_CONSULTANT, &selection.consultants, &mut keep)?;
    restrict_streams(df, &selection.persona_streams, &mut keep)?;
    if let Some(range) = selection.rating {
        let ratings = i64_column(df, COL_RATING)?;
        for (slot, rating) in keep.iter_mut().zip(ratings) {
            *slot = *slot && range.contains(rating);
        }
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    df.filter(&mask).map_err(Into::into)
}

fn restrict_equals(
    df: &DataFrame,
    column: &str,
    selected: &[String],
    keep: &mut [bool],
) -> Result<()> {
    if selected.is_empty() {
        return Ok(());
    }
    let values = string_column(df, column)?;
    for (slot, value) in keep.iter_mut().zip(values) {
        *slot = *slot && selected.iter().any(|candidate| candidate == &value);
    }
    Ok(())
}

fn restrict_streams(df: &DataFrame, selected: &[String], keep: &mut [bool]) -> Result<()> {
    if selected.is_empty() {
        return Ok(());
    }
    let values = string_column(df, COL_PERSONA_STREAM)?;
    for (slot, value) in keep.iter_mut().zip(values) {
        let streams = split_streams(&value);
        *slot = *slot
            && streams
                .iter()
                .any(|stream| selected.iter().any(|candidate| candidate == stream));
    }
    Ok(())
}
