//! Technology search.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use skills_ingest::{
    COL_CATEGORY, COL_CONSULTANT, COL_RATING, COL_RELEVANCE, COL_TECHNOLOGY, i64_column,
    string_column,
};

use crate::error::Result;
use crate::filter::{FilterSelection, apply_filters};
use crate::outcome::QueryOutcome;

/// One matching row for the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRow {
    pub technology: String,
    pub consultant: String,
    pub rating: i64,
    pub category: String,
    pub relevance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchView {
    pub rows: Vec<SearchRow>,
    /// How many different consultants matched.
    pub distinct_consultants: usize,
}

/// Search matching rows, ordered by technology ascending, rating
/// descending, consultant ascending.
pub fn search_technologies(
    df: &DataFrame,
    selection: &FilterSelection,
) -> Result<QueryOutcome<SearchView>> {
    let filtered = apply_filters(df, selection)?;
    if filtered.height() == 0 {
        return Ok(QueryOutcome::NothingFound);
    }

    let technologies = string_column(&filtered, COL_TECHNOLOGY)?;
    let consultants = string_column(&filtered, COL_CONSULTANT)?;
    let ratings = i64_column(&filtered, COL_RATING)?;
    let categories = string_column(&filtered, COL_CATEGORY)?;
    let relevance = string_column(&filtered, COL_RELEVANCE)?;

    let mut rows: Vec<SearchRow> = (0..filtered.height())
        .map(|idx| SearchRow {
            technology: technologies[idx].clone(),
            consultant: consultants[idx].clone(),
            rating: ratings[idx],
            category: categories[idx].clone(),
            relevance: relevance[idx].clone(),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.technology
            .cmp(&b.technology)
            .then(b.rating.cmp(&a.rating))
            .then(a.consultant.cmp(&b.consultant))
    });

    let distinct_consultants = rows
        .iter()
        .map(|row| row.consultant.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    Ok(QueryOutcome::Matches(SearchView {
        rows,
        distinct_consultants,
    }))
}
