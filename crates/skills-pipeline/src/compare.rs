//! Two-consultant comparison with top-N expansion.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::debug;

use skills_ingest::{COL_CONSULTANT, COL_RATING, COL_TECHNOLOGY, i64_column, string_column};

use crate::error::Result;
use crate::filter::{FilterSelection, apply_filters};
use crate::outcome::QueryOutcome;

/// One chart point: a consultant's rating for a technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub consultant: String,
    pub technology: String,
    pub rating: i64,
}

/// Both consultants' rows over the shared technology axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonView {
    /// Union of the two top-N technology lists, first consultant's
    /// entries leading.
    pub technologies: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

/// Compare two consultants over their top-rated technologies.
///
/// Each consultant's rows are ordered by rating descending — ties keep
/// the pre-existing row order — and cut to `top_n`. The chart axis is the
/// union of both cuts, so a technology only one of them surfaced still
/// appears on the other side, with that consultant's actual rating or 0.
pub fn compare_consultants(
    df: &DataFrame,
    pair: (&str, &str),
    top_n: usize,
    selection: &FilterSelection,
) -> Result<QueryOutcome<ComparisonView>> {
    let mut restricted = selection.clone();
    restricted.consultants = vec![pair.0.to_string(), pair.1.to_string()];
    let filtered = apply_filters(df, &restricted)?;
    if filtered.height() == 0 {
        return Ok(QueryOutcome::NothingFound);
    }

    let technologies = string_column(&filtered, COL_TECHNOLOGY)?;
    let consultants = string_column(&filtered, COL_CONSULTANT)?;
    let ratings = i64_column(&filtered, COL_RATING)?;

    // First occurrence wins if a pair repeats in the source sheet.
    let mut by_consultant: BTreeMap<&str, Vec<(String, i64)>> = BTreeMap::new();
    let mut known: BTreeMap<(&str, String), i64> = BTreeMap::new();
    for ((technology, consultant), rating) in
        technologies.iter().zip(&consultants).zip(&ratings)
    {
        let side = if consultant.as_str() == pair.0 {
            pair.0
        } else {
            pair.1
        };
        if known.contains_key(&(side, technology.clone())) {
            continue;
        }
        known.insert((side, technology.clone()), *rating);
        by_consultant
            .entry(side)
            .or_default()
            .push((technology.clone(), *rating));
    }

    let mut axis: Vec<String> = Vec::new();
    for side in [pair.0, pair.1] {
        let mut rows = by_consultant.get(side).cloned().unwrap_or_default();
        // Stable: equal ratings keep their sheet order.
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        for (technology, _) in rows.into_iter().take(top_n) {
            if !axis.contains(&technology) {
                axis.push(technology);
            }
        }
    }
    if axis.is_empty() {
        return Ok(QueryOutcome::NothingFound);
    }

    let mut rows = Vec::with_capacity(axis.len() * 2);
    for side in [pair.0, pair.1] {
        for technology in &axis {
            let rating = known
                .get(&(side, technology.clone()))
                .copied()
                .unwrap_or(0);
            rows.push(ComparisonRow {
                consultant: side.to_string(),
                technology: technology.clone(),
                rating,
            });
        }
    }
    debug!(axis = axis.len(), "comparison view built");
    Ok(QueryOutcome::Matches(ComparisonView {
        technologies: axis,
        rows,
    }))
}
