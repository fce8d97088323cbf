//! Capability coverage aggregation.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

use skills_ingest::{COL_TECHNOLOGY, string_column};

use crate::error::Result;
use crate::filter::{FilterSelection, apply_filters};
use crate::outcome::QueryOutcome;

/// How many qualifying (consultant, technology) pairs a technology has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRow {
    pub technology: String,
    pub consultants: usize,
}

/// The `[start, end)` slice selected by the two slider handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceWindow {
    pub start: usize,
    pub end: usize,
}

impl SliceWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Count qualifying pairs per technology and return the windowed slice.
///
/// Rows are ordered by count descending, then technology ascending, so
/// the window's low end holds the best-covered technologies.
pub fn capability_coverage(
    df: &DataFrame,
    selection: &FilterSelection,
    window: SliceWindow,
) -> Result<QueryOutcome<Vec<CoverageRow>>> {
    let filtered = apply_filters(df, selection)?;
    if filtered.height() == 0 {
        return Ok(QueryOutcome::NothingFound);
    }

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for technology in string_column(&filtered, COL_TECHNOLOGY)? {
        if technology.is_empty() {
            continue;
        }
        *counts.entry(technology).or_insert(0) += 1;
    }

    let mut rows: Vec<CoverageRow> = counts
        .into_iter()
        .map(|(technology, consultants)| CoverageRow {
            technology,
            consultants,
        })
        .collect();
    // BTreeMap iteration already orders technologies; a stable sort on
    // the count keeps that as the tie-break.
    rows.sort_by(|a, b| b.consultants.cmp(&a.consultants));

    let start = window.start.min(rows.len());
    let end = window.end.min(rows.len());
    let windowed: Vec<CoverageRow> = rows[start..start.max(end)].to_vec();
    debug!(total = rows.len(), shown = windowed.len(), "coverage view built");
    if windowed.is_empty() {
        return Ok(QueryOutcome::NothingFound);
    }
    Ok(QueryOutcome::Matches(windowed))
}
