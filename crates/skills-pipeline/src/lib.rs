//! Filter and aggregate pipelines behind the skills matrix views.
//!
//! Every view is reactive and stateless: widget changes rebuild a
//! [`FilterSelection`] and the view recomputes from the read-only long
//! frame. Empty multi-selects pass rows through; empty *results* surface
//! as [`QueryOutcome::NothingFound`] so the presentation layer can say so
//! instead of rendering an empty chart.

pub mod compare;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod outcome;
pub mod search;

pub use compare::{ComparisonRow, ComparisonView, compare_consultants};
pub use coverage::{CoverageRow, SliceWindow, capability_coverage};
pub use error::{PipelineError, Result};
pub use filter::{FilterSelection, RatingRange, apply_filters};
pub use outcome::QueryOutcome;
pub use search::{SearchRow, SearchView, search_technologies};
