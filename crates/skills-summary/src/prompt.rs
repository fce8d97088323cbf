//! Prompt assembly from the long frame.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use skills_ingest::{COL_RATING, COL_TECHNOLOGY, i64_column, string_column};
use skills_pipeline::{FilterSelection, RatingRange, apply_filters};

use crate::error::Result;

/// Relevance tags that mark a technology worth mentioning.
const ACTIVE_RELEVANCE: [&str; 2] = ["Focus", "Red Hot"];

/// Minimum rating for a technology to count towards a profile.
const PROFILE_MIN_RATING: i64 = 3;

/// Minimum rating for a (consultant, technology) pair to count as
/// capability coverage.
const CAPABILITY_MIN_RATING: i64 = 4;

/// Below this many qualifying rows the capability pool is too thin to
/// summarize.
const CAPABILITY_MIN_POOL: usize = 10;

const MAX_RATING: i64 = 5;

/// Build the profile prompt for one consultant.
///
/// Collects the consultant's active technologies rated at least
/// [`PROFILE_MIN_RATING`]; returns `None` when nothing qualifies.
pub fn profile_prompt(
    df: &DataFrame,
    consultant: &str,
    word_limit: usize,
) -> Result<Option<String>> {
    let selection = FilterSelection {
        relevance: ACTIVE_RELEVANCE.iter().map(|tag| (*tag).to_string()).collect(),
        consultants: vec![consultant.to_string()],
        rating: Some(RatingRange::new(PROFILE_MIN_RATING, MAX_RATING)),
        ..FilterSelection::default()
    };
    let qualified = apply_filters(df, &selection)?;
    let mut technologies = string_column(&qualified, COL_TECHNOLOGY)?;
    technologies.retain(|technology| !technology.is_empty());
    technologies.dedup();
    if technologies.is_empty() {
        return Ok(None);
    }

    let prompt = format!(
        "{name} is proficient in the following technologies: {list}. \
         {name} works as a consultant in the data and analytics industry. \
         Write a profile summary for {name} in {limit} words or less, \
         without naming the listed technologies.",
        name = consultant,
        list = technologies.join(", "),
        limit = word_limit,
    );
    Ok(Some(prompt))
}

/// Build the capability prompt for a set of persona streams.
///
/// Counts skilled consultants per technology across the streams; returns
/// `None` when fewer than [`CAPABILITY_MIN_POOL`] rows qualify.
pub fn capability_prompt(
    df: &DataFrame,
    persona_streams: &[String],
    word_limit: usize,
) -> Result<Option<String>> {
    let selection = FilterSelection {
        persona_streams: persona_streams.to_vec(),
        relevance: ACTIVE_RELEVANCE.iter().map(|tag| (*tag).to_string()).collect(),
        rating: Some(RatingRange::new(CAPABILITY_MIN_RATING, MAX_RATING)),
        ..FilterSelection::default()
    };
    let pool = apply_filters(df, &selection)?;
    if pool.height() < CAPABILITY_MIN_POOL {
        return Ok(None);
    }

    let technologies = string_column(&pool, COL_TECHNOLOGY)?;
    let ratings = i64_column(&pool, COL_RATING)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for (technology, _) in technologies.into_iter().zip(ratings) {
        if !technology.is_empty() {
            *counts.entry(technology).or_insert(0) += 1;
        }
    }
    let table = counts
        .iter()
        .map(|(technology, count)| format!("{technology} {count}"))
        .collect::<Vec<String>>()
        .join("\n");

    let capability = persona_streams.join(", ");
    let prompt = format!(
        "Below is a list of technology names, each followed by the number \
         of consultants skilled in it for the \"{capability}\" capability.\n\
         {table}\n\
         Give an overview of the technology areas with enough coverage, \
         identify current and potential skill gaps, and recommend emerging \
         technologies to upskill in for the \"{capability}\" capability. \
         Answer in {word_limit} words or less.",
    );
    Ok(Some(prompt))
}
