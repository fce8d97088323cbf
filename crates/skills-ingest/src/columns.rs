//! Canonical column names and the header mapping.

/// Row identifier from the source sheet.
pub const COL_ID: &str = "id";
pub const COL_TECHNOLOGY: &str = "technology";
pub const COL_PERSONA_STREAM: &str = "persona_stream";
pub const COL_CATEGORY: &str = "category";
pub const COL_RELEVANCE: &str = "relevance";
/// Added by the melt step.
pub const COL_CONSULTANT: &str = "consultant_name";
/// Added by the melt step.
pub const COL_RATING: &str = "skill_rating";

/// Summary columns that close off the per-consultant rating block.
pub const COL_PURE_COUNT: &str = "pure_count_4_5";
pub const COL_IMPLEMENTABILITY: &str = "implementability";

/// Headers matched verbatim after trimming.
const STRICT_MAPPING: [(&str, &str); 5] = [
    ("ID", COL_ID),
    ("Technology", COL_TECHNOLOGY),
    ("Persona Stream", COL_PERSONA_STREAM),
    ("Platform, Area or Categories", COL_CATEGORY),
    ("Relevance", COL_RELEVANCE),
];

/// Headers matched by case-insensitive substring; the sheet carries long
/// explanatory captions here that shift between revisions.
const LOOSE_MAPPING: [(&str, &str); 2] = [
    ("pure count", COL_PURE_COUNT),
    ("implementability", COL_IMPLEMENTABILITY),
];

/// Map raw sheet headers onto canonical names.
///
/// Unrecognized headers (the per-consultant rating columns) pass through
/// trimmed but otherwise untouched.
pub fn rename_headers(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|raw| {
            let trimmed = raw.trim();
            for (source, canonical) in STRICT_MAPPING {
                if trimmed == source {
                    return canonical.to_string();
                }
            }
            let lowered = trimmed.to_lowercase();
            for (fragment, canonical) in LOOSE_MAPPING {
                if lowered.contains(fragment) {
                    return canonical.to_string();
                }
            }
            trimmed.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_headers_match_verbatim() {
        let headers = vec!["ID".to_string(), "Persona Stream".to_string()];
        assert_eq!(rename_headers(&headers), vec![COL_ID, COL_PERSONA_STREAM]);
    }

    #[test]
    fn loose_headers_match_by_fragment() {
        let headers = vec![
            "Pure count of the number of consultants with ratings of 4 or 5".to_string(),
            "Implementability (delivery categories only)".to_string(),
        ];
        assert_eq!(
            rename_headers(&headers),
            vec![COL_PURE_COUNT, COL_IMPLEMENTABILITY]
        );
    }

    #[test]
    fn consultant_headers_pass_through() {
        let headers = vec!["  Alice Jensen ".to_string()];
        assert_eq!(rename_headers(&headers), vec!["Alice Jensen"]);
    }
}
