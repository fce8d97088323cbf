//! Documentation context assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use studio_params::DeploymentSettings;

/// Everything the documentation artifact interpolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocContext {
    pub client: String,
    pub author: String,
    pub date: NaiveDate,
    pub organisation: String,
    pub project: String,
    /// First letters of the project words, uppercased.
    pub project_acronym: String,
    pub location: String,
    pub ip_range: String,
    pub vnet_suffix: String,
    pub subnet_suffix: String,
    /// Lowercase zone name for resource identifiers; empty for perimeter
    /// exports.
    pub zone_name: String,
    /// Title-case zone name for headings.
    pub zone_title: String,
    pub storage_raw_name: String,
    pub storage_curated_name: String,
}

impl DocContext {
    /// Assemble the context from the validated deployment settings.
    pub fn from_settings(
        client: &str,
        author: &str,
        date: NaiveDate,
        settings: &DeploymentSettings,
    ) -> Self {
        let common = &settings.common;
        let (zone_name, zone_title, storage_raw_name, storage_curated_name) =
            match settings.landing.as_ref() {
                Some(landing) => (
                    landing.zone_name.to_lowercase(),
                    title_case(&landing.zone_name),
                    landing.storage.raw_name.clone(),
                    landing.storage.curated_name.clone(),
                ),
                None => (String::new(), String::new(), String::new(), String::new()),
            };
        Self {
            client: client.to_string(),
            author: author.to_string(),
            date,
            organisation: common.organisation.to_lowercase(),
            project: common.project.clone(),
            project_acronym: acronym(&common.project),
            location: common.location.as_str().to_string(),
            ip_range: common.network.ip_range.clone(),
            vnet_suffix: common.network.vnet_suffix.as_str().to_string(),
            subnet_suffix: common.network.subnet_suffix.as_str().to_string(),
            zone_name,
            zone_title,
            storage_raw_name,
            storage_curated_name,
        }
    }
}

/// First letter of every whitespace-separated word, uppercased.
fn acronym(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn title_case(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronym_skips_extra_whitespace() {
        assert_eq!(acronym("modern  data platform"), "MDP");
        assert_eq!(acronym(""), "");
    }

    #[test]
    fn title_case_normalizes_mixed_input() {
        assert_eq!(title_case("SALES01"), "Sales01");
        assert_eq!(title_case("sales01"), "Sales01");
    }
}
