//! The workspace's own artifact builders.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use studio_model::Zone;
use studio_params::ParameterDocument;

use crate::dispatch::ArtifactBuilders;
use crate::doc::DocContext;
use crate::error::ExportError;
use crate::workdir::ExportWorkdir;

/// File-writing builders placing artifacts in the session's `out/`
/// directory.
#[derive(Debug, Default)]
pub struct FileArtifactBuilders;

impl FileArtifactBuilders {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactBuilders for FileArtifactBuilders {
    /// The deployment template: the pristine zone document seeded into
    /// the session directory, republished under the template name.
    fn build_template(&self, zone: Zone, workdir: &ExportWorkdir) -> anyhow::Result<PathBuf> {
        let seeded = workdir.seeded_parameters_path(zone);
        let target = workdir
            .out_dir()
            .join(format!("{}.template.json", zone.as_str()));
        fs::copy(&seeded, &target).map_err(|source| ExportError::io(&target, source))?;
        info!(zone = zone.as_str(), path = %target.display(), "template artifact built");
        Ok(target)
    }

    fn build_parameters(
        &self,
        zone: Zone,
        workdir: &ExportWorkdir,
        parameters: &ParameterDocument,
    ) -> anyhow::Result<PathBuf> {
        let target = workdir
            .out_dir()
            .join(format!("{}.parameters.json", zone.as_str()));
        fs::write(&target, parameters.to_pretty_json()?)
            .map_err(|source| ExportError::io(&target, source))?;
        info!(zone = zone.as_str(), path = %target.display(), "parameter artifact built");
        Ok(target)
    }

    fn build_documentation(
        &self,
        zone: Zone,
        workdir: &ExportWorkdir,
        context: &DocContext,
    ) -> anyhow::Result<PathBuf> {
        let target = workdir
            .out_dir()
            .join(format!("{}-deployment.md", zone.as_str()));
        fs::write(&target, render_documentation(zone, context))
            .map_err(|source| ExportError::io(&target, source))?;
        info!(zone = zone.as_str(), path = %target.display(), "documentation artifact built");
        Ok(target)
    }
}

fn render_documentation(zone: Zone, context: &DocContext) -> String {
    let mut out = String::new();
    let title = match zone {
        Zone::Perimeter => format!("{} perimeter zone deployment", context.project),
        Zone::Landing => format!("{} landing zone deployment", context.zone_title),
    };
    out.push_str(&format!("# {title}\n\n"));
    out.push_str(&format!(
        "Prepared for {} by {} on {}.\n\n",
        context.client,
        context.author,
        context.date.format("%d/%m/%Y")
    ));
    out.push_str("## Platform\n\n");
    out.push_str(&format!("- Organisation: `{}`\n", context.organisation));
    out.push_str(&format!(
        "- Project: {} ({})\n",
        context.project, context.project_acronym
    ));
    out.push_str(&format!("- Location: `{}`\n\n", context.location));
    out.push_str("## Network\n\n");
    out.push_str(&format!("- IP range: `{}`\n", context.ip_range));
    out.push_str(&format!("- Virtual network prefix: `/{}`\n", context.vnet_suffix));
    out.push_str(&format!("- Default subnet prefix: `/{}`\n", context.subnet_suffix));
    if zone == Zone::Landing {
        out.push_str("\n## Storage\n\n");
        out.push_str(&format!("- Zone identifier: `{}`\n", context.zone_name));
        out.push_str(&format!("- Raw data lake: `{}`\n", context.storage_raw_name));
        out.push_str(&format!(
            "- Curated data lake: `{}`\n",
            context.storage_curated_name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_context() -> DocContext {
        DocContext {
            client: "Northwind".to_string(),
            author: "Dana".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            organisation: "exp".to_string(),
            project: "Modern Data Platform".to_string(),
            project_acronym: "MDP".to_string(),
            location: "westeurope".to_string(),
            ip_range: "10.20.0.0".to_string(),
            vnet_suffix: "16".to_string(),
            subnet_suffix: "24".to_string(),
            zone_name: "sales01".to_string(),
            zone_title: "Sales01".to_string(),
            storage_raw_name: "raw1".to_string(),
            storage_curated_name: "cur1".to_string(),
        }
    }

    #[test]
    fn landing_documentation_includes_the_storage_section() {
        let rendered = render_documentation(Zone::Landing, &sample_context());
        assert!(rendered.starts_with("# Sales01 landing zone deployment"));
        assert!(rendered.contains("Raw data lake: `raw1`"));
        assert!(rendered.contains("01/03/2024"));
    }

    #[test]
    fn perimeter_documentation_skips_the_storage_section() {
        let rendered = render_documentation(Zone::Perimeter, &sample_context());
        assert!(rendered.contains("perimeter zone deployment"));
        assert!(!rendered.contains("## Storage"));
    }
}
