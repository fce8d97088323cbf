//! Routing from an export trigger to one artifact builder.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use studio_model::Zone;
use studio_params::ParameterDocument;

use crate::doc::DocContext;
use crate::error::ExportError;
use crate::workdir::ExportWorkdir;

/// Which of the three export controls fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportAction {
    Template,
    Parameters,
    Documentation,
}

/// One export click's worth of state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub zone: Zone,
    /// The assembled parameter document for the target zone.
    pub parameters: ParameterDocument,
    /// Present only when the documentation toggle is on.
    pub documentation: Option<DocContext>,
}

/// The three artifact producers. Implementations are collaborators; the
/// dispatcher never looks inside them.
pub trait ArtifactBuilders {
    fn build_template(&self, zone: Zone, workdir: &ExportWorkdir) -> anyhow::Result<PathBuf>;

    fn build_parameters(
        &self,
        zone: Zone,
        workdir: &ExportWorkdir,
        parameters: &ParameterDocument,
    ) -> anyhow::Result<PathBuf>;

    fn build_documentation(
        &self,
        zone: Zone,
        workdir: &ExportWorkdir,
        context: &DocContext,
    ) -> anyhow::Result<PathBuf>;
}

/// Invoke exactly one builder for the action that fired.
///
/// Pure routing: no business logic, no fallbacks.
pub fn dispatch(
    action: ExportAction,
    request: &ExportRequest,
    workdir: &ExportWorkdir,
    builders: &dyn ArtifactBuilders,
) -> anyhow::Result<PathBuf> {
    match action {
        ExportAction::Template => builders.build_template(request.zone, workdir),
        ExportAction::Parameters => {
            builders.build_parameters(request.zone, workdir, &request.parameters)
        }
        ExportAction::Documentation => {
            let context = request
                .documentation
                .as_ref()
                .ok_or(ExportError::MissingDocumentationContext)?;
            builders.build_documentation(request.zone, workdir, context)
        }
    }
}
