//! Parameter documents and the export assembler.
//!
//! A [`ParameterDocument`] is the nested key-value file a deployment
//! consumes: a schema header plus named parameters wrapped in `{ "value" }`
//! objects. Each export session deep-clones the zone's base template and
//! the assembler overwrites existing parameters from the validated form.
//! Overrides only ever replace names the template already declares.

pub mod assemble;
pub mod document;
pub mod error;
pub mod settings;
pub mod templates;

pub use assemble::assemble_parameters;
pub use document::ParameterDocument;
pub use error::{ParamsError, Result};
pub use settings::{
    CommonSettings, DeploymentSettings, GovernanceSettings, IngestSettings, LandingSettings,
    MonitoringSettings, NetworkSettings, ReleaseStamp, StorageSettings, WarehouseSettings,
};
pub use templates::{BaseTemplates, PLACEHOLDER_TENANT_ID};
