use std::path::PathBuf;

use studio_model::Zone;

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    /// An override referenced a parameter the base template does not
    /// declare. Configuration drift between template and override list;
    /// fatal to the export attempt.
    #[error("parameter '{key}' does not exist in the {zone:?} base template")]
    MissingTemplateKey { zone: Zone, key: String },

    /// Landing-zone assembly was requested without the landing settings
    /// block.
    #[error("landing settings are required to assemble landing parameters")]
    MissingLandingSettings,

    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name} template: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ParamsError>;
