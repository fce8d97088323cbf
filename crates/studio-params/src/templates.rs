//! Base template loading.
//!
//! The two zone templates ship embedded in the crate so an export session
//! can always clone a pristine copy. A directory loader exists for working
//! on template changes without rebuilding.

use std::fs;
use std::path::Path;

use studio_model::Zone;

use crate::document::ParameterDocument;
use crate::error::{ParamsError, Result};

/// Tenant-id placeholder the templates carry until an explicit value is
/// supplied at export time.
pub const PLACEHOLDER_TENANT_ID: &str = "00000000-0000-0000-0000-000000000000";

const PERIMETER_TEMPLATE: &str = include_str!("../templates/perimeter.parameters.json");
const LANDING_TEMPLATE: &str = include_str!("../templates/landing.parameters.json");

/// The unmodified per-zone parameter documents.
#[derive(Debug, Clone)]
pub struct BaseTemplates {
    perimeter: ParameterDocument,
    landing: ParameterDocument,
}

impl BaseTemplates {
    pub fn new(perimeter: ParameterDocument, landing: ParameterDocument) -> Self {
        Self { perimeter, landing }
    }

    /// The templates compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            perimeter: parse_template("perimeter", PERIMETER_TEMPLATE)?,
            landing: parse_template("landing", LANDING_TEMPLATE)?,
        })
    }

    /// Load `perimeter.parameters.json` and `landing.parameters.json`
    /// from a directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Ok(Self {
            perimeter: parse_template("perimeter", &read_template(dir, "perimeter")?)?,
            landing: parse_template("landing", &read_template(dir, "landing")?)?,
        })
    }

    pub fn document(&self, zone: Zone) -> &ParameterDocument {
        match zone {
            Zone::Perimeter => &self.perimeter,
            Zone::Landing => &self.landing,
        }
    }

    /// Deep copy for one export session; the shared template is never
    /// mutated.
    pub fn clone_for(&self, zone: Zone) -> ParameterDocument {
        self.document(zone).clone()
    }
}

fn read_template(dir: &Path, zone: &str) -> Result<String> {
    let path = dir.join(format!("{zone}.parameters.json"));
    fs::read_to_string(&path).map_err(|source| ParamsError::Io { path, source })
}

fn parse_template(name: &'static str, raw: &str) -> Result<ParameterDocument> {
    serde_json::from_str(raw).map_err(|source| ParamsError::Template { name, source })
}
