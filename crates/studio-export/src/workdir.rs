//! Per-session export work directories.
//!
//! Each export session gets a fresh directory under the export root,
//! seeded with pristine clones of both zone parameter documents. The
//! directories persist until the next [`clean_workdirs`] sweep so the
//! produced download links stay valid after the session callback returns.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use studio_model::Zone;
use studio_params::BaseTemplates;

use crate::error::{ExportError, Result};

const WORKDIR_PREFIX: &str = "export-";

/// A seeded export session directory.
#[derive(Debug, Clone)]
pub struct ExportWorkdir {
    dir: PathBuf,
    key: String,
}

impl ExportWorkdir {
    /// Create a session directory under `root` and seed it with clones of
    /// both zone templates.
    pub fn create(root: &Path, templates: &BaseTemplates) -> Result<Self> {
        fs::create_dir_all(root).map_err(|source| ExportError::io(root, source))?;
        let dir = tempfile::Builder::new()
            .prefix(WORKDIR_PREFIX)
            .tempdir_in(root)
            .map_err(|source| ExportError::io(root, source))?
            .keep();
        let key = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let workdir = Self { dir, key };
        for zone in [Zone::Perimeter, Zone::Landing] {
            let seeded = templates.clone_for(zone);
            let path = workdir.seeded_parameters_path(zone);
            fs::write(&path, seeded.to_pretty_json()?)
                .map_err(|source| ExportError::io(&path, source))?;
        }
        let out = workdir.out_dir();
        fs::create_dir_all(&out).map_err(|source| ExportError::io(&out, source))?;
        debug!(key = %workdir.key, "export workdir seeded");
        Ok(workdir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Session key, the directory name under the export root.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Where the pristine clone of a zone's parameter document lives.
    pub fn seeded_parameters_path(&self, zone: Zone) -> PathBuf {
        self.dir.join(format!("{}.parameters.json", zone.as_str()))
    }

    /// Where builders place produced artifacts.
    pub fn out_dir(&self) -> PathBuf {
        self.dir.join("out")
    }
}

/// Remove every leftover session directory under the export root.
///
/// Returns the number of directories removed. Unknown entries are left
/// alone.
pub fn clean_workdirs(root: &Path) -> Result<usize> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(source) => return Err(ExportError::io(root, source)),
    };
    let mut removed = 0;
    for entry in entries {
        let entry = entry.map_err(|source| ExportError::io(root, source))?;
        let path = entry.path();
        let is_session_dir = path.is_dir()
            && entry
                .file_name()
                .to_string_lossy()
                .starts_with(WORKDIR_PREFIX);
        if is_session_dir {
            fs::remove_dir_all(&path).map_err(|source| ExportError::io(&path, source))?;
            removed += 1;
        }
    }
    debug!(removed, "export workdirs cleaned");
    Ok(removed)
}
