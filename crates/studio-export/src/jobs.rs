//! Export execution through the shared background queue.

use std::path::PathBuf;

use studio_jobs::{JobHandle, JobKey, JobQueue};
use studio_params::BaseTemplates;

use crate::builders::FileArtifactBuilders;
use crate::dispatch::{ExportAction, ExportRequest, dispatch};
use crate::error::Result;
use crate::workdir::ExportWorkdir;

/// Submit an export to the queue.
///
/// The job key covers the action and the full request, so clicking the
/// same control twice with unchanged form state joins the job already in
/// flight (and a repeat of a finished export resolves from the cache).
pub fn submit_export(
    queue: &JobQueue<PathBuf>,
    export_root: PathBuf,
    templates: BaseTemplates,
    action: ExportAction,
    request: ExportRequest,
) -> Result<JobHandle<PathBuf>> {
    let key = JobKey::derive("export", &(action, &request))?;
    Ok(queue.submit(key, move || {
        let workdir = ExportWorkdir::create(&export_root, &templates)?;
        dispatch(action, &request, &workdir, &FileArtifactBuilders::new())
    }))
}
