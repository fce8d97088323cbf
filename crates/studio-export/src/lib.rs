//! Export surface of the template builder.
//!
//! Three logical actions exist — deployment template, parameter file,
//! documentation — and each export click routes to exactly one artifact
//! builder. Builders work inside a per-session work directory seeded with
//! pristine clones of the zone templates. Long-running exports go through
//! the shared background job queue so a duplicate click joins the job
//! already in flight.

pub mod builders;
pub mod dispatch;
pub mod doc;
pub mod error;
pub mod jobs;
pub mod workdir;

pub use builders::FileArtifactBuilders;
pub use dispatch::{ArtifactBuilders, ExportAction, ExportRequest, dispatch};
pub use doc::DocContext;
pub use error::{ExportError, Result};
pub use jobs::submit_export;
pub use workdir::{ExportWorkdir, clean_workdirs};
