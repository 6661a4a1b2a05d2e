//! The init pipeline: resolve, stage, materialize, clean up
//!
//! Mirrors the order guarantees of the CLI contract: the fetch completes
//! before the copy starts, the copy completes before staging cleanup, and
//! the first failing stage aborts the rest of the run.

use crate::config::ToolConfig;
use crate::error::InitError;
use crate::progress::Reporter;
use crate::templates::copier;
use crate::templates::fetcher::ArchiveFetcher;
use crate::templates::resolver::{resolve, SourcePlan};
use crate::templates::staging;
use std::path::{Path, PathBuf};

/// Materialize the selected template into `location`
///
/// `location` is resolved against the current working directory. Existing
/// files under the target are never overwritten or removed; re-running
/// against a partially populated directory fills in only what is missing.
///
/// For remote templates the staging directory is cleared, populated by the
/// fetcher, copied into the target and then removed. Cleanup is the last
/// stage of the pipeline and therefore only runs after a successful copy;
/// a failed run may leave the staging directory behind for the next run to
/// clear.
///
/// Returns the absolute target path.
pub async fn init_project<F: ArchiveFetcher>(
    config: &ToolConfig,
    selector: Option<&str>,
    location: &Path,
    fetcher: &F,
    reporter: &dyn Reporter,
) -> Result<PathBuf, InitError> {
    let target = absolutize(location);
    let plan = resolve(config, selector, location)?;

    match plan {
        SourcePlan::Bundled(bundled_dir) => {
            reporter.starting("Copying starter app");
            copier::materialize(&bundled_dir, &target).await?;
            reporter.done();
        }
        SourcePlan::Remote { archive, staging } => {
            reporter.starting(&format!("Downloading {} starter app", archive));
            staging::prepare_staging(&staging).await?;
            fetcher
                .fetch_and_unpack(&archive, &staging)
                .await
                .map_err(|source| InitError::FetchFailure {
                    archive: archive.clone(),
                    source,
                })?;
            reporter.done();

            reporter.starting("Copying starter app");
            copier::materialize(&staging, &target).await?;
            staging::remove_staging(&staging).await?;
            reporter.done();
        }
    }

    Ok(target)
}

fn absolutize(location: &Path) -> PathBuf {
    if location.is_absolute() {
        location.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(location)
    }
}
