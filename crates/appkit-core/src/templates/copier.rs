//! Non-destructive template copying
//!
//! The copier merges a source tree into the target directory and never
//! overwrites anything: a file or directory already present at a target
//! path is skipped entirely. Re-running with a partially populated target
//! fills in only the missing pieces.

use crate::error::InitError;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Copy every file under `source` to the same relative path under `target`
///
/// The target directory (and any missing intermediate directories) are
/// created as needed; creating a directory that already exists is not an
/// error. Existing files are left untouched, whatever their content.
/// Returns the relative paths that were actually written.
///
/// A filesystem error aborts the run; files already copied stay in place.
/// Partial progress is strictly additive, so it is incomplete rather than
/// harmful.
pub async fn materialize(source: &Path, target: &Path) -> Result<Vec<PathBuf>, InitError> {
    fs::create_dir_all(target)
        .await
        .map_err(InitError::io(target))?;

    let mut copied = Vec::new();

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            let source_err = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            InitError::IoFailure {
                path,
                source: source_err,
            }
        })?;

        if entry.file_type().is_dir() {
            continue; // directories materialize on demand below
        }

        let rel = entry
            .path()
            .strip_prefix(source)
            .expect("walked entries are rooted at source")
            .to_path_buf();
        let dest = target.join(&rel);

        // Hard no-clobber rule: anything already at the destination path,
        // file or directory, wins over the template.
        if fs::symlink_metadata(&dest).await.is_ok() {
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(InitError::io(parent))?;
        }

        fs::copy(entry.path(), &dest)
            .await
            .map_err(InitError::io(dest.as_path()))?;

        copied.push(rel);
    }

    Ok(copied)
}
