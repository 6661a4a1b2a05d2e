//! Error kinds surfaced by the init pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a single init invocation
///
/// No kind is retried; the first failure aborts the remaining pipeline
/// stages. Partial state left behind (a half-populated target, a stale
/// staging directory) is incomplete but never corrupting, because the
/// copier only ever adds files.
#[derive(Debug, Error)]
pub enum InitError {
    /// Selector not in the accepted set. The CLI restricts the option to
    /// known values, so reaching this means a programming error upstream
    /// rather than user input.
    #[error("unrecognized template '{0}'")]
    InvalidTemplate(String),

    /// The download/unzip collaborator failed to populate the staging
    /// directory
    #[error("failed to fetch starter app archive '{archive}'")]
    FetchFailure {
        archive: String,
        #[source]
        source: anyhow::Error,
    },

    /// A local filesystem operation (remove, create, read, write) failed
    #[error("filesystem operation failed on {path}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InitError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::IoFailure { path, source }
    }
}
