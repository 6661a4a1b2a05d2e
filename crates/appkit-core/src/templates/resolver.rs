//! Template selector resolution
//!
//! Turns the selector string into an explicit plan consumed uniformly by
//! the rest of the pipeline. Resolution is pure: no filesystem or network
//! access happens here.

use crate::config::ToolConfig;
use crate::error::InitError;
use crate::templates::staging::staging_dir_for;
use std::path::{Path, PathBuf};

/// Selector value designating the bundled default template
pub const DEFAULT_TEMPLATE: &str = "minimal";

/// Named example-app archives accepted by the CLI surface
pub const EXAMPLE_TEMPLATES: &[&str] = &["middleware", "write", "resource", "search", "httpbin"];

/// Where the template files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePlan {
    /// Copy straight out of the template directory shipped with the tool
    Bundled(PathBuf),

    /// Download and unpack `archive` into `staging`, then copy from there
    Remote { archive: String, staging: PathBuf },
}

/// Resolve a template selector into a [`SourcePlan`]
///
/// An absent selector means the bundled default. The staging path for a
/// remote plan is derived from the target location, so repeated runs
/// against the same target reuse the same staging path (it is cleared
/// before every fetch).
///
/// The CLI restricts the selector to the accepted set before this runs; an
/// unrecognized value still fails with [`InitError::InvalidTemplate`]
/// rather than silently falling back to the default.
pub fn resolve(
    config: &ToolConfig,
    selector: Option<&str>,
    location: &Path,
) -> Result<SourcePlan, InitError> {
    match selector.unwrap_or(DEFAULT_TEMPLATE) {
        DEFAULT_TEMPLATE => Ok(SourcePlan::Bundled(config.bundled_template_dir.clone())),
        name if EXAMPLE_TEMPLATES.contains(&name) => Ok(SourcePlan::Remote {
            archive: format!("{}-example-app-{}", config.name, name),
            staging: staging_dir_for(config.name, location),
        }),
        other => Err(InitError::InvalidTemplate(other.to_string())),
    }
}
