//! Template resolution, staging, fetching and non-destructive copying
//!
//! This module provides:
//! - Selector resolution into a [`SourcePlan`] (bundled vs. remote)
//! - Staging directory lifecycle for remote archives
//! - Archive fetching and unpacking over HTTP
//! - The no-clobber tree copy used to merge a template into a project

pub mod copier;
pub mod fetcher;
pub mod resolver;
pub mod staging;

pub use copier::materialize;
pub use fetcher::{ArchiveFetcher, HttpArchiveFetcher};
pub use resolver::{resolve, SourcePlan, DEFAULT_TEMPLATE, EXAMPLE_TEMPLATES};
pub use staging::{prepare_staging, remove_staging, staging_dir_for};
