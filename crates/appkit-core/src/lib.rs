//! AppKit Core - Shared library for the `appkit` CLI
//!
//! This library provides the functionality behind the CLI's two commands:
//!
//! - `init`: materialize a starter app template into a target directory
//!   without ever overwriting files that are already there
//! - `versions`: fetch the published versions of an app from the platform
//!   API for table rendering by the binary
//!
//! # Architecture
//!
//! The init pipeline is a linear sequence of fallible stages:
//!
//! 1. [`templates::resolve`] turns the template selector into a
//!    [`templates::SourcePlan`] (bundled directory vs. remote archive)
//! 2. For remote plans, the staging directory is cleared and repopulated by
//!    an [`templates::ArchiveFetcher`]
//! 3. [`templates::materialize`] merges the source tree into the target,
//!    skipping anything that already exists
//! 4. The staging directory is removed once the copy succeeds
//!
//! Each stage awaits completion before the next begins; no stage is retried
//! and the first failure aborts the rest of the pipeline.

pub mod config;
pub mod error;
pub mod init;
pub mod progress;
pub mod templates;
pub mod versions;

// Re-export main types for convenience
pub use config::ToolConfig;
pub use error::InitError;
pub use init::init_project;
pub use progress::{NullReporter, Reporter};
pub use templates::{
    materialize, resolve, ArchiveFetcher, HttpArchiveFetcher, SourcePlan, DEFAULT_TEMPLATE,
    EXAMPLE_TEMPLATES,
};
pub use versions::{AppInfo, VersionEntry, VersionsClient, VersionsResponse};
