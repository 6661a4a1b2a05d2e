//! Staging directory lifecycle for remotely fetched templates
//!
//! A staging directory lives under the platform temp root, namespaced by
//! the tool name and the target location. It is owned by exactly one
//! invocation: cleared before the fetch, consumed by the copier, removed
//! after a successful copy.

use crate::error::InitError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Compute the staging directory for a target location
///
/// The location string is flattened into a single path component so that
/// absolute paths and nested locations stay inside the tool's namespace.
pub fn staging_dir_for(tool_name: &str, location: &Path) -> PathBuf {
    let flat: String = location
        .to_string_lossy()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            other => other,
        })
        .collect();
    std::env::temp_dir().join(tool_name).join(flat)
}

/// Clear and recreate the staging directory
///
/// Stale content from a prior failed run is removed first; a missing
/// directory is not an error.
pub async fn prepare_staging(path: &Path) -> Result<(), InitError> {
    match fs::remove_dir_all(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(InitError::io(path)(e)),
    }
    fs::create_dir_all(path).await.map_err(InitError::io(path))
}

/// Remove the staging directory in its entirety
pub async fn remove_staging(path: &Path) -> Result<(), InitError> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(InitError::io(path)(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_dir_is_namespaced() {
        let dir = staging_dir_for("appkit", Path::new("my-app"));
        assert!(dir.starts_with(std::env::temp_dir().join("appkit")));
        assert!(dir.ends_with("my-app"));
    }

    #[test]
    fn test_location_separators_are_flattened() {
        let dir = staging_dir_for("appkit", Path::new("/home/dev/my-app"));
        let leaf = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(leaf, "-home-dev-my-app");
        // Still inside the tool namespace despite the absolute location
        assert!(dir.starts_with(std::env::temp_dir().join("appkit")));
    }

    #[tokio::test]
    async fn test_prepare_clears_stale_content() {
        let root = tempfile::tempdir().unwrap();
        let staging = root.path().join("staging");
        std::fs::create_dir_all(staging.join("old")).unwrap();
        std::fs::write(staging.join("old/leftover.txt"), "stale").unwrap();

        prepare_staging(&staging).await.unwrap();

        assert!(staging.is_dir());
        assert_eq!(std::fs::read_dir(&staging).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_prepare_tolerates_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let staging = root.path().join("never-created");

        prepare_staging(&staging).await.unwrap();

        assert!(staging.is_dir());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let staging = root.path().join("staging");
        std::fs::create_dir_all(&staging).unwrap();

        remove_staging(&staging).await.unwrap();
        remove_staging(&staging).await.unwrap();

        assert!(!staging.exists());
    }
}
