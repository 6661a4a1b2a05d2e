//! Example-app archive fetching and unpacking
//!
//! Remote templates are published as zip archives named after the example
//! app. The fetcher downloads the archive and unpacks it into the staging
//! directory; the rest of the pipeline only sees the resulting tree.

use crate::config::ToolConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};
use url::Url;
use zip::ZipArchive;

/// Populates a destination directory with a template tree, or fails
///
/// The init pipeline treats this as a black box: on success the
/// destination holds a usable template, on failure the pipeline aborts
/// before anything touches the target directory.
#[async_trait]
pub trait ArchiveFetcher {
    async fn fetch_and_unpack(&self, archive: &str, dest: &Path) -> Result<()>;
}

/// Fetcher downloading `{base}/{archive}.zip` over HTTP
pub struct HttpArchiveFetcher {
    base: Url,
    client: reqwest::Client,
}

impl HttpArchiveFetcher {
    /// Create a fetcher with a custom user agent
    pub fn new(base: Url, user_agent: &str) -> Self {
        Self {
            base,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from the tool config
    pub fn from_config(config: &ToolConfig) -> Self {
        Self::new(config.template_url.clone(), config.user_agent())
    }

    /// Build a URL by appending a path segment, preserving query parameters
    fn build_url(base: &Url, path_segment: &str) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
            .pop_if_empty()
            .push(path_segment);
        Ok(url)
    }
}

#[async_trait]
impl ArchiveFetcher for HttpArchiveFetcher {
    async fn fetch_and_unpack(&self, archive: &str, dest: &Path) -> Result<()> {
        let zip_url = Self::build_url(&self.base, &format!("{}.zip", archive))?;
        let response = self
            .client
            .get(zip_url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch archive from {}", zip_url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to fetch archive '{}' from {}: HTTP {}",
                archive,
                zip_url,
                response.status()
            );
        }

        let zip_bytes = response.bytes().await?.to_vec();
        unpack_zip(&zip_bytes, dest)
            .with_context(|| format!("Failed to unpack archive '{}'", archive))
    }
}

/// Unpack a zip archive into `dest`
///
/// Archives are commonly rooted at a single top-level directory (the
/// archive name); that shared root is stripped so the template tree lands
/// directly in `dest`. Entries that would escape `dest` are rejected.
pub fn unpack_zip(zip_bytes: &[u8], dest: &Path) -> Result<()> {
    let cursor = Cursor::new(zip_bytes);
    let mut zip = ZipArchive::new(cursor).context("Failed to read zip archive")?;

    let root = shared_root(&mut zip)?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(raw_path) = entry.enclosed_name() else {
            anyhow::bail!("Archive entry '{}' has an unsafe path", entry.name());
        };

        let rel: PathBuf = match &root {
            Some(prefix) => raw_path
                .strip_prefix(prefix)
                .map(Path::to_path_buf)
                .unwrap_or(raw_path),
            None => raw_path,
        };
        if rel.as_os_str().is_empty() {
            continue;
        }

        let out = dest.join(&rel);
        if entry.is_dir() {
            std::fs::create_dir_all(&out)?;
            continue;
        }

        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents)?;
        std::fs::write(&out, &contents)
            .with_context(|| format!("Failed to write {}", out.display()))?;
    }

    Ok(())
}

/// Find the single top-level directory all entries live under, if any
fn shared_root<R: Read + std::io::Seek>(zip: &mut ZipArchive<R>) -> Result<Option<PathBuf>> {
    let mut root: Option<PathBuf> = None;
    for i in 0..zip.len() {
        let entry = zip.by_index(i)?;
        let Some(path) = entry.enclosed_name() else {
            continue;
        };
        let Some(Component::Normal(first)) = path.components().next() else {
            return Ok(None);
        };
        // A top-level file means there is no shared root to strip
        if path.components().count() == 1 && !entry.is_dir() {
            return Ok(None);
        }
        match &root {
            None => root = Some(PathBuf::from(first)),
            Some(existing) if existing.as_os_str() == first => {}
            Some(_) => return Ok(None),
        }
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            for (path, content) in entries {
                zip.start_file(*path, options).unwrap();
                zip.write_all(content.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_unpack_strips_shared_root() {
        let bytes = build_zip(&[
            ("appkit-example-app-httpbin/index.js", "module.exports = {};\n"),
            ("appkit-example-app-httpbin/package.json", "{}\n"),
            ("appkit-example-app-httpbin/src/app.js", "// app\n"),
        ]);
        let dest = tempfile::tempdir().unwrap();

        unpack_zip(&bytes, dest.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.path().join("index.js")).unwrap(),
            "module.exports = {};\n"
        );
        assert_eq!(
            std::fs::read_to_string(dest.path().join("src/app.js")).unwrap(),
            "// app\n"
        );
        assert!(!dest.path().join("appkit-example-app-httpbin").exists());
    }

    #[test]
    fn test_unpack_without_shared_root() {
        let bytes = build_zip(&[("index.js", "top-level\n"), ("src/app.js", "// app\n")]);
        let dest = tempfile::tempdir().unwrap();

        unpack_zip(&bytes, dest.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.path().join("index.js")).unwrap(),
            "top-level\n"
        );
        assert_eq!(
            std::fs::read_to_string(dest.path().join("src/app.js")).unwrap(),
            "// app\n"
        );
    }

    #[test]
    fn test_build_url_appends_segment() {
        let base = Url::parse("https://cdn.example.com/example-apps").unwrap();
        let url = HttpArchiveFetcher::build_url(&base, "appkit-example-app-write.zip").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/example-apps/appkit-example-app-write.zip"
        );
    }
}
