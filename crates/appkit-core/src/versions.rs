//! Platform API client for the `versions` command

use crate::config::ToolConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// App metadata returned alongside the version list
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    pub title: String,
}

/// One published version of an app
#[derive(Debug, Clone, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    pub platform_version: String,
    #[serde(default)]
    pub user_count: u64,
    pub deployment: String,
    #[serde(default)]
    pub deprecation_date: Option<String>,
    pub date: String,
}

/// Response of the versions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct VersionsResponse {
    pub app: AppInfo,
    pub versions: Vec<VersionEntry>,
}

/// Thin client for the platform's versions endpoint
pub struct VersionsClient {
    base: Url,
    client: reqwest::Client,
}

impl VersionsClient {
    pub fn new(base: Url, user_agent: &str) -> Self {
        Self {
            base,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub fn from_config(config: &ToolConfig) -> Self {
        Self::new(config.api_url.clone(), config.user_agent())
    }

    /// Fetch the app's published versions
    pub async fn list(&self) -> Result<VersionsResponse> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", self.base))?
            .pop_if_empty()
            .push("versions");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch versions from {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch versions from {}: HTTP {}", url, response.status());
        }

        response
            .json::<VersionsResponse>()
            .await
            .context("Failed to parse versions response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_versions_response() {
        let payload = r#"{
            "app": { "title": "Example" },
            "versions": [
                {
                    "version": "1.0.0",
                    "platform_version": "3.0.0",
                    "user_count": 0,
                    "deployment": "non-production",
                    "deprecation_date": null,
                    "date": "2016-01-01T22:19:36"
                }
            ]
        }"#;

        let parsed: VersionsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.app.title, "Example");
        assert_eq!(parsed.versions.len(), 1);
        let v = &parsed.versions[0];
        assert_eq!(v.version, "1.0.0");
        assert_eq!(v.deployment, "non-production");
        assert!(v.deprecation_date.is_none());
    }

    #[test]
    fn test_parse_empty_version_list() {
        let payload = r#"{ "app": { "title": "Example" }, "versions": [] }"#;
        let parsed: VersionsResponse = serde_json::from_str(payload).unwrap();
        assert!(parsed.versions.is_empty());
    }
}
