//! Tool configuration threaded explicitly through the pipeline
//!
//! Every stage that needs product identity (staging namespace, archive
//! naming, base URLs) receives a `ToolConfig` as a parameter instead of
//! reading ambient process state.

use std::path::PathBuf;
use url::Url;

/// Environment variable overriding the remote template base URL
pub const TEMPLATE_URL_ENV: &str = "APPKIT_TEMPLATE_URL";

/// Environment variable overriding the platform API base URL
pub const API_URL_ENV: &str = "APPKIT_API_URL";

/// Default base URL the example-app archives are fetched from
pub const DEFAULT_TEMPLATE_URL: &str = "https://cdn.appkit.dev/example-apps";

/// Default base URL of the platform API
pub const DEFAULT_API_URL: &str = "https://api.appkit.dev/v1";

/// Configuration for one CLI invocation
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Internal tool name, used for the staging namespace, archive naming
    /// and the HTTP user agent
    pub name: &'static str,

    /// Base URL example-app zip archives are fetched from
    pub template_url: Url,

    /// Base URL of the platform API (versions endpoint)
    pub api_url: Url,

    /// Directory holding the bundled default template
    pub bundled_template_dir: PathBuf,
}

impl ToolConfig {
    /// Build the standard config, honoring the URL override env vars the
    /// same way for both the template source and the API.
    pub fn new(bundled_template_dir: PathBuf) -> anyhow::Result<Self> {
        Ok(Self {
            name: "appkit",
            template_url: url_from_env(TEMPLATE_URL_ENV, DEFAULT_TEMPLATE_URL)?,
            api_url: url_from_env(API_URL_ENV, DEFAULT_API_URL)?,
            bundled_template_dir,
        })
    }

    /// User agent string for HTTP requests
    pub fn user_agent(&self) -> &'static str {
        self.name
    }
}

fn url_from_env(env_var: &str, default: &str) -> anyhow::Result<Url> {
    let url_str = std::env::var(env_var).unwrap_or_else(|_| default.to_string());
    Url::parse(&url_str).map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", url_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ToolConfig {
        ToolConfig {
            name: "appkit",
            template_url: Url::parse(DEFAULT_TEMPLATE_URL).unwrap(),
            api_url: Url::parse(DEFAULT_API_URL).unwrap(),
            bundled_template_dir: PathBuf::from("templates/minimal"),
        }
    }

    #[test]
    fn test_defaults_parse() {
        let config = test_config();
        assert_eq!(config.user_agent(), "appkit");
        assert!(config.template_url.as_str().starts_with("https://"));
    }
}
