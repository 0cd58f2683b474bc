//! Resolution of the directory service base URL.
//!
//! First match wins: `--api-url`, `FRIENDS_API_URL`, `config.json` in the
//! platform config directory, then [`ApiUrl::DEFAULT`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use friends_core::ApiUrl;

/// Environment variable holding the base URL.
pub const API_URL_ENV: &str = "FRIENDS_API_URL";

/// Contents of `config.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api_url: Option<String>,
}

/// Get the config file path.
fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "friends").map(|dirs| dirs.config_dir().join("config.json"))
}

/// Read `api_url` from a config file. A missing file is not an error.
fn load_file_config(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: FileConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    Ok(config.api_url)
}

/// Pick the base URL from the available sources.
fn resolve(flag: Option<&str>, env: Option<&str>, file: Option<&str>) -> Result<ApiUrl> {
    let (source, value) = match (flag, env, file) {
        (Some(v), _, _) => ("flag", v),
        (None, Some(v), _) => ("environment", v),
        (None, None, Some(v)) => ("config file", v),
        (None, None, None) => return Ok(ApiUrl::default()),
    };

    debug!(source, url = value, "Resolved API URL");
    ApiUrl::new(value).with_context(|| format!("Invalid API URL from {}", source))
}

/// Resolve the base URL for this invocation.
pub fn resolve_api_url(flag: Option<&str>) -> Result<ApiUrl> {
    let env = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());

    // Only touch the filesystem when nothing more specific was given
    let file = if flag.is_none() && env.is_none() {
        match config_path() {
            Some(path) => load_file_config(&path)?,
            None => None,
        }
    } else {
        None
    };

    resolve(flag, env.as_deref(), file.as_deref())
}
