use std::{collections::HashMap, fs, path::Path};

use url::Url;

use crate::error::LoadError;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const CONFIG_FILE: &str = "params_editor.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub api_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

impl EditorConfig {
    /// Command line values win over everything else.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(v) = api_url {
            self.api_url = v;
        }
        self
    }

    /// Parses `api_url` and normalizes it to a directory-style base so that
    /// endpoint paths are appended rather than replacing the last segment.
    pub fn base_url(&self) -> Result<Url, LoadError> {
        parse_base_url(&self.api_url)
    }
}

pub fn load_config() -> EditorConfig {
    load_config_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
}

/// Default, then `path` (if it exists), then environment.
pub fn load_config_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> EditorConfig {
    let mut config = EditorConfig::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_url") {
                    config.api_url = v.clone();
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable config file: {err}");
            }
        }
    }

    if let Some(v) = env("PARAMS_EDITOR_API_URL") {
        config.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        config.api_url = v;
    }

    config
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url, LoadError> {
    let invalid = |reason: String| LoadError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
