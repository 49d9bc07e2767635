// Widget settings
// Loaded from ~/.config/trustable/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE: &str = "https://api.trustablelabs.com/v1";
pub const DEFAULT_SITE_URL: &str = "https://trustablelabs.com";
pub const DEFAULT_SCRIPT_URL: &str = "https://cdn.trustablelabs.com/widget.js";

pub const API_BASE_ENV: &str = "TRUSTABLE_API_BASE";
pub const SITE_URL_ENV: &str = "TRUSTABLE_SITE_URL";
pub const SCRIPT_URL_ENV: &str = "TRUSTABLE_SCRIPT_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: invalid URL {value:?}: {reason}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base of the remote score API; `/score/<brand>` is appended
    #[serde(rename = "api.base")]
    pub api_base: String,

    /// Operator site every widget links back to
    #[serde(rename = "site.url")]
    pub site_url: String,

    /// Where the embeddable script is served from
    #[serde(rename = "script.url")]
    pub script_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trustable")
            .join("settings.json")
    }

    /// Load settings from the default path, then apply environment overrides
    pub fn load() -> Self {
        let mut settings = Self::load_from(&Self::config_path());
        settings.apply_env();
        settings
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Strip comments (lines starting with //)
                let cleaned: String = contents
                    .lines()
                    .filter(|line| !line.trim().starts_with("//"))
                    .collect::<Vec<_>>()
                    .join("\n");

                match serde_json::from_str(&cleaned) {
                    Ok(settings) => settings,
                    Err(e) => {
                        log::warn!("Error parsing {}: {}; using default settings", path.display(), e);
                        Self::default()
                    }
                }
            }
            Err(e) => {
                log::warn!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply `TRUSTABLE_*` environment overrides
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup (tests pass a map)
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty(API_BASE_ENV) {
            self.api_base = v;
        }
        if let Some(v) = non_empty(SITE_URL_ENV) {
            self.site_url = v;
        }
        if let Some(v) = non_empty(SCRIPT_URL_ENV) {
            self.script_url = v;
        }
    }

    /// Check that every configured endpoint is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("api.base", &self.api_base)?;
        check_url("site.url", &self.site_url)?;
        check_url("script.url", &self.script_url)?;
        Ok(())
    }

    /// Save current settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the config file path for display
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }
}

fn check_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
        reason,
    };

    let parsed = url::Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}
