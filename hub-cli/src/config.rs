use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use data_genai::{prompts::DEFAULT_THINKING_BUDGET, GeminiConfig, GEMINI_API};
use data_profile::GITHUB_API;
use serde::{Deserialize, Serialize};

use crate::AppError;

const CONFIG_FOLDER: &str = "achievements-hub";
const CONFIG_FILE: &str = "config.toml";

pub const CONFIG_KEYS: &[&str] = &[
    "api_key",
    "premium_api_key",
    "genai_base_url",
    "github_base_url",
    "thinking_budget",
    "catalog_path",
    "user_agent",
];

/// User settings, persisted as TOML.
///
/// Storage location is the platform config directory, e.g.
/// `$XDG_CONFIG_HOME/achievements-hub/config.toml` on Linux. Keys from the
/// environment (`GEMINI_API_KEY`, falling back to `API_KEY`, and
/// `GEMINI_PREMIUM_API_KEY`) take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub api_key: Option<String>,
    pub premium_api_key: Option<String>,
    pub genai_base_url: Option<String>,
    pub github_base_url: Option<String>,
    pub thinking_budget: Option<u32>,
    pub catalog_path: Option<PathBuf>,
    pub user_agent: Option<String>,
}

impl HubConfig {
    pub fn config_dir() -> Result<PathBuf, AppError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_FOLDER))
            .ok_or(AppError::ConfigDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, AppError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Resolve the file to use: `explicit` if given, the default location
    /// otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load from `path`. A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!(
                "config: {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).with_context(|| {
            format!("Failed to read config file: {}", path.display())
        })?;
        let config: HubConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Load from `explicit` or the default location, then apply
    /// environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        let path = Self::resolve(explicit)?;
        let mut config = Self::load_from(&path)
            .map_err(|e| AppError::ConfigLoadError(format!("{:#}", e)))?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Saves the configuration, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).with_context(|| {
                    format!(
                        "Failed to create config directory: {}",
                        dir.display()
                    )
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize config")?;
        fs::write(path, content).with_context(|| {
            format!("Failed to write config file: {}", path.display())
        })?;

        Ok(())
    }

    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let key = present("GEMINI_API_KEY").or_else(|| present("API_KEY"));
        if let Some(key) = key {
            self.api_key = Some(key);
        }
        if let Some(key) = present("GEMINI_PREMIUM_API_KEY") {
            self.premium_api_key = Some(key);
        }
    }

    /// Assign one key from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let text = || Some(value.to_owned());
        match key {
            "api_key" => self.api_key = text(),
            "premium_api_key" => self.premium_api_key = text(),
            "genai_base_url" => self.genai_base_url = text(),
            "github_base_url" => self.github_base_url = text(),
            "user_agent" => self.user_agent = text(),
            "catalog_path" => self.catalog_path = Some(PathBuf::from(value)),
            "thinking_budget" => {
                let budget = value.parse().map_err(|_| {
                    AppError::ConfigLoadError(format!(
                        "thinking_budget must be a number, got {:?}",
                        value
                    ))
                })?;
                self.thinking_budget = Some(budget);
            }
            other => return Err(AppError::UnknownConfigKey(other.to_owned())),
        }
        Ok(())
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.api_key.clone(),
            premium_api_key: self.premium_api_key.clone(),
            base_url: self
                .genai_base_url
                .clone()
                .unwrap_or_else(|| GEMINI_API.to_owned()),
            thinking_budget: self
                .thinking_budget
                .unwrap_or(DEFAULT_THINKING_BUDGET),
        }
    }

    pub fn github_base_url(&self) -> &str {
        self.github_base_url.as_deref().unwrap_or(GITHUB_API)
    }
}

/// Show a secret without revealing it.
pub fn mask(secret: &Option<String>) -> String {
    match secret {
        None => "(not set)".to_owned(),
        Some(secret) => {
            let tail: String = secret
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            if secret.chars().count() <= 4 {
                "****".to_owned()
            } else {
                format!("****{}", tail)
            }
        }
    }
}
