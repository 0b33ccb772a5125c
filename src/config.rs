use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::API_BASE;
use crate::pagination::PageType;

const APP_DIR: &str = "ouraterm";
const CONFIG_FILE: &str = "config.yml";
const TOKEN_ENV: &str = "OURA_ACCESS_TOKEN";

/// Widget settings, read from a YAML block such as:
///
/// ```yaml
/// accessToken: MFKOR3Z4WHJ7XBHURYSJNSZ7DMCYH7P2
/// myName: Me
/// days: 4
/// pages: [sleep, readiness]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub access_token: String,
    pub my_name: String,
    pub days: u32,
    pub title: String,
    pub pages: Vec<String>,
    /// Seconds between automatic refreshes.
    pub refresh_interval: u64,
    pub api_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            my_name: "My Oura".to_string(),
            days: 3,
            title: "Oura 💍".to_string(),
            pages: PageType::ALL.iter().map(|p| p.name().to_string()).collect(),
            refresh_interval: 300,
            api_base: API_BASE.to_string(),
        }
    }
}

impl Settings {
    /// Loads from `path`, or from the default location when `None`.
    /// Only an explicitly named file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    tracing::info!("no settings file found, using defaults");
                    Self::default()
                }
            },
        };

        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                settings.access_token = token;
            }
        }
        if settings.access_token.is_empty() {
            tracing::warn!("no access token configured; requests will be rejected");
        }

        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn refresh_every(&self) -> Duration {
        Duration::from_secs(self.refresh_interval.max(1))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join(APP_DIR);

        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
