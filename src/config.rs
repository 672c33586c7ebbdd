use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::backend::POLL_INTERVAL;
use crate::validation::validate_base_url;

// Default configuration
pub const DEFAULT_BASE_URL: &str = "https://hotpink-connect-backend.onrender.com";
pub const BASE_URL_ENV: &str = "HOTPINK_API_BASE_URL";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Values remembered between runs
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Store address; `None` means the built-in default
    pub base_url: Option<String>,
    pub current_user: String,
    pub recipient: String,
}

/// Resolved runtime configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl ChatConfig {
    /// Resolve from the environment, then the settings file, then the default.
    pub fn resolve(settings: &Settings) -> Self {
        Self::resolve_with(settings, env::var(BASE_URL_ENV).ok())
    }

    fn resolve_with(settings: &Settings, env_base_url: Option<String>) -> Self {
        let candidates = [
            (BASE_URL_ENV, env_base_url),
            ("settings", settings.base_url.clone()),
        ];

        let base_url = candidates
            .into_iter()
            .filter_map(|(source, url)| url.map(|u| (source, u.trim().to_string())))
            .find(|(source, url)| match validate_base_url(url) {
                Ok(()) => true,
                Err(e) => {
                    warn!(%source, error = %e, "ignoring base URL");
                    false
                }
            })
            .map(|(_, url)| url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval: POLL_INTERVAL,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::resolve_with(&Settings::default(), None)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "hotpink", "hotpink-connect") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            warn!(error = %e, "failed to create config dir");
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            None
        }
    }
}

pub fn save_settings(settings: &Settings) -> io::Result<()> {
    if let Some(path) = settings_path() {
        save_settings_to(&path, settings)?;
    }
    Ok(())
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    let data = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
