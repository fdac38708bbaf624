// User configuration, loaded from a YAML file with sensible defaults

use crate::scan::DEFAULT_MARKERS;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_QUOTE_URL: &str = "https://type.fit/api/quotes";

/// Tunable settings. Every field has a default, so a config file only needs to
/// mention the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the tasks file
    pub tasks_file: PathBuf,
    /// Marker substrings recognized by the file scanner
    pub markers: Vec<String>,
    /// Endpoint for the random quote fetch
    pub quote_url: String,
    /// Pomodoro work duration
    pub pomodoro_minutes: u64,
    /// Short break duration
    pub short_break_minutes: u64,
    /// Long break duration
    pub long_break_minutes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from("tasks.json"),
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            pomodoro_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

impl Config {
    /// Default config file location under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskpad").join("config.yaml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried and an absent file simply yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::load_from(explicit),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from(&default),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
