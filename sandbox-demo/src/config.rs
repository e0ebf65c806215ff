//! Demo configuration, read from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use sandbox::widgets::autocomplete::HoverMode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::paths;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// Bounds of the demo slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 5,
        }
    }
}

/// Settings of the demo page. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Quiet time before a typed search query runs.
    pub debounce_ms: u64,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub log_file: PathBuf,
    /// Pool searched by the autocomplete. Kept as raw JSON so a bad entry
    /// shows up as a search error in the page instead of a parse failure.
    pub candidates: Vec<Value>,
    /// `interactive` mirrors hovered rows into the text, `highlight_only`
    /// does not.
    pub hover_mode: HoverMode,
    pub slider: SliderConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            log_level: "debug".to_string(),
            log_file: PathBuf::from("sandbox-demo.log"),
            candidates: vec![
                json!("Tadej Pogačar"),
                json!("Jonas Vingegaard"),
                json!("Remco Evenepoel"),
                json!("Primož Roglič"),
            ],
            hover_mode: HoverMode::default(),
            slider: SliderConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load from `path`, or from the platform config file when `path` is
    /// `None`. A missing platform file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match paths::config_file() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
