use std::path::{Path, PathBuf};

use plusone_core::OverflowPolicy;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAMES: [&str; 2] = ["plusone.toml", ".plusone.toml"];

/// Configuration for the `plusone` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What incrementing the largest `i64` does
    pub overflow: OverflowPolicy,

    /// How kept values are joined in the output
    pub separator: Separator,

    /// File extensions picked up when walking a directory
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// One value per line
    Newline,
    /// Values on one line, separated by a space
    Space,
    /// Values on one line, separated by a comma and a space
    Comma,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Newline => "\n",
            Separator::Space => " ",
            Separator::Comma => ", ",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Checked,
            separator: Separator::Newline,
            extensions: vec!["ints".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError(msg) => {
                ConfigError::ParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// The first configuration file found in the current directory, its
    /// ancestors, or `~/.config/plusone/`
    pub fn find() -> Option<PathBuf> {
        if let Ok(current_dir) = std::env::current_dir() {
            if let Some(path) = find_in_ancestors(&current_dir) {
                return Some(path);
            }
        }

        let home_config = dirs::home_dir()?.join(".config/plusone/plusone.toml");
        home_config.is_file().then_some(home_config)
    }

    /// Generate a default configuration file content
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

fn find_in_ancestors(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILENAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}
