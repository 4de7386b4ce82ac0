//! Configuration for terminal output

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::terminfo::Database;
use crate::tty::InputMode;

/// Palette index used by `Tty::print_error` when nothing is configured
pub const DEFAULT_ERROR_COLOR: u8 = 196;

/// How `Tty::goto_prev_eol` picks between relative and absolute movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrevEolMode {
    /// Always cursor-up then cursor-right
    #[default]
    Relative,
    /// Follow the strategy the capability registry computed
    Advisory,
    /// Absolute addressing whenever the terminal supports it
    Direct,
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input mode to put stdin in at init
    pub input_mode: InputMode,
    /// Resolve strategies for multi-step operations
    pub advanced_caps: bool,
    /// Previous-line-end movement
    pub prev_eol: PrevEolMode,
    /// Palette index for error labels
    pub error_color: u8,
    /// Terminal type to use instead of `$TERM`
    pub term: Option<String>,
    /// Ask the terminal where the cursor is after entering non-canonical mode
    pub query_position: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_mode: InputMode::NonCanonical,
            advanced_caps: true,
            prev_eol: PrevEolMode::Relative,
            error_color: DEFAULT_ERROR_COLOR,
            term: None,
            query_position: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // ~/.config/mochi-tty/config.json
        if let Some(config_path) = default_config_path() {
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring config file");
                    }
                }
            }
        }
        Self::default()
    }

    /// Resolve the terminfo database, honoring the `term` override
    pub fn database(&self) -> Database {
        match self.term.as_deref() {
            Some(term) => Database::from_term(Some(term)),
            None => Database::from_env(),
        }
    }
}

/// Path of the default configuration file
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("mochi-tty")
            .join("config.json")
    })
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
