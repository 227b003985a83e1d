//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! depth = 3
//! mobility = "per-piece"   # or "board-wide"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search the engine accepts, in plies.
pub const MAX_DEPTH: u8 = 8;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 3;

/// How the evaluator rewards knight and bishop mobility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MobilityMode {
    /// Each knight and bishop scores the squares it can reach itself.
    #[default]
    PerPiece,
    /// Each knight and bishop scores the side to move's total legal move count.
    BoardWide,
}

impl FromStr for MobilityMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "perpiece" => Ok(MobilityMode::PerPiece),
            "boardwide" => Ok(MobilityMode::BoardWide),
            _ => Err(ConfigError::UnknownMobility(s.to_string())),
        }
    }
}

impl fmt::Display for MobilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MobilityMode::PerPiece => f.write_str("PerPiece"),
            MobilityMode::BoardWide => f.write_str("BoardWide"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("search depth must be between 1 and {max}, got {0}", max = MAX_DEPTH)]
    InvalidDepth(u8),

    #[error("unknown mobility mode '{0}' (expected PerPiece or BoardWide)")]
    UnknownMobility(String),
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fixed search depth in plies
    pub depth: u8,
    /// Mobility heuristic used by the evaluator
    pub mobility: MobilityMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            mobility: MobilityMode::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clone().set_depth(self.depth)
    }

    /// Sets the depth if it is within `1..=MAX_DEPTH`.
    pub fn set_depth(&mut self, depth: u8) -> Result<(), ConfigError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth(depth));
        }
        self.depth = depth;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
