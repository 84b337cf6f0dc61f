//! Engine configuration and its persistence
//!
//! Loads and saves [`EngineConfig`] as JSON. Every field has a default and
//! the struct is `#[serde(default)]`, so a partial file only overrides what
//! it names.
//!
//! # File Location
//!
//! [`EngineConfig::load_or_default`] reads `engine.json` from the user's
//! configuration directory, falling back to `engine.json` in the working
//! directory when no such directory can be resolved.
//!
//! # Error Handling
//!
//! - `load_from` / `save_to` return [`CoreError`](crate::core::CoreError) to the caller
//! - `load_or_default` logs failures and falls back to defaults

use crate::core::error::CoreResult;
use crate::game::ai::AiDifficulty;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config filename
const CONFIG_FILENAME: &str = "engine.json";

/// Presentation delay before the computer replies, in milliseconds
pub const DEFAULT_AI_DELAY_MS: u64 = 800;

/// Random piece picks the computer makes before giving up
pub const DEFAULT_RANDOM_MOVE_ATTEMPTS: u32 = 100;

/// How a side with no legal moves is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoMoveRule {
    /// Checkmate needs check; no moves without check ends the game as stalemate
    #[default]
    Strict,
    /// No moves without check is left undeclared; a computer side that cannot
    /// find a move concedes checkmate
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay between a human move and the computer's reply
    pub ai_delay_ms: u64,
    /// Bound on random piece picks in the computer's fallback step
    pub random_move_attempts: u32,
    pub difficulty: AiDifficulty,
    /// Fixed seed for the computer's random choices; `None` seeds from the OS
    pub rng_seed: Option<u64>,
    pub no_move_rule: NoMoveRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            random_move_attempts: DEFAULT_RANDOM_MOVE_ATTEMPTS,
            difficulty: AiDifficulty::default(),
            rng_seed: None,
            no_move_rule: NoMoveRule::default(),
        }
    }
}

impl EngineConfig {
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Read a config file
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Write this config as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::info!("[CONFIG] Saved config to {:?}", path);
        Ok(())
    }

    /// Load from the default location, or defaults if absent or invalid
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(&config_path())
    }

    /// Load from `path`, or defaults if absent or invalid
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("[CONFIG] Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!(
                    "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Self::default()
            }
        }
    }
}

/// Resolve the config file path in the user's configuration directory
pub fn config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess-rules") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}
