//! Configuration system for the LS-8 interpreter.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine settings (entry point, stack placement).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Loading:** JSON parsing from strings or files.
//!
//! Every field has a default, so `Config::default()` and `{}` are both complete configurations.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::DEFAULT_STACK_TOP;

/// Default configuration constants.
mod defaults {
    /// Address execution starts from.
    pub const START_PC: u8 = 0;

    /// Stack top used by the RAM-backed stack model.
    pub const STACK_TOP: u8 = super::DEFAULT_STACK_TOP;
}

/// Placement of the PUSH/POP call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StackMode {
    /// Unbounded stack held outside main memory.
    #[default]
    #[serde(alias = "growable", alias = "GROWABLE")]
    Growable,
    /// Stack in main memory below `stack_top`, with `R7` as the stack pointer.
    ///
    /// Matches the placement used by real LS-8 programs.
    #[serde(alias = "ram", alias = "RAM")]
    Ram,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::{Config, StackMode};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "stack": "Ram", "stack_top": 240 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.stack, StackMode::Ram);
/// assert_eq!(config.memory.stack_top, 240);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory and stack settings
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Send a state snapshot to the trace sink before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (the program entry point)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Memory and stack settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Stack placement
    #[serde(default)]
    pub stack: StackMode,

    /// Initial stack pointer for `StackMode::Ram`; the first PUSH writes to `stack_top - 1`
    #[serde(default = "MemoryConfig::default_stack_top")]
    pub stack_top: u8,
}

impl MemoryConfig {
    /// Returns the default stack top.
    const fn default_stack_top() -> u8 {
        defaults::STACK_TOP
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            stack: StackMode::default(),
            stack_top: defaults::STACK_TOP,
        }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&text)?)
    }
}
