//! Configuration system for the Turtle16 simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (reset length, memory sizes, bank register).
//! 2. **Structures:** Hierarchical config for general settings and memory.
//! 3. **Loading:** Parsing from JSON text or a JSON file on disk.
//!
//! Every field has a serde default, so an empty document (`{}`) yields `Config::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of cycles the reset line is held asserted.
    pub const RESET_CYCLES: u32 = crate::common::constants::RESET_CYCLES;

    /// Size of data RAM in 16-bit words (the whole 64 Ki address space).
    pub const RAM_WORDS: usize = crate::common::constants::ADDRESS_SPACE_WORDS;

    /// Size of instruction memory in 16-bit words.
    pub const INSTRUCTION_WORDS: usize = crate::common::constants::ADDRESS_SPACE_WORDS;

    /// Data address of the memory-mapped bank select register.
    ///
    /// A store to this address latches the low three bits of the stored
    /// value as the current bank.
    pub const BANK_REGISTER: u16 = 0xffff;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use turtle16_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_pipeline": true, "reset_cycles": 4 },
///     "memory": { "ram_words": 1024 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_pipeline);
/// assert_eq!(config.general.reset_cycles, 4);
/// assert_eq!(config.memory.ram_words, 1024);
/// assert_eq!(config.memory.bank_register, 0xffff);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON text; missing sections and fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or [`SimError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the JSON file.
    ///
    /// # Returns
    ///
    /// The parsed configuration, [`SimError::Io`] if the file cannot be read,
    /// or [`SimError::Parse`] if it is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a per-cycle pipeline trace through `tracing` at trace level.
    #[serde(default)]
    pub trace_pipeline: bool,

    /// Number of cycles `reset()` holds the reset line asserted.
    #[serde(default = "GeneralConfig::default_reset_cycles")]
    pub reset_cycles: u32,
}

impl GeneralConfig {
    fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_pipeline: false,
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}

/// Instruction and data memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Data RAM size in words. Reads past the end return 0 and writes are dropped.
    #[serde(default = "MemoryConfig::default_ram_words")]
    pub ram_words: usize,

    /// Maximum program length in words.
    #[serde(default = "MemoryConfig::default_instruction_words")]
    pub instruction_words: usize,

    /// Data address of the bank select register.
    #[serde(default = "MemoryConfig::default_bank_register")]
    pub bank_register: u16,
}

impl MemoryConfig {
    fn default_ram_words() -> usize {
        defaults::RAM_WORDS
    }

    fn default_instruction_words() -> usize {
        defaults::INSTRUCTION_WORDS
    }

    fn default_bank_register() -> u16 {
        defaults::BANK_REGISTER
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_words: defaults::RAM_WORDS,
            instruction_words: defaults::INSTRUCTION_WORDS,
            bank_register: defaults::BANK_REGISTER,
        }
    }
}
