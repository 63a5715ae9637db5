//! Simulator error definitions.
//!
//! The pipeline itself never fails: unknown opcodes and out-of-range fetches
//! degrade to NOP, and broken caller contracts (bad register index, bad
//! decode address) panic. This module covers the remaining caller-level
//! operations that can fail:
//! 1. **Configuration:** Reading and parsing JSON configuration.
//! 2. **Program Loading:** Programs that do not fit instruction memory.
//! 3. **Decode ROM Loading:** Replacement tables of the wrong shape.

use thiserror::Error;

/// Errors produced by caller-level simulator operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document was not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A program is larger than the configured instruction memory.
    #[error("program of {len} words does not fit in {capacity} words of instruction memory")]
    ProgramTooLarge {
        /// Number of words in the rejected program.
        len: usize,
        /// Configured instruction memory size in words.
        capacity: usize,
    },

    /// A replacement decode table is malformed.
    #[error("invalid decode table: {0}")]
    DecodeTable(String),
}
