//! Common types and constants used throughout the Turtle16 simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Machine dimensions, decode ROM geometry, and reset timing.
//! 2. **Error Handling:** The error type for caller-level fallible operations.

/// Machine-wide constants.
pub mod constants;

/// Error types for configuration, program, and decode table loading.
pub mod error;

pub use constants::{NUM_REGISTERS, RESET_CYCLES};
pub use error::SimError;
