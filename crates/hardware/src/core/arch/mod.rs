//! Turtle16 architectural state.
//!
//! This module contains the programmer-visible state of the machine that
//! outlives any single pipeline stage:
//! 1. **Flags:** The N/C/Z/V condition flags register.
//! 2. **GPRs:** The eight-entry general-purpose register file.

/// Condition flags register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
