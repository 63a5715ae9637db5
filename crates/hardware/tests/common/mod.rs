//! Shared test infrastructure.

/// Instruction encoders.
pub mod builder;

/// CPU test harness.
pub mod harness;
