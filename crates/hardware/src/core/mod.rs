//! Core processor implementation.
//!
//! This module contains the main CPU implementation including the instruction
//! pipeline, the ALU, the architectural registers, and the driver that
//! clocks all stages.

/// Architectural state (register file and condition flags).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (the IDT7381 ALU).
pub mod units;

pub use self::cpu::Cpu;
