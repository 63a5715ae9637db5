//! Turtle16 CPU simulator library.
//!
//! This crate implements a cycle-level model of the Turtle16, a 16-bit
//! five-stage pipelined CPU, with the following:
//! 1. **Core:** Pipeline stages (fetch, decode, execute, memory, writeback), hazard control,
//!    the register file, and the condition flags.
//! 2. **ISA:** The 512-entry decode ROM, instruction field extraction, and a disassembler.
//! 3. **SoC:** The data bus seen by the MEM stage, banked RAM, and the assembled computer.
//! 4. **Simulation:** Configuration and pipeline statistics.
//!
//! # Example
//!
//! ```
//! use turtle16_core::{Cpu, soc::Ram};
//!
//! let mut cpu = Cpu::new(Ram::default());
//! cpu.load_program(&[
//!     0b00100_011_00001101, // LI r3, 13
//!     0b00001_000_00000000, // HLT
//! ])?;
//! cpu.reset();
//! assert!(cpu.run_for(10));
//! cpu.step();
//! assert_eq!(cpu.get_register(3), 13);
//! # Ok::<(), turtle16_core::common::SimError>(())
//! ```

/// Common constants and error types.
pub mod common;
/// Simulator configuration (general settings and memory sizes).
pub mod config;
/// CPU core (pipeline, architectural state, ALU, driver).
pub mod core;
/// Instruction set (opcodes, fields, decode ROM, control logic, disassembler).
pub mod isa;
/// System components (data bus, RAM, computer).
pub mod soc;
/// Pipeline statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline, registers, and data bus.
pub use crate::core::Cpu;
/// Top-level computer (CPU plus banked RAM); construct with `Computer::new`.
pub use crate::soc::Computer;
