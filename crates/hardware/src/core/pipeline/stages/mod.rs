//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Each stage is a function from its latched inputs to its
//! output; the driver in [`crate::core::cpu`] wires them together. It includes:
//! 1. **Fetch:** Retrieves instructions from instruction memory based on the PC.
//! 2. **Decode:** Decodes instructions into control words and reads operands.
//! 3. **Execute:** Performs ALU operations and resolves jump targets.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Selects the value committed to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::{IdInput, decode_stage, write_back};
/// Execute stage entry point (EX stage).
pub use execute::{ExInput, execute_stage};
/// Fetch stage entry point (IF stage).
pub use fetch::{FetchState, IfInput, fetch_stage};
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
