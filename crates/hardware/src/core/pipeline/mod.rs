//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** Operand forwarding, stall, and flush decisions.
//! 2. **Latches:** Stage outputs carried from one cycle to the next.
//! 3. **Signals:** The control word produced by the decode ROM.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 5. **Traits:** Common interfaces for inspecting pipeline latches.

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF, ID, EX, MEM, WB outputs).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;
