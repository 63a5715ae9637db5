//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It fetches the instruction at the program counter and selects the next PC:
//! 1. **Reset:** Clears the PC and emits NOPs without touching memory.
//! 2. **Jumps:** Redirects the PC to an absolute or PC-relative target from EX.
//! 3. **Stalls:** Holds the PC and the previous output while ID is stalled.
//! 4. **Sequential Fetch:** Reads instruction memory and increments the PC.

use serde::{Deserialize, Serialize};

use crate::core::pipeline::latches::IfOutput;

/// Control inputs of the IF stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfInput {
    /// ID is stalling.
    pub stall: bool,
    /// Jump target or offset computed by EX.
    pub y: u16,
    /// EX asserted J.
    pub jump: bool,
    /// EX asserted JABS.
    pub jump_absolute: bool,
    /// The reset line is held.
    pub rst: bool,
}

impl IfInput {
    /// Inputs with only the reset line raised.
    pub const fn reset() -> Self {
        Self {
            stall: false,
            y: 0,
            jump: false,
            jump_absolute: false,
            rst: true,
        }
    }
}

/// Registers internal to the IF stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchState {
    /// Program counter: the address of the next fetch.
    pub pc: u16,
    /// Last emitted output, re-emitted while stalled.
    pub output: IfOutput,
}

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `state` - The IF stage registers, updated in place.
/// * `input` - The stall, jump, and reset lines for this cycle.
/// * `load` - Reads one word of instruction memory. Called only for a
///   sequential fetch.
///
/// # Returns
///
/// The IF output latched for ID. A taken jump overrides a stall: the
/// instruction in ID is squashed by the same jump.
pub fn fetch_stage(
    state: &mut FetchState,
    input: &IfInput,
    mut load: impl FnMut(u16) -> u16,
) -> IfOutput {
    if input.rst {
        state.pc = 0;
        state.output = IfOutput {
            ins: 0,
            pc: 0,
            associated_pc: None,
        };
    } else if input.jump {
        state.pc = if input.jump_absolute {
            input.y
        } else {
            state.pc.wrapping_add(input.y)
        };
        state.output = IfOutput {
            ins: 0,
            pc: state.pc,
            associated_pc: None,
        };
    } else if !input.stall {
        let ins = load(state.pc);
        let fetched_from = state.pc;
        state.pc = state.pc.wrapping_add(1);
        state.output = IfOutput {
            ins,
            pc: state.pc,
            associated_pc: Some(fetched_from),
        };
    }
    state.output.clone()
}
