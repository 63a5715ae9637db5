//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! selects the value to commit (the ALU result or the store operand) and
//! decodes the write enables. The commit itself happens in ID, at the start
//! of the next cycle, see [`super::decode::write_back`].

use crate::core::pipeline::latches::{MemOutput, WbOutput};
use crate::core::pipeline::signals::WriteBackSource;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `input` - The MEM output latched at the end of the previous cycle.
///
/// # Returns
///
/// The value, destination, and byte-lane enables for the register commit.
pub fn wb_stage(input: &MemOutput) -> WbOutput {
    let ctl = input.ctl;
    let c = match ctl.write_back_source() {
        WriteBackSource::AluResult => input.y,
        WriteBackSource::StoreOperand => input.store_op,
    };
    WbOutput {
        c,
        sel_c: input.sel_c,
        write_low: ctl.write_low(),
        write_high: ctl.write_high(),
        write_enable: ctl.write_enable(),
        associated_pc: input.associated_pc,
    }
}
