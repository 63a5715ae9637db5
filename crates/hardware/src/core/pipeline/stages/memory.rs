//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! The ALU result addresses data memory: a store writes the store operand
//! there and a load replaces the store operand with the word read back.
//! Both access one 16-bit word and complete in a single cycle, so the
//! stage is always ready.

use crate::core::pipeline::latches::{ExOutput, MemOutput};
use crate::soc::traits::DataBus;

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `input` - The EX output latched at the end of the previous cycle.
/// * `bus` - Data memory.
///
/// # Returns
///
/// The MEM output. The store operand is driven as zero unless the
/// instruction asserts AssertStoreOp or loads from memory.
pub fn mem_stage(input: &ExOutput, bus: &mut (impl DataBus + ?Sized)) -> MemOutput {
    let ctl = input.ctl;
    let mut store_op = if ctl.drives_store_operand() {
        input.store_op
    } else {
        0
    };

    if ctl.mem_store() {
        bus.store(store_op, input.y);
    }
    if ctl.mem_load() {
        store_op = bus.load(input.y);
    }

    MemOutput {
        y: input.y,
        store_op,
        sel_c: input.sel_c,
        ctl,
        associated_pc: input.associated_pc,
    }
}
