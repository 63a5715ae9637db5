//! Data Hazard Detection and Forwarding.
//!
//! This module implements the hazard control unit consulted by the ID stage.
//! It provides:
//! 1. **Operand Forwarding:** Bypasses ALU results still in EX or MEM to the operand ports.
//! 2. **Hazard Detection:** Stalls on values that are not ALU results (loads, immediates,
//!    link addresses) and on branches that would read stale flags.
//! 3. **Flush Control:** Squashes the ID slot on a stall or a taken jump.
//!
//! On the board this logic is split across two ATF22V10 PLDs. The equations
//! below keep that split: stage one compares register selectors and derives
//! the forwarding and store-operand hazard terms, stage two combines them
//! with the flags hazard and the jump line. Signals inside both stages are
//! active-low (`0` = true), as on the PLD pins.

use crate::core::pipeline::signals::{ControlWord, bits};
use crate::isa::instruction::InstructionBits;

/// Where the ID stage takes an operand value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSource {
    /// The register file (after this cycle's write-back commit).
    RegisterFile,
    /// The ALU result of the instruction now in EX.
    ExResult,
    /// The ALU result of the instruction now in MEM.
    MemResult,
}

/// Inputs observed by the hazard control unit.
#[derive(Clone, Copy, Debug)]
pub struct HazardInput {
    /// Instruction word being decoded.
    pub ins: u16,
    /// Instruction word (opcode stripped) of the instruction in EX.
    pub ins_ex: u16,
    /// Control word of the instruction in EX.
    pub ctl_ex: ControlWord,
    /// Destination register of the instruction in MEM.
    pub sel_c_mem: usize,
    /// Control word of the instruction in MEM.
    pub ctl_mem: ControlWord,
    /// A jump is being taken by the instruction in EX.
    pub jump: bool,
    /// The decoded instruction does not read its left operand.
    pub left_operand_unused: bool,
    /// The decoded instruction does not read its right operand.
    pub right_operand_unused: bool,
}

/// Decisions of the hazard control unit for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardSignals {
    /// Replace the outgoing control word with a NOP.
    pub flush: bool,
    /// Hold IF and re-decode the same instruction next cycle.
    pub stall: bool,
    /// Source of the left operand.
    pub fwd_a: OperandSource,
    /// Source of the right operand.
    pub fwd_b: OperandSource,
}

/// Active-low outputs of the first PLD.
struct StageOne {
    fwd_ex_to_a: u8,
    fwd_ex_to_b: u8,
    fwd_mem_to_a: u8,
    fwd_mem_to_b: u8,
    store_op_ex_to_a: u8,
    store_op_mem_to_a: u8,
    store_op_ex_to_b: u8,
    store_op_mem_to_b: u8,
}

/// Computes forwarding, stall, and flush decisions for the instruction in ID.
///
/// # Arguments
///
/// * `input` - Selectors and control words of the instructions in ID, EX, and MEM.
///
/// # Returns
///
/// The flush and stall lines and the source of each operand. When both EX
/// and MEM hold an ALU result for the same register, the younger EX value wins.
pub fn resolve(input: &HazardInput) -> HazardSignals {
    let one = stage_one(input);
    let (flush, stall) = stage_two(input, &one);
    HazardSignals {
        flush,
        stall,
        fwd_a: operand_source(one.fwd_ex_to_a, one.fwd_mem_to_a),
        fwd_b: operand_source(one.fwd_ex_to_b, one.fwd_mem_to_b),
    }
}

/// Identity comparators and forwarding/store-operand terms.
fn stage_one(input: &HazardInput) -> StageOne {
    let sel_a = input.ins.sel_a();
    let sel_b = input.ins.sel_b();
    let sel_c_ex = input.ins_ex.sel_c();

    let a_matches_ex = u8::from(sel_a != sel_c_ex);
    let b_matches_ex = u8::from(sel_b != sel_c_ex);
    let a_matches_mem = u8::from(sel_a != input.sel_c_mem);
    let b_matches_mem = u8::from(sel_b != input.sel_c_mem);

    let wben_ex = input.ctl_ex.bit(bits::WBEN) as u8;
    let wben_mem = input.ctl_mem.bit(bits::WBEN) as u8;
    let src_ex = input.ctl_ex.bit(bits::WRITE_BACK_SRC_FLAG) as u8;
    let src_mem = input.ctl_mem.bit(bits::WRITE_BACK_SRC_FLAG) as u8;

    let left_unused = u8::from(input.left_operand_unused);
    let right_unused = u8::from(input.right_operand_unused);

    StageOne {
        fwd_ex_to_a: a_matches_ex | wben_ex | src_ex,
        fwd_ex_to_b: b_matches_ex | wben_ex | src_ex,
        fwd_mem_to_a: a_matches_mem | wben_mem | src_mem,
        fwd_mem_to_b: b_matches_mem | wben_mem | src_mem,
        store_op_ex_to_a: a_matches_ex | wben_ex | (src_ex ^ 1) | left_unused,
        store_op_mem_to_a: a_matches_mem | wben_mem | (src_mem ^ 1) | left_unused,
        store_op_ex_to_b: b_matches_ex | wben_ex | (src_ex ^ 1) | right_unused,
        store_op_mem_to_b: b_matches_mem | wben_mem | (src_mem ^ 1) | right_unused,
    }
}

/// Flags hazard, stall, and flush.
fn stage_two(input: &HazardInput, one: &StageOne) -> (bool, bool) {
    // Opcodes 24-31 (bits 15 and 14 set) are the ones that consume flags.
    let opcode3 = ((input.ins >> 14) & 1) as u8;
    let opcode4 = ((input.ins >> 15) & 1) as u8;
    let ctl_ex5 = input.ctl_ex.bit(bits::FI) as u8;
    let flags_hazard = opcode3 & opcode4 & (ctl_ex5 ^ 1);

    let j = u8::from(!input.jump);
    let no_store_hazard = one.store_op_ex_to_a
        & one.store_op_mem_to_a
        & one.store_op_ex_to_b
        & one.store_op_mem_to_b;

    let stall = ((flags_hazard ^ 1) & no_store_hazard) ^ 1;
    let flush = (j & (flags_hazard ^ 1) & no_store_hazard) ^ 1;
    (flush == 1, stall == 1)
}

fn operand_source(fwd_ex: u8, fwd_mem: u8) -> OperandSource {
    if fwd_ex == 0 {
        OperandSource::ExResult
    } else if fwd_mem == 0 {
        OperandSource::MemResult
    } else {
        OperandSource::RegisterFile
    }
}
