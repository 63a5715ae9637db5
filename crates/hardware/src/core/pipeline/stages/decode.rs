//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Looks up the control word for the opcode under the current flags.
//! 2. **Hazard Control:** Consults the hazard unit for forwarding, stall, and flush decisions.
//! 3. **Register Read:** Reads operands `A` and `B`, replacing them with forwarded results.
//! 4. **Register Commit:** Applies the WB stage's write to the register file.

use crate::common::constants::ID_INSTRUCTION_MASK;
use crate::core::arch::{Flags, Gpr};
use crate::core::pipeline::hazards::{self, HazardInput, OperandSource};
use crate::core::pipeline::latches::{IdOutput, WbOutput};
use crate::core::pipeline::signals::ControlWord;
use crate::isa::decode::InstructionDecoder;
use crate::isa::instruction::InstructionBits;

/// Inputs of the ID stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdInput {
    /// Instruction word from IF.
    pub ins: u16,
    /// Address the instruction was fetched from.
    pub associated_pc: Option<u16>,
    /// Current condition flags.
    pub flags: Flags,
    /// Instruction word (opcode stripped) now entering EX.
    pub ins_ex: u16,
    /// Control word now entering EX.
    pub ctl_ex: ControlWord,
    /// Control word now entering MEM.
    pub ctl_mem: ControlWord,
    /// Destination register of the instruction now entering MEM.
    pub sel_c_mem: usize,
    /// ALU result produced by EX this cycle.
    pub y_ex: u16,
    /// ALU result passed through MEM this cycle.
    pub y_mem: u16,
    /// EX asserted J this cycle.
    pub jump: bool,
}

/// Executes the instruction decode stage.
///
/// The register file must already hold this cycle's write-back, see [`write_back`].
///
/// # Arguments
///
/// * `input` - The instruction from IF and the state of the instructions ahead of it.
/// * `decoder` - The decode ROM.
/// * `regs` - The register file.
///
/// # Returns
///
/// The ID output. On a flush the control word is replaced with `NOP_EX` and
/// the associated PC is cleared; operands are still read.
pub fn decode_stage(
    input: &IdInput,
    decoder: &(impl InstructionDecoder + ?Sized),
    regs: &Gpr,
) -> IdOutput {
    let ctl_id = decoder.decode_instruction(input.flags, input.ins.opcode());

    let signals = hazards::resolve(&HazardInput {
        ins: input.ins,
        ins_ex: input.ins_ex,
        ctl_ex: input.ctl_ex,
        sel_c_mem: input.sel_c_mem,
        ctl_mem: input.ctl_mem,
        jump: input.jump,
        left_operand_unused: ctl_id.left_operand_unused(),
        right_operand_unused: ctl_id.right_operand_unused(),
    });

    let operand = |source: OperandSource, sel: usize| match source {
        OperandSource::ExResult => input.y_ex,
        OperandSource::MemResult => input.y_mem,
        OperandSource::RegisterFile => regs.read(sel),
    };
    let a = operand(signals.fwd_a, input.ins.sel_a());
    let b = operand(signals.fwd_b, input.ins.sel_b());

    let (ctl_ex, associated_pc) = if signals.flush {
        (ControlWord::NOP_EX, None)
    } else {
        (ctl_id.ex_slice(), input.associated_pc)
    };

    IdOutput {
        stall: signals.stall,
        ctl_ex,
        a,
        b,
        ins: input.ins & ID_INSTRUCTION_MASK,
        associated_pc,
    }
}

/// Commits the WB stage's result to the register file.
///
/// Nothing is written unless WBEN is asserted. Otherwise the low byte is
/// written when WRL is asserted and the high byte when WRH is asserted.
pub fn write_back(regs: &mut Gpr, wb: &WbOutput) {
    if wb.write_enable {
        regs.write_lanes(wb.sel_c, wb.c, wb.write_low, wb.write_high);
        #[cfg(feature = "commit-log")]
        tracing::trace!(
            target: "turtle16::commit",
            pc = ?wb.associated_pc,
            reg = wb.sel_c,
            value = wb.c,
            "register commit"
        );
    }
}
