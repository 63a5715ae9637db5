//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Selection:** Chooses the ALU right operand and the store operand.
//! 2. **Execution:** Runs the IDT7381 ALU with the function, routing, and carry-in from the control word.
//! 3. **Control Output:** Drives the jump, absolute-jump, and halt lines back to IF and the driver.
//! 4. **Flags:** Produces the N/C/Z/V flags the driver latches for flag-setting instructions.

use crate::core::arch::Flags;
use crate::core::pipeline::latches::ExOutput;
use crate::core::pipeline::signals::{ControlWord, RightOperand, StoreOperand};
use crate::core::units::alu::{AluInput, Idt7381};
use crate::isa::instruction::InstructionBits;

/// Inputs of the EX stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExInput {
    /// Current PC of the IF stage, used as the JALR link value.
    pub pc: u16,
    /// Control word from ID.
    pub ctl: ControlWord,
    /// Left operand from ID.
    pub a: u16,
    /// Right operand from ID.
    pub b: u16,
    /// Instruction word (opcode stripped) from ID.
    pub ins: u16,
    /// Address of the instruction.
    pub associated_pc: Option<u16>,
}

/// Executes the execute stage.
///
/// # Arguments
///
/// * `input` - The control word, operands, and instruction fields from ID.
///
/// # Returns
///
/// The ALU result and flags with the control lines for IF, MEM, and the driver.
pub fn execute_stage(input: &ExInput) -> ExOutput {
    let ctl = input.ctl;
    let ins = input.ins;

    let right = match ctl.right_operand() {
        RightOperand::RegisterB => input.b,
        RightOperand::Imm5 => ins.imm5(),
        RightOperand::SplitImm5 => ins.imm_split(),
        RightOperand::Imm11 => ins.imm11(),
    };

    let store_op = match ctl.store_operand() {
        StoreOperand::RegisterB => input.b,
        StoreOperand::Pc => input.pc,
        StoreOperand::Imm8 => ins.imm8(),
        StoreOperand::UpperImm8 => ins.imm8_upper(),
    };

    let alu = Idt7381::new().execute(&AluInput {
        a: input.a,
        b: right,
        carry_in: ctl.carry_in(),
        function: ctl.alu_function(),
        routing: ctl.alu_routing(),
    });

    ExOutput {
        flags: Flags::new(alu.f & 0x8000 != 0, alu.c16, alu.z, alu.ovf),
        jump: ctl.jump(),
        jump_absolute: ctl.jump_absolute(),
        y: alu.f,
        halt: ctl.halt(),
        store_op,
        ctl,
        sel_c: ins.sel_c(),
        associated_pc: input.associated_pc,
    }
}
