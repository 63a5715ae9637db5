//! Built-in Turtle16 control logic.
//!
//! Evaluates the decoder equations for every `(flags, opcode)` pair and
//! produces the 512 control words programmed into the decode ROM. The
//! equations are written per opcode:
//! 1. **Defaults:** Every line starts deasserted and both operands unused (the NOP word).
//! 2. **Unconditional Opcodes:** Produce the same word under all sixteen flag combinations.
//! 3. **Conditional Branches:** Produce a relative jump when the condition holds, NOP otherwise.
//! 4. **Carry Arithmetic:** ADC and SBC fold the carry flag into the ALU carry-in.

use crate::common::constants::{DECODE_TABLE_SIZE, NUM_OPCODES};
use crate::core::arch::Flags;
use crate::core::pipeline::signals::{
    ControlWord, RightOperand, StoreOperand, WriteBackSource, bits,
};
use crate::core::units::alu::{function, routing};
use crate::isa::decode::flags_for_address;
use crate::isa::opcodes::*;

/// Builds the full 512-entry table in address order.
pub fn generate() -> Vec<ControlWord> {
    (0..DECODE_TABLE_SIZE)
        .map(|address| {
            let opcode = (address % NUM_OPCODES) as u8;
            control_word(opcode, flags_for_address(address))
        })
        .collect()
}

/// Returns true if a conditional branch `opcode` is taken under `flags`.
///
/// Returns false for every opcode that is not a conditional branch.
pub const fn branch_taken(opcode: u8, flags: Flags) -> bool {
    match opcode {
        OP_BEQ => flags.z,
        OP_BNE => !flags.z,
        OP_BLT => flags.n != flags.v,
        OP_BGT => !flags.z && flags.n == flags.v,
        OP_BLTU => !flags.c,
        OP_BGTU => flags.c && !flags.z,
        _ => false,
    }
}

/// Evaluates the control equations for one opcode under one set of flags.
pub fn control_word(opcode: u8, flags: Flags) -> ControlWord {
    let nop = Signals::nop();
    let word = match opcode {
        OP_HLT => nop.assert(bits::HLT),
        OP_LOAD => nop
            .right(RightOperand::Imm5)
            .alu(function::ADD, 0)
            .assert(bits::MEM_LOAD)
            .write_back(WriteBackSource::StoreOperand, true, true)
            .reads_left()
            .reads_right(),
        OP_STORE => nop
            .store(StoreOperand::RegisterB)
            .right(RightOperand::SplitImm5)
            .alu(function::ADD, 0)
            .assert(bits::MEM_STORE)
            .assert(bits::ASSERT_STORE_OP)
            .reads_left()
            .reads_right(),
        OP_LI => nop
            .store(StoreOperand::Imm8)
            .assert(bits::ASSERT_STORE_OP)
            .write_back(WriteBackSource::StoreOperand, true, true),
        OP_LUI => nop
            .store(StoreOperand::UpperImm8)
            .assert(bits::ASSERT_STORE_OP)
            .write_back(WriteBackSource::StoreOperand, false, true),
        OP_CMP => nop
            .right(RightOperand::RegisterB)
            .alu(function::R_MINUS_S, 1)
            .assert(bits::FI)
            .reads_left()
            .reads_right(),
        OP_ADD | OP_SUB | OP_AND | OP_OR | OP_XOR => {
            arithmetic(nop, opcode, RightOperand::RegisterB).reads_right()
        }
        OP_NOT => nop
            .alu(function::S_MINUS_R, 0)
            .routing(routing::A_ZERO)
            .write_back(WriteBackSource::AluResult, true, true)
            .reads_left(),
        OP_CMPI => nop
            .right(RightOperand::Imm5)
            .alu(function::R_MINUS_S, 1)
            .assert(bits::FI)
            .reads_left(),
        OP_ADDI | OP_SUBI | OP_ANDI | OP_ORI | OP_XORI => {
            arithmetic(nop, opcode, RightOperand::Imm5)
        }
        OP_JMP => nop
            .right(RightOperand::Imm11)
            .alu(function::OR, 0)
            .routing(routing::ZERO_B)
            .assert(bits::J),
        OP_JR => nop
            .right(RightOperand::Imm5)
            .alu(function::ADD, 0)
            .assert(bits::J)
            .assert(bits::JABS)
            .reads_left(),
        OP_JALR => nop
            .store(StoreOperand::Pc)
            .right(RightOperand::Imm5)
            .alu(function::ADD, 0)
            .assert(bits::J)
            .assert(bits::JABS)
            .assert(bits::ASSERT_STORE_OP)
            .write_back(WriteBackSource::StoreOperand, true, true)
            .reads_left(),
        _ if is_conditional_branch(opcode) => {
            if branch_taken(opcode, flags) {
                nop.right(RightOperand::Imm11)
                    .alu(function::ADD, 0)
                    .routing(routing::ZERO_B)
                    .assert(bits::J)
            } else {
                nop
            }
        }
        OP_ADC => nop
            .right(RightOperand::RegisterB)
            .alu(function::ADD, u32::from(flags.c))
            .assert(bits::FI)
            .write_back(WriteBackSource::AluResult, true, true)
            .reads_left()
            .reads_right(),
        OP_SBC => nop
            .right(RightOperand::RegisterB)
            .alu(function::R_MINUS_S, u32::from(!flags.c))
            .assert(bits::FI)
            .write_back(WriteBackSource::AluResult, true, true)
            .reads_left()
            .reads_right(),
        _ => nop,
    };
    word.0
}

/// Shared equations of the flag-setting ALU instructions that write back.
fn arithmetic(nop: Signals, opcode: u8, right: RightOperand) -> Signals {
    let (func, carry) = match opcode {
        OP_ADD | OP_ADDI => (function::ADD, 0),
        OP_SUB | OP_SUBI => (function::R_MINUS_S, 1),
        OP_AND | OP_ANDI => (function::AND, 0),
        OP_OR | OP_ORI => (function::OR, 0),
        _ => (function::XOR, 0),
    };
    nop.right(right)
        .alu(func, carry)
        .assert(bits::FI)
        .write_back(WriteBackSource::AluResult, true, true)
        .reads_left()
}

/// Builder over a control word, starting from the NOP word.
#[derive(Clone, Copy)]
struct Signals(ControlWord);

impl Signals {
    const fn nop() -> Self {
        Self(ControlWord::NOP_ID)
    }

    const fn assert(self, line: u32) -> Self {
        Self(self.0.assert_line(line))
    }

    const fn store(self, sel: StoreOperand) -> Self {
        Self(self.0.with_field(bits::SEL_STORE_OP_A, 2, sel.encoding()))
    }

    const fn right(self, sel: RightOperand) -> Self {
        Self(self.0.with_field(bits::SEL_RIGHT_OP_A, 2, sel.encoding()))
    }

    const fn alu(self, func: u8, carry_in: u32) -> Self {
        Self(
            self.0
                .with_field(bits::I0, 3, func as u32)
                .with_field(bits::C0, 1, carry_in),
        )
    }

    const fn routing(self, rs: u8) -> Self {
        Self(self.0.with_field(bits::RS0, 2, rs as u32))
    }

    const fn write_back(self, source: WriteBackSource, low: bool, high: bool) -> Self {
        let flag = match source {
            WriteBackSource::AluResult => 0,
            WriteBackSource::StoreOperand => 1,
        };
        let mut word = self.0.with_field(bits::WRITE_BACK_SRC_FLAG, 1, flag);
        if low {
            word = word.assert_line(bits::WRL);
        }
        if high {
            word = word.assert_line(bits::WRH);
        }
        Self(word.assert_line(bits::WBEN))
    }

    const fn reads_left(self) -> Self {
        Self(self.0.clear_line(bits::LEFT_OPERAND_IS_UNUSED))
    }

    const fn reads_right(self) -> Self {
        Self(self.0.clear_line(bits::RIGHT_OPERAND_IS_UNUSED))
    }
}
