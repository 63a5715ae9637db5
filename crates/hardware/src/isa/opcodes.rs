//! Turtle16 Opcodes.
//!
//! Defines the 5-bit major opcodes (instruction bits 15-11). Encodings 19 and
//! 23 are unassigned and execute as NOP.

/// No operation.
pub const OP_NOP: u8 = 0;

/// Halt the machine once the instruction reaches EX.
pub const OP_HLT: u8 = 1;

/// Load word: `rC = mem[rA + imm5]`.
pub const OP_LOAD: u8 = 2;

/// Store word: `mem[rA + imm5] = rB` (immediate split across the IRR format).
pub const OP_STORE: u8 = 3;

/// Load immediate (sign-extended 8-bit).
pub const OP_LI: u8 = 4;

/// Load upper immediate (`imm8 << 8`).
pub const OP_LUI: u8 = 5;

/// Compare registers (subtract, flags only).
pub const OP_CMP: u8 = 6;

/// Register-register addition.
pub const OP_ADD: u8 = 7;

/// Register-register subtraction.
pub const OP_SUB: u8 = 8;

/// Register-register bitwise AND.
pub const OP_AND: u8 = 9;

/// Register-register bitwise OR.
pub const OP_OR: u8 = 10;

/// Register-register bitwise XOR.
pub const OP_XOR: u8 = 11;

/// Bitwise complement of a register.
pub const OP_NOT: u8 = 12;

/// Compare register with immediate.
pub const OP_CMPI: u8 = 13;

/// Add immediate.
pub const OP_ADDI: u8 = 14;

/// Subtract immediate.
pub const OP_SUBI: u8 = 15;

/// AND immediate.
pub const OP_ANDI: u8 = 16;

/// OR immediate.
pub const OP_ORI: u8 = 17;

/// XOR immediate.
pub const OP_XORI: u8 = 18;

/// PC-relative unconditional jump.
pub const OP_JMP: u8 = 20;

/// Register-indirect jump: `pc = rA + imm5`.
pub const OP_JR: u8 = 21;

/// Register-indirect jump and link: `rC = return address; pc = rA + imm5`.
pub const OP_JALR: u8 = 22;

/// Branch if equal (Z set).
pub const OP_BEQ: u8 = 24;

/// Branch if not equal (Z clear).
pub const OP_BNE: u8 = 25;

/// Branch if less than, signed (N != V).
pub const OP_BLT: u8 = 26;

/// Branch if greater than, signed (Z clear and N == V).
pub const OP_BGT: u8 = 27;

/// Branch if less than, unsigned (C clear).
pub const OP_BLTU: u8 = 28;

/// Branch if greater than, unsigned (C set and Z clear).
pub const OP_BGTU: u8 = 29;

/// Add with carry.
pub const OP_ADC: u8 = 30;

/// Subtract with borrow.
pub const OP_SBC: u8 = 31;

/// Returns true for the six conditional PC-relative branches.
pub const fn is_conditional_branch(opcode: u8) -> bool {
    matches!(opcode, OP_BEQ..=OP_BGTU)
}
