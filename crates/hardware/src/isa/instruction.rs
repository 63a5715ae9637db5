//! Instruction encoding and field extraction.
//!
//! Provides bit extraction for the 16-bit Turtle16 instruction word. The opcode
//! sits in bits 15-11; the remaining bits are read according to the instruction
//! format:
//!
//! | Format | Fields |
//! |---|---|
//! | RRR | C:10-8, A:7-5, B:4-2 |
//! | RRI | C:10-8, A:7-5, imm5:4-0 |
//! | IRR | immHi:10-8, A:7-5, B:4-2, immLo:1-0 |
//! | RII | C:10-8, imm8:7-0 |
//! | III | imm11:10-0 |

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 11;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0x1f;
/// Bit mask for a register selector after shifting.
pub const REG_MASK: u16 = 0x7;
/// Bit position of the destination register selector `C`.
pub const SEL_C_SHIFT: u32 = 8;
/// Bit position of the left operand selector `A`.
pub const SEL_A_SHIFT: u32 = 5;
/// Bit position of the right operand selector `B`.
pub const SEL_B_SHIFT: u32 = 2;

/// Sign-extends the low `bits` bits of `value` to 16 bits.
///
/// # Arguments
///
/// * `value` - Raw field value; bits above `bits` are ignored.
/// * `bits`  - Width of the field, 1 to 16.
#[inline]
pub const fn sign_extend(value: u16, bits: u32) -> u16 {
    let shift = 16 - bits;
    (((value << shift) as i16) >> shift) as u16
}

/// Trait for extracting fields from an encoded Turtle16 instruction.
pub trait InstructionBits {
    /// Extracts the 5-bit opcode (bits 15-11).
    fn opcode(&self) -> u8;

    /// Extracts the destination register selector `C` (bits 10-8).
    fn sel_c(&self) -> usize;

    /// Extracts the left operand selector `A` (bits 7-5).
    fn sel_a(&self) -> usize;

    /// Extracts the right operand selector `B` (bits 4-2).
    fn sel_b(&self) -> usize;

    /// The 5-bit immediate (bits 4-0), sign-extended.
    fn imm5(&self) -> u16;

    /// The split STORE immediate (bits 10-8 and 1-0), sign-extended from 5 bits.
    fn imm_split(&self) -> u16;

    /// The 8-bit immediate (bits 7-0), sign-extended.
    fn imm8(&self) -> u16;

    /// The 8-bit immediate shifted into the high byte.
    fn imm8_upper(&self) -> u16;

    /// The 11-bit immediate (bits 10-0), sign-extended.
    fn imm11(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn sel_c(&self) -> usize {
        ((self >> SEL_C_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sel_a(&self) -> usize {
        ((self >> SEL_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sel_b(&self) -> usize {
        ((self >> SEL_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm5(&self) -> u16 {
        sign_extend(self & 0x1f, 5)
    }

    #[inline(always)]
    fn imm_split(&self) -> u16 {
        sign_extend(((self >> 6) & 0b11100) | (self & 0b11), 5)
    }

    #[inline(always)]
    fn imm8(&self) -> u16 {
        sign_extend(self & 0xff, 8)
    }

    #[inline(always)]
    fn imm8_upper(&self) -> u16 {
        (self & 0xff) << 8
    }

    #[inline(always)]
    fn imm11(&self) -> u16 {
        sign_extend(self & 0x7ff, 11)
    }
}
