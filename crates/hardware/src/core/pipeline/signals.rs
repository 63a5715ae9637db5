//! Pipeline control signals.
//!
//! This module defines the control word produced by the decode ROM and the
//! typed views that the stages read from it. It performs:
//! 1. **Bit Layout:** Named positions of the 23 control lines.
//! 2. **Operand Selection:** Sources for the ALU right operand and the store operand.
//! 3. **Write-back Control:** Result source and byte-lane write enables.
//!
//! Control lines are active-low, matching the physical decoder PLDs: a line
//! is asserted when its bit is `0`. The exceptions are the ALU fields
//! (`C0`, `I`, `RS`) and the two select fields, which carry plain values,
//! and the two operand-unused hints, which are active-high.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::{CONTROL_WORD_BITS, EX_CONTROL_WORD_BITS};

/// Bit positions of each control line within a control word.
pub mod bits {
    /// Halt the machine (active-low).
    pub const HLT: u32 = 0;
    /// Store operand select, low bit.
    pub const SEL_STORE_OP_A: u32 = 1;
    /// Store operand select, high bit.
    pub const SEL_STORE_OP_B: u32 = 2;
    /// Right operand select, low bit.
    pub const SEL_RIGHT_OP_A: u32 = 3;
    /// Right operand select, high bit.
    pub const SEL_RIGHT_OP_B: u32 = 4;
    /// Flags inhibit (active-low: `0` means the flags register is updated).
    pub const FI: u32 = 5;
    /// ALU carry-in.
    pub const C0: u32 = 6;
    /// ALU function select, bit 0.
    pub const I0: u32 = 7;
    /// ALU function select, bit 1.
    pub const I1: u32 = 8;
    /// ALU function select, bit 2.
    pub const I2: u32 = 9;
    /// ALU operand routing, bit 0.
    pub const RS0: u32 = 10;
    /// ALU operand routing, bit 1.
    pub const RS1: u32 = 11;
    /// Jump (active-low).
    pub const J: u32 = 12;
    /// Jump is absolute (active-low; deasserted means PC-relative).
    pub const JABS: u32 = 13;
    /// Memory load enable (active-low).
    pub const MEM_LOAD: u32 = 14;
    /// Memory store enable (active-low).
    pub const MEM_STORE: u32 = 15;
    /// Drive the store operand onto the MEM bus (active-low).
    pub const ASSERT_STORE_OP: u32 = 16;
    /// Write-back source: `0` selects the ALU result, `1` the store operand.
    pub const WRITE_BACK_SRC_FLAG: u32 = 17;
    /// Write low byte (active-low).
    pub const WRL: u32 = 18;
    /// Write high byte (active-low).
    pub const WRH: u32 = 19;
    /// Write-back enable (active-low).
    pub const WBEN: u32 = 20;
    /// The instruction does not read its left operand (active-high).
    pub const LEFT_OPERAND_IS_UNUSED: u32 = 21;
    /// The instruction does not read its right operand (active-high).
    pub const RIGHT_OPERAND_IS_UNUSED: u32 = 22;
}

/// Source of the ALU right operand, selected by `SelRightOp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RightOperand {
    /// The forwarded `B` register value.
    RegisterB,
    /// The 5-bit immediate, sign-extended.
    Imm5,
    /// The split STORE immediate, sign-extended.
    SplitImm5,
    /// The 11-bit immediate, sign-extended.
    Imm11,
}

impl RightOperand {
    /// Two-bit encoding of this selection.
    pub const fn encoding(self) -> u32 {
        match self {
            Self::RegisterB => 0b00,
            Self::Imm5 => 0b01,
            Self::SplitImm5 => 0b10,
            Self::Imm11 => 0b11,
        }
    }
}

/// Source of the store operand, selected by `SelStoreOp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOperand {
    /// The forwarded `B` register value.
    RegisterB,
    /// The PC presented to EX (the return address for JALR).
    Pc,
    /// The 8-bit immediate, sign-extended.
    Imm8,
    /// The 8-bit immediate placed in the high byte.
    UpperImm8,
}

impl StoreOperand {
    /// Two-bit encoding of this selection.
    pub const fn encoding(self) -> u32 {
        match self {
            Self::RegisterB => 0b00,
            Self::Pc => 0b01,
            Self::Imm8 => 0b10,
            Self::UpperImm8 => 0b11,
        }
    }
}

/// Source of the value committed to the register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteBackSource {
    /// The EX-stage ALU result.
    AluResult,
    /// The store operand as it leaves MEM (loaded word, immediate, or link address).
    StoreOperand,
}

/// Mask covering every bit of a full control word.
const ID_MASK: u32 = (1 << CONTROL_WORD_BITS) - 1;
/// Mask covering the slice of the control word latched into EX.
const EX_MASK: u32 = (1 << EX_CONTROL_WORD_BITS) - 1;

/// A packed control word.
///
/// Produced by the decode ROM in ID and carried, truncated to its low 21
/// bits, through EX, MEM, and WB.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlWord(u32);

impl ControlWord {
    /// The full-width word of a NOP (every line deasserted, both operands unused).
    pub const NOP_ID: Self = Self(ID_MASK);
    /// The EX-width word of a NOP.
    pub const NOP_EX: Self = Self(EX_MASK);

    /// Wraps raw control bits.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is wider than a control word.
    pub const fn from_bits(bits: u32) -> Self {
        assert!(bits & !ID_MASK == 0, "control word wider than 23 bits");
        Self(bits)
    }

    /// Raw control bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Value (`0` or `1`) of the line at `pos`.
    #[inline(always)]
    pub const fn bit(self, pos: u32) -> u32 {
        (self.0 >> pos) & 1
    }

    #[inline(always)]
    const fn asserted(self, pos: u32) -> bool {
        self.bit(pos) == 0
    }

    /// The slice of this word that travels past ID.
    #[inline(always)]
    pub const fn ex_slice(self) -> Self {
        Self(self.0 & EX_MASK)
    }

    /// Returns a copy with the active-low line at `pos` asserted.
    #[must_use]
    pub const fn assert_line(self, pos: u32) -> Self {
        Self(self.0 & !(1 << pos))
    }

    /// Returns a copy with the active-high line at `pos` cleared.
    ///
    /// Used for the operand-unused hints, which are cleared when an operand is read.
    #[must_use]
    pub const fn clear_line(self, pos: u32) -> Self {
        self.assert_line(pos)
    }

    /// Returns a copy with the `width`-bit field at `pos` replaced by `value`.
    #[must_use]
    pub const fn with_field(self, pos: u32, width: u32, value: u32) -> Self {
        let mask = ((1 << width) - 1) << pos;
        Self((self.0 & !mask) | ((value << pos) & mask))
    }

    /// HLT is asserted.
    pub const fn halt(self) -> bool {
        self.asserted(bits::HLT)
    }

    /// Store operand source.
    pub const fn store_operand(self) -> StoreOperand {
        match (self.0 >> bits::SEL_STORE_OP_A) & 0b11 {
            0b00 => StoreOperand::RegisterB,
            0b01 => StoreOperand::Pc,
            0b10 => StoreOperand::Imm8,
            _ => StoreOperand::UpperImm8,
        }
    }

    /// ALU right operand source.
    pub const fn right_operand(self) -> RightOperand {
        match (self.0 >> bits::SEL_RIGHT_OP_A) & 0b11 {
            0b00 => RightOperand::RegisterB,
            0b01 => RightOperand::Imm5,
            0b10 => RightOperand::SplitImm5,
            _ => RightOperand::Imm11,
        }
    }

    /// The flags register is updated from this instruction's ALU result.
    pub const fn updates_flags(self) -> bool {
        self.asserted(bits::FI)
    }

    /// ALU carry-in.
    pub const fn carry_in(self) -> u16 {
        self.bit(bits::C0) as u16
    }

    /// ALU function select (`I2 I1 I0`).
    pub const fn alu_function(self) -> u8 {
        ((self.0 >> bits::I0) & 0b111) as u8
    }

    /// ALU operand routing (`RS1 RS0`).
    pub const fn alu_routing(self) -> u8 {
        ((self.0 >> bits::RS0) & 0b11) as u8
    }

    /// J is asserted.
    pub const fn jump(self) -> bool {
        self.asserted(bits::J)
    }

    /// JABS is asserted: the target replaces the PC rather than being added to it.
    pub const fn jump_absolute(self) -> bool {
        self.asserted(bits::JABS)
    }

    /// MemLoad is asserted.
    pub const fn mem_load(self) -> bool {
        self.asserted(bits::MEM_LOAD)
    }

    /// MemStore is asserted.
    pub const fn mem_store(self) -> bool {
        self.asserted(bits::MEM_STORE)
    }

    /// AssertStoreOp is asserted.
    pub const fn drives_store_operand(self) -> bool {
        self.asserted(bits::ASSERT_STORE_OP)
    }

    /// Source of the committed register value.
    pub const fn write_back_source(self) -> WriteBackSource {
        if self.bit(bits::WRITE_BACK_SRC_FLAG) == 0 {
            WriteBackSource::AluResult
        } else {
            WriteBackSource::StoreOperand
        }
    }

    /// WRL is asserted.
    pub const fn write_low(self) -> bool {
        self.asserted(bits::WRL)
    }

    /// WRH is asserted.
    pub const fn write_high(self) -> bool {
        self.asserted(bits::WRH)
    }

    /// WBEN is asserted.
    pub const fn write_enable(self) -> bool {
        self.asserted(bits::WBEN)
    }

    /// The left operand is not read by this instruction.
    pub const fn left_operand_unused(self) -> bool {
        self.bit(bits::LEFT_OPERAND_IS_UNUSED) == 1
    }

    /// The right operand is not read by this instruction.
    pub const fn right_operand_unused(self) -> bool {
        self.bit(bits::RIGHT_OPERAND_IS_UNUSED) == 1
    }
}

/// Defaults to the EX-width NOP, the idle value of every latch past ID.
impl Default for ControlWord {
    fn default() -> Self {
        Self::NOP_EX
    }
}

impl fmt::Debug for ControlWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlWord({:#08x})", self.0)
    }
}

impl fmt::LowerHex for ControlWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
