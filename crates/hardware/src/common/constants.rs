//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the Turtle16 machine. It includes:
//! 1. **Register Constants:** Register count and width.
//! 2. **Decode Constants:** Decode ROM size and control-word widths.
//! 3. **Memory Constants:** Instruction and data address-space sizes.
//! 4. **Simulation Constants:** Reset timing.

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Number of entries in the decode ROM (4 flag bits and a 5-bit opcode).
pub const DECODE_TABLE_SIZE: usize = 512;

/// Width of a full control word as produced by the decode ROM.
pub const CONTROL_WORD_BITS: u32 = 23;

/// Width of the control-word slice latched into the EX stage and beyond.
pub const EX_CONTROL_WORD_BITS: u32 = 21;

/// Number of distinct opcodes (5-bit opcode field).
pub const NUM_OPCODES: usize = 32;

/// Number of 16-bit words in a full address space.
pub const ADDRESS_SPACE_WORDS: usize = 1 << 16;

/// Number of cycles the reset line is held asserted by [`Cpu::reset`](crate::core::Cpu::reset).
pub const RESET_CYCLES: u32 = 100;

/// Mask applied to the instruction word as it leaves the ID stage (opcode stripped).
pub const ID_INSTRUCTION_MASK: u16 = 0x07ff;
