//! Decode ROM.
//!
//! This module maps `(flags, opcode)` to a control word. It provides:
//! 1. **Addressing:** Packing the condition flags and opcode into a 9-bit ROM address.
//! 2. **Decoder Trait:** The single lookup operation the ID stage depends on.
//! 3. **ROM Storage:** A replaceable 512-entry table, defaulting to the built-in control logic.
//!
//! The ROM address is `(N << 8) | (V << 7) | (Z << 6) | (C << 5) | opcode`.

use crate::common::SimError;
use crate::common::constants::{CONTROL_WORD_BITS, DECODE_TABLE_SIZE};
use crate::core::arch::Flags;
use crate::core::pipeline::signals::ControlWord;
use crate::isa::control;

/// Computes the decode ROM address for an opcode under the given flags.
///
/// # Arguments
///
/// * `flags`  - Current condition flags.
/// * `opcode` - 5-bit opcode; higher bits are ignored.
///
/// # Returns
///
/// An address in `0..512`.
#[inline]
pub const fn decode_address(flags: Flags, opcode: u8) -> usize {
    ((flags.n as usize) << 8)
        | ((flags.v as usize) << 7)
        | ((flags.z as usize) << 6)
        | ((flags.c as usize) << 5)
        | (opcode as usize & 0x1f)
}

/// Recovers the flags encoded in a decode ROM address.
#[inline]
pub const fn flags_for_address(address: usize) -> Flags {
    Flags {
        n: (address >> 8) & 1 == 1,
        c: (address >> 5) & 1 == 1,
        z: (address >> 6) & 1 == 1,
        v: (address >> 7) & 1 == 1,
    }
}

/// Source of control words for the ID stage.
pub trait InstructionDecoder {
    /// Returns the control word stored at `address`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `address` is not below 512.
    fn decode(&self, address: usize) -> ControlWord;

    /// Looks up the control word for `opcode` under `flags`.
    fn decode_instruction(&self, flags: Flags, opcode: u8) -> ControlWord {
        self.decode(decode_address(flags, opcode))
    }
}

/// The 512-entry decode ROM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeRom {
    entries: Vec<ControlWord>,
}

impl DecodeRom {
    /// Creates a ROM programmed with the built-in Turtle16 control logic.
    pub fn new() -> Self {
        Self {
            entries: control::generate(),
        }
    }

    /// Creates a ROM from raw control words.
    ///
    /// # Arguments
    ///
    /// * `words` - Exactly 512 words, each at most 23 bits wide.
    ///
    /// # Returns
    ///
    /// The ROM, or [`SimError::DecodeTable`] if the table has the wrong length
    /// or an entry is too wide.
    pub fn from_entries(words: &[u32]) -> Result<Self, SimError> {
        if words.len() != DECODE_TABLE_SIZE {
            return Err(SimError::DecodeTable(format!(
                "expected {DECODE_TABLE_SIZE} entries, found {}",
                words.len()
            )));
        }
        let mut entries = Vec::with_capacity(DECODE_TABLE_SIZE);
        for (address, &word) in words.iter().enumerate() {
            if word >> CONTROL_WORD_BITS != 0 {
                return Err(SimError::DecodeTable(format!(
                    "entry {address} ({word:#x}) is wider than {CONTROL_WORD_BITS} bits"
                )));
            }
            entries.push(ControlWord::from_bits(word));
        }
        Ok(Self { entries })
    }

    /// Overwrites one entry.
    ///
    /// # Panics
    ///
    /// Panics if `address` is not below 512.
    pub fn set_entry(&mut self, address: usize, word: ControlWord) {
        assert!(
            address < DECODE_TABLE_SIZE,
            "decode address {address} out of range"
        );
        self.entries[address] = word;
    }

    /// All 512 entries in address order.
    pub fn entries(&self) -> &[ControlWord] {
        &self.entries
    }
}

impl Default for DecodeRom {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionDecoder for DecodeRom {
    fn decode(&self, address: usize) -> ControlWord {
        assert!(
            address < DECODE_TABLE_SIZE,
            "decode address {address} out of range"
        );
        self.entries[address]
    }
}
