//! Turtle16 General-Purpose Register File.
//!
//! This module implements the register file owned by the ID stage. It performs
//! the following:
//! 1. **Storage:** Maintains eight 16-bit registers (`r0`-`r7`); none is hardwired.
//! 2. **Byte-lane Writes:** Commits the low byte, high byte, or both in one write.
//! 3. **Debugging:** Dumps the complete register state through `tracing`.

use serde::{Deserialize, Serialize};

use crate::common::constants::NUM_REGISTERS;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gpr {
    regs: [u16; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index.
    pub fn read(&self, idx: usize) -> u16 {
        assert!(idx < NUM_REGISTERS, "register index {idx} out of range");
        self.regs[idx]
    }

    /// Writes a whole register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 16-bit value to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid register index.
    pub fn write(&mut self, idx: usize, val: u16) {
        assert!(idx < NUM_REGISTERS, "register index {idx} out of range");
        self.regs[idx] = val;
    }

    /// Merges the selected byte lanes of `val` into a register.
    ///
    /// # Arguments
    ///
    /// * `idx`  - Register index (0-7).
    /// * `val`  - Value whose lanes are written.
    /// * `low`  - Write bits 7-0.
    /// * `high` - Write bits 15-8.
    pub fn write_lanes(&mut self, idx: usize, val: u16, low: bool, high: bool) {
        let mut merged = self.read(idx);
        if high {
            merged = (val & 0xff00) | (merged & 0x00ff);
        }
        if low {
            merged = (merged & 0xff00) | (val & 0x00ff);
        }
        self.regs[idx] = merged;
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// A copy of all eight registers.
    pub const fn snapshot(&self) -> [u16; NUM_REGISTERS] {
        self.regs
    }

    /// Dumps the contents of all registers at debug level.
    pub fn dump(&self) {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            tracing::debug!(
                "r{}={:#06x} r{}={:#06x}",
                2 * i,
                pair[0],
                2 * i + 1,
                pair[1]
            );
        }
    }
}
