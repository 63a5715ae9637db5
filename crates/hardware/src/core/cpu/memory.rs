//! Instruction memory and data bus access.
//!
//! Instruction memory is word addressed and separate from data memory.
//! Fetches beyond the loaded program read as `0`, a NOP.

use super::Cpu;
use crate::common::SimError;
use crate::soc::traits::DataBus;

impl<B: DataBus> Cpu<B> {
    /// Replaces the contents of instruction memory.
    ///
    /// # Arguments
    ///
    /// * `program` - Instruction words, loaded from address 0.
    ///
    /// # Returns
    ///
    /// [`SimError::ProgramTooLarge`] if the program does not fit the
    /// configured instruction memory; the previous program is kept.
    pub fn load_program(&mut self, program: &[u16]) -> Result<(), SimError> {
        if program.len() > self.instruction_capacity {
            return Err(SimError::ProgramTooLarge {
                len: program.len(),
                capacity: self.instruction_capacity,
            });
        }
        self.instructions.clear();
        self.instructions.extend_from_slice(program);
        tracing::debug!(words = program.len(), "program loaded");
        Ok(())
    }

    /// The loaded program.
    pub fn instructions(&self) -> &[u16] {
        &self.instructions
    }

    /// Reads one word of instruction memory.
    pub fn fetch_word(&self, addr: u16) -> u16 {
        self.instructions.get(addr as usize).copied().unwrap_or(0)
    }

    /// The data bus.
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// The data bus, mutably.
    pub const fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
