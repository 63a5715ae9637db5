//! Data RAM with a bank select register.
//!
//! This module implements the data memory attached to the MEM stage. It provides:
//! 1. **Storage:** A word-addressed `Vec<u16>` sized from the configuration.
//! 2. **Bank Register:** A store to the configured address also latches the low three bits as the bank.
//! 3. **Loading:** Bulk copy of data images for host setup.
//!
//! Addresses past the end of RAM read as zero and ignore writes.

use serde::{Deserialize, Serialize};

use crate::config::MemoryConfig;
use crate::soc::traits::DataBus;

/// Mask applied to a value stored to the bank register.
const BANK_MASK: u16 = 0b111;

/// Word-addressed data RAM.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ram {
    words: Vec<u16>,
    bank_register: u16,
    bank: u16,
}

impl Ram {
    /// Creates a zeroed RAM as described by `config`.
    pub fn new(config: &MemoryConfig) -> Self {
        Self {
            words: vec![0; config.ram_words],
            bank_register: config.bank_register,
            bank: 0,
        }
    }

    /// Size in words.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the RAM has no words.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The bank selected by the last store to the bank register.
    pub const fn bank(&self) -> u16 {
        self.bank
    }

    /// Reads one word without going through the bus.
    pub fn read(&self, addr: u16) -> u16 {
        self.words.get(addr as usize).copied().unwrap_or(0)
    }

    /// Writes one word without latching the bank register.
    pub fn write(&mut self, addr: u16, value: u16) {
        if let Some(word) = self.words.get_mut(addr as usize) {
            *word = value;
        }
    }

    /// Copies `data` into RAM starting at `addr`, truncating at the end of RAM.
    pub fn load(&mut self, addr: u16, data: &[u16]) {
        let start = (addr as usize).min(self.words.len());
        let end = (start + data.len()).min(self.words.len());
        self.words[start..end].copy_from_slice(&data[..end - start]);
    }

    /// All words in address order.
    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Zeroes every word and the bank.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.bank = 0;
    }

    /// Returns the bank to 0 without touching memory.
    pub const fn clear_bank(&mut self) {
        self.bank = 0;
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new(&MemoryConfig::default())
    }
}

impl DataBus for Ram {
    fn load(&mut self, addr: u16) -> u16 {
        self.read(addr)
    }

    fn store(&mut self, value: u16, addr: u16) {
        if addr == self.bank_register {
            self.bank = value & BANK_MASK;
            tracing::debug!(bank = self.bank, "bank select");
        }
        self.write(addr, value);
    }
}
