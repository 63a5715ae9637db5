//! Turtle16 computer construction and the top-level `Computer` type.
//!
//! This module assembles a complete machine from configuration. It performs:
//! 1. **Memory Map:** Attaches RAM, with its bank select register, as the CPU's data bus.
//! 2. **Reset Types:** Soft reset (pipeline only) and hard reset (registers and RAM too).
//! 3. **Persistence:** Snapshots of the CPU and RAM, serialisable as JSON.
//! 4. **Disassembly:** Labelled listing of the loaded program.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::CpuSnapshot;
use crate::isa::disasm::Disassembler;
use crate::soc::memory::Ram;

/// Kind of reset applied by [`Computer::reset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetType {
    /// Reset the pipeline; registers and RAM keep their contents.
    #[default]
    Soft,
    /// Reset the pipeline and zero the registers and RAM.
    Hard,
}

/// Saved state of a [`Computer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerSnapshot {
    /// CPU pipeline state.
    pub cpu: CpuSnapshot,
    /// RAM contents and bank.
    pub ram: Ram,
}

impl ComputerSnapshot {
    /// Serialises the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a snapshot written by [`ComputerSnapshot::to_json`].
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Disassembled program listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disassembly {
    /// Branch target labels, keyed by address.
    pub labels: BTreeMap<u16, String>,
    /// One line per instruction word; empty for unassigned opcodes.
    pub entries: Vec<String>,
}

/// A Turtle16 CPU wired to banked data RAM.
#[derive(Debug)]
pub struct Computer {
    /// The CPU, whose data bus is the RAM.
    pub cpu: Cpu<Ram>,
}

impl Computer {
    /// Builds a computer from configuration.
    ///
    /// The CPU starts held in reset; call [`Computer::reset`] before stepping.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::with_config(Ram::new(&config.memory), config),
        }
    }

    /// Loads a program into instruction memory.
    pub fn load_program(&mut self, program: &[u16]) -> Result<(), SimError> {
        self.cpu.load_program(program)
    }

    /// The data RAM.
    pub const fn ram(&self) -> &Ram {
        &self.cpu.bus
    }

    /// The data RAM, mutably.
    pub const fn ram_mut(&mut self) -> &mut Ram {
        &mut self.cpu.bus
    }

    /// The currently selected memory bank (0-7).
    pub const fn bank(&self) -> u16 {
        self.cpu.bus.bank()
    }

    /// Resets the machine. Both kinds return the bank to 0.
    ///
    /// The reset cycles drain the pipeline, so writes already in flight land
    /// before a hard reset zeroes registers and RAM.
    pub fn reset(&mut self, kind: ResetType) {
        self.cpu.reset();
        if kind == ResetType::Hard {
            self.cpu.bus.clear();
            self.cpu.regs.clear();
        } else {
            self.cpu.bus.clear_bank();
        }
        tracing::debug!(?kind, "computer reset");
    }

    /// Advances the CPU by one cycle.
    pub fn step(&mut self) {
        self.cpu.step();
    }

    /// Runs until halt or the deadline. See [`Cpu::run`].
    pub fn run(&mut self, deadline: Instant) -> bool {
        self.cpu.run(deadline)
    }

    /// Runs until halt or the cycle budget is spent. See [`Cpu::run_for`].
    pub fn run_for(&mut self, max_cycles: u64) -> bool {
        self.cpu.run_for(max_cycles)
    }

    /// Captures the CPU state and RAM.
    pub fn snapshot(&self) -> ComputerSnapshot {
        ComputerSnapshot {
            cpu: self.cpu.snapshot(),
            ram: self.cpu.bus.clone(),
        }
    }

    /// Restores a state captured by [`Computer::snapshot`].
    pub fn restore(&mut self, snapshot: &ComputerSnapshot) {
        self.cpu.restore(&snapshot.cpu);
        self.cpu.bus.clone_from(&snapshot.ram);
    }

    /// Disassembles the loaded program with branch labels.
    pub fn disassembly(&self) -> Disassembly {
        let mut disassembler = Disassembler::new();
        let entries = disassembler.disassemble_program(self.cpu.instructions());
        Disassembly {
            labels: disassembler.labels().clone(),
            entries,
        }
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
