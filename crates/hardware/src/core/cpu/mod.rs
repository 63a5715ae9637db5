//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, condition flags, and program counter.
//! 2. **Pipeline Control:** Holds the output latch of every stage between cycles.
//! 3. **Memory Interfaces:** Owns instruction memory and the data bus used by MEM.
//! 4. **Observability:** Exposes per-stage status, snapshots, and statistics.

/// Cycle stepping, reset sequencing, and run loops.
pub mod execution;

/// Instruction memory and program loading.
pub mod memory;

/// Plain-data snapshots of the complete pipeline state.
pub mod snapshot;

use std::fmt;

use crate::common::constants::NUM_REGISTERS;
use crate::config::Config;
use crate::core::arch::{Flags, Gpr};
use crate::core::pipeline::latches::{ExOutput, IdOutput, IfOutput, MemOutput, WbOutput};
use crate::core::pipeline::stages::FetchState;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode::{DecodeRom, InstructionDecoder};
use crate::soc::memory::Ram;
use crate::soc::traits::DataBus;
use crate::stats::PipelineStats;

pub use self::snapshot::CpuSnapshot;

/// Names of the five stages, indexed as by [`Cpu::stage_info`].
pub const STAGE_NAMES: [&str; 5] = ["IF", "ID", "EX", "MEM", "WB"];

/// Debugger view of one pipeline stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineStageInfo {
    /// Short stage name (`IF`, `ID`, `EX`, `MEM`, `WB`).
    pub name: &'static str,
    /// Address of the instruction occupying the stage, if any.
    pub pc: Option<u16>,
    /// One-line rendering of the stage's output latch.
    pub status: String,
    /// The stage holds a bubble.
    pub bubble: bool,
}

/// Cycle-level model of the Turtle16 CPU.
///
/// The CPU runs a five-stage pipeline (IF, ID, EX, MEM, WB). Instruction
/// memory is private to the model; data memory is reached through the bus
/// `B`. A freshly constructed CPU is held in reset; call [`Cpu::reset`]
/// before stepping a program.
pub struct Cpu<B = Ram> {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Condition flags consulted by the decode ROM.
    pub flags: Flags,
    /// Control word source for the ID stage; the built-in ROM by default.
    pub decoder: Box<dyn InstructionDecoder + Send>,
    /// Data bus driven by the MEM stage.
    pub bus: B,
    /// Emit a per-cycle trace at trace level.
    pub trace: bool,
    /// Pipeline event counters.
    pub stats: PipelineStats,

    /// Output of the IF stage at the end of the last cycle.
    pub output_if: IfOutput,
    /// Output of the ID stage at the end of the last cycle.
    pub output_id: IdOutput,
    /// Output of the EX stage at the end of the last cycle.
    pub output_ex: ExOutput,
    /// Output of the MEM stage at the end of the last cycle.
    pub output_mem: MemOutput,
    /// Output of the WB stage at the end of the last cycle.
    pub output_wb: WbOutput,

    fetch: FetchState,
    instructions: Vec<u16>,
    instruction_capacity: usize,
    pc: u16,
    prev_pc: u16,
    timestamp: u64,
    reset_counter: u32,
    reset_cycles: u32,
}

impl<B: DataBus> Cpu<B> {
    /// Creates a CPU with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `bus` - Data memory for the MEM stage.
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, &Config::default())
    }

    /// Creates a CPU with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `bus` - Data memory for the MEM stage.
    /// * `config` - Reset length, trace setting, and instruction memory size.
    ///
    /// # Returns
    ///
    /// A CPU with the reset line held for `config.general.reset_cycles` cycles,
    /// empty instruction memory, zeroed registers and flags, and the
    /// built-in decode ROM.
    pub fn with_config(bus: B, config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            flags: Flags::default(),
            decoder: Box::new(DecodeRom::new()),
            bus,
            trace: config.general.trace_pipeline || cfg!(feature = "always-trace"),
            stats: PipelineStats::default(),
            output_if: IfOutput::default(),
            output_id: IdOutput::default(),
            output_ex: ExOutput::default(),
            output_mem: MemOutput::default(),
            output_wb: WbOutput::default(),
            fetch: FetchState::default(),
            instructions: Vec::new(),
            instruction_capacity: config.memory.instruction_words,
            pc: 0,
            prev_pc: 0,
            timestamp: 0,
            reset_counter: config.general.reset_cycles,
            reset_cycles: config.general.reset_cycles,
        }
    }

    /// Replaces the decoder consulted by the ID stage.
    ///
    /// Takes effect on the next [`Cpu::step`]. Instructions already past ID
    /// keep the control words they were decoded with.
    pub fn set_decoder(&mut self, decoder: impl InstructionDecoder + Send + 'static) {
        self.decoder = Box::new(decoder);
    }

    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 8 or more.
    pub fn get_register(&self, idx: usize) -> u16 {
        self.regs.read(idx)
    }

    /// Writes a register directly, bypassing the pipeline.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 8 or more.
    pub fn set_register(&mut self, idx: usize, value: u16) {
        self.regs.write(idx, value);
    }

    /// All eight registers.
    pub const fn registers(&self) -> [u16; NUM_REGISTERS] {
        self.regs.snapshot()
    }

    /// The reset line is still held.
    pub const fn is_resetting(&self) -> bool {
        self.reset_counter > 0
    }

    /// The instruction in EX asserted HLT this cycle.
    pub const fn is_halted(&self) -> bool {
        self.output_ex.halt
    }

    /// ID asserted its stall output this cycle.
    pub const fn is_stalling(&self) -> bool {
        self.output_id.stall
    }

    /// Program counter of the IF stage: the address of the next fetch.
    pub const fn pc(&self) -> u16 {
        self.pc
    }

    /// Program counter before the last cycle.
    pub const fn prev_pc(&self) -> u16 {
        self.prev_pc
    }

    /// Cycles stepped since the last reset completed.
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Number of cycles [`Cpu::reset`] holds the reset line.
    pub const fn reset_cycles(&self) -> u32 {
        self.reset_cycles
    }

    /// Describes one pipeline stage.
    ///
    /// # Arguments
    ///
    /// * `index` - Stage index: 0 = IF, 1 = ID, 2 = EX, 3 = MEM, 4 = WB.
    ///
    /// # Returns
    ///
    /// The stage description, or `None` if `index` is not below 5.
    pub fn stage_info(&self, index: usize) -> Option<PipelineStageInfo> {
        let latch: &dyn PipelineLatch = match index {
            0 => &self.output_if,
            1 => &self.output_id,
            2 => &self.output_ex,
            3 => &self.output_mem,
            4 => &self.output_wb,
            _ => return None,
        };
        Some(PipelineStageInfo {
            name: STAGE_NAMES[index],
            pc: latch.associated_pc(),
            status: latch.status(),
            bubble: latch.is_bubble(),
        })
    }

    /// Logs the register file at debug level.
    pub fn dump_state(&self) {
        tracing::debug!(
            pc = self.pc,
            timestamp = self.timestamp,
            flags = %self.flags,
            "cpu state"
        );
        self.regs.dump();
    }
}

impl<B: DataBus + Default> Default for Cpu<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B> fmt::Debug for Cpu<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("timestamp", &self.timestamp)
            .field("reset_counter", &self.reset_counter)
            .field("flags", &self.flags)
            .field("regs", &self.regs)
            .finish_non_exhaustive()
    }
}
