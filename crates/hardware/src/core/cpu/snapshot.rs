//! CPU state snapshots.
//!
//! A snapshot is a plain copy of everything that changes as the pipeline
//! steps: every stage latch, the IF registers, the register file, flags,
//! PC, reset counter, timestamp, and statistics. Instruction memory, the
//! decode ROM, and the data bus are not included; a host that needs them
//! saves them alongside.

use serde::{Deserialize, Serialize};

use super::Cpu;
use crate::core::arch::{Flags, Gpr};
use crate::core::pipeline::latches::{ExOutput, IdOutput, IfOutput, MemOutput, WbOutput};
use crate::core::pipeline::stages::FetchState;
use crate::soc::traits::DataBus;
use crate::stats::PipelineStats;

/// Pipeline state captured by [`Cpu::snapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSnapshot {
    /// Cycles since the last reset completed.
    pub timestamp: u64,
    /// Remaining reset cycles.
    pub reset_counter: u32,
    /// Program counter of the IF stage.
    pub pc: u16,
    /// Program counter before the last cycle.
    pub prev_pc: u16,
    /// Condition flags.
    pub flags: Flags,
    /// Register file.
    pub regs: Gpr,
    /// IF stage registers.
    pub fetch: FetchState,
    /// IF output latch.
    pub output_if: IfOutput,
    /// ID output latch.
    pub output_id: IdOutput,
    /// EX output latch.
    pub output_ex: ExOutput,
    /// MEM output latch.
    pub output_mem: MemOutput,
    /// WB output latch.
    pub output_wb: WbOutput,
    /// Event counters.
    pub stats: PipelineStats,
}

impl<B: DataBus> Cpu<B> {
    /// Captures the current pipeline state.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            timestamp: self.timestamp,
            reset_counter: self.reset_counter,
            pc: self.pc,
            prev_pc: self.prev_pc,
            flags: self.flags,
            regs: self.regs.clone(),
            fetch: self.fetch.clone(),
            output_if: self.output_if.clone(),
            output_id: self.output_id.clone(),
            output_ex: self.output_ex.clone(),
            output_mem: self.output_mem.clone(),
            output_wb: self.output_wb.clone(),
            stats: self.stats,
        }
    }

    /// Restores a state captured by [`Cpu::snapshot`].
    pub fn restore(&mut self, snapshot: &CpuSnapshot) {
        self.timestamp = snapshot.timestamp;
        self.reset_counter = snapshot.reset_counter;
        self.pc = snapshot.pc;
        self.prev_pc = snapshot.prev_pc;
        self.flags = snapshot.flags;
        self.regs.clone_from(&snapshot.regs);
        self.fetch.clone_from(&snapshot.fetch);
        self.output_if.clone_from(&snapshot.output_if);
        self.output_id.clone_from(&snapshot.output_id);
        self.output_ex.clone_from(&snapshot.output_ex);
        self.output_mem.clone_from(&snapshot.output_mem);
        self.output_wb.clone_from(&snapshot.output_wb);
        self.stats = snapshot.stats;
    }
}
