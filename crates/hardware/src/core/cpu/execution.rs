//! Main Execution Loop.
//!
//! This module implements the clock of the CPU. It performs the following:
//! 1. **Pipeline Coordination:** Evaluates the stages in reverse order (WB, MEM, EX, ID, IF)
//!    so that each consumes the latches of the previous cycle.
//! 2. **Reset Sequencing:** Holds the reset line until the reset counter expires.
//! 3. **Run Loops:** Steps until halt, a wall-clock deadline, or a cycle budget.
//! 4. **Observability:** Updates statistics and emits the per-cycle trace.

use std::time::Instant;

use super::Cpu;
use crate::core::pipeline::stages::{
    ExInput, IdInput, IfInput, decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
    write_back,
};
use crate::core::pipeline::traits::PipelineLatch;
use crate::soc::traits::DataBus;

impl<B: DataBus> Cpu<B> {
    /// Advances the pipeline by one clock cycle.
    ///
    /// The WB result is committed to the register file before ID reads its
    /// operands, so a value written back is visible to the instruction
    /// decoded in the same cycle.
    pub fn step(&mut self) {
        let rst = self.is_resetting();

        let output_wb = wb_stage(&self.output_mem);
        write_back(&mut self.regs, &output_wb);

        if self.output_ex.ctl.mem_load() {
            self.stats.loads += 1;
        }
        if self.output_ex.ctl.mem_store() {
            self.stats.stores += 1;
        }
        let output_mem = mem_stage(&self.output_ex, &mut self.bus);

        let output_ex = execute_stage(&ExInput {
            pc: self.output_if.pc,
            ctl: self.output_id.ctl_ex,
            a: self.output_id.a,
            b: self.output_id.b,
            ins: self.output_id.ins,
            associated_pc: self.output_id.associated_pc,
        });

        let output_id = decode_stage(
            &IdInput {
                ins: self.output_if.ins,
                associated_pc: self.output_if.associated_pc,
                flags: self.flags,
                ins_ex: self.output_id.ins,
                ctl_ex: self.output_id.ctl_ex,
                ctl_mem: self.output_ex.ctl,
                sel_c_mem: self.output_ex.sel_c,
                y_ex: output_ex.y,
                y_mem: output_mem.y,
                jump: output_ex.jump,
            },
            self.decoder.as_ref(),
            &self.regs,
        );

        if self.output_id.ctl_ex.updates_flags() {
            self.flags = output_ex.flags;
        }

        let instructions = &self.instructions;
        let output_if = fetch_stage(
            &mut self.fetch,
            &IfInput {
                stall: output_id.stall,
                y: output_ex.y,
                jump: output_ex.jump,
                jump_absolute: output_ex.jump_absolute,
                rst,
            },
            |addr| instructions.get(addr as usize).copied().unwrap_or(0),
        );

        self.stats.cycles += 1;
        if output_id.stall {
            self.stats.stall_cycles += 1;
        }
        if output_ex.jump {
            self.stats.taken_jumps += 1;
        }

        self.prev_pc = self.pc;
        self.pc = output_if.pc;
        self.output_if = output_if;
        self.output_id = output_id;
        self.output_ex = output_ex;
        self.output_mem = output_mem;
        self.output_wb = output_wb;
        self.reset_counter = self.reset_counter.saturating_sub(1);
        self.timestamp += 1;

        if self.trace {
            self.trace_cycle();
        }
        if self.output_ex.halt {
            tracing::debug!(
                pc = ?self.output_ex.associated_pc,
                timestamp = self.timestamp,
                "halted"
            );
        }
    }

    /// Holds the reset line for the configured number of cycles.
    ///
    /// Registers and flags keep their values; the pipeline drains to NOPs and
    /// the PC returns to zero. The timestamp and statistics are cleared once
    /// the reset line is released.
    pub fn reset(&mut self) {
        self.reset_counter = self.reset_cycles;
        while self.is_resetting() {
            self.step();
        }
        self.timestamp = 0;
        self.stats.reset();
        tracing::debug!(cycles = self.reset_cycles, "reset complete");
    }

    /// Steps until the CPU halts or the deadline passes.
    ///
    /// At least one cycle is always stepped.
    ///
    /// # Returns
    ///
    /// `true` if the CPU halted, `false` if the deadline passed first.
    pub fn run(&mut self, deadline: Instant) -> bool {
        loop {
            self.step();
            if Instant::now() > deadline {
                return self.is_halted();
            }
            if self.is_halted() {
                return true;
            }
        }
    }

    /// Steps until the CPU halts or `max_cycles` cycles have elapsed.
    ///
    /// # Returns
    ///
    /// `true` if the CPU halted within the budget.
    pub fn run_for(&mut self, max_cycles: u64) -> bool {
        for _ in 0..max_cycles {
            self.step();
            if self.is_halted() {
                return true;
            }
        }
        false
    }

    /// Emits one trace event describing every stage.
    fn trace_cycle(&self) {
        tracing::trace!(
            timestamp = self.timestamp,
            pc = self.pc,
            flags = %self.flags,
            stall = self.output_id.stall,
            halt = self.output_ex.halt,
            "IF {} | ID {} | EX {} | MEM {} | WB {}",
            self.output_if.status(),
            self.output_id.status(),
            self.output_ex.status(),
            self.output_mem.status(),
            self.output_wb.status()
        );
    }
}
