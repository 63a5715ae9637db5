//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the values each stage of the five-stage pipeline
//! (IF → ID → EX → MEM → WB) latches at the end of a cycle:
//!
//! 1. **Instruction Flow:** The instruction word, operands, and results carried forward.
//! 2. **Control Flow:** The control-word slice and the jump/stall/halt lines fed back.
//! 3. **Debug Bookkeeping:** The associated PC of the instruction occupying each latch.
//!
//! Every latch defaults to its idle (NOP) content, which is the power-on state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::arch::Flags;
use crate::core::pipeline::signals::ControlWord;

/// Writes an optional associated PC as four hex digits, or dashes when absent.
struct Pc(Option<u16>);

impl fmt::Display for Pc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(pc) => write!(f, "{pc:04x}"),
            None => f.write_str("----"),
        }
    }
}

/// Output of the IF stage.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfOutput {
    /// The fetched instruction word (`0`, a NOP, while resetting or after a taken jump).
    pub ins: u16,
    /// Program counter after this cycle: the address of the next fetch.
    pub pc: u16,
    /// Address the instruction was fetched from.
    pub associated_pc: Option<u16>,
}

impl fmt::Display for IfOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ins: {:04x}, pc: {:04x}", self.ins, self.pc)
    }
}

/// Output of the ID stage.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdOutput {
    /// ID is stalling; IF must hold its output.
    pub stall: bool,
    /// Control word for EX (the 21-bit slice, or `NOP_EX` when flushed).
    pub ctl_ex: ControlWord,
    /// Left operand value after forwarding.
    pub a: u16,
    /// Right operand value after forwarding.
    pub b: u16,
    /// Instruction word with the opcode stripped (bits 10-0).
    pub ins: u16,
    /// Address of the instruction, cleared when the slot is flushed.
    pub associated_pc: Option<u16>,
}

impl fmt::Display for IdOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, ctl: {:06x}, a: {:04x}, b: {:04x}, ins: {:04x}",
            if self.stall { "stall" } else { "go" },
            self.ctl_ex,
            self.a,
            self.b,
            self.ins
        )
    }
}

/// Output of the EX stage.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExOutput {
    /// Condition flags computed from this cycle's ALU operation.
    pub flags: Flags,
    /// J is asserted: IF must take the jump.
    pub jump: bool,
    /// JABS is asserted: `y` replaces the PC instead of being added to it.
    pub jump_absolute: bool,
    /// ALU result: data, effective address, or jump target.
    pub y: u16,
    /// HLT is asserted.
    pub halt: bool,
    /// Store operand: register `B`, the PC, or an immediate.
    pub store_op: u16,
    /// Control word passed on to MEM.
    pub ctl: ControlWord,
    /// Destination register selector.
    pub sel_c: usize,
    /// Address of the instruction.
    pub associated_pc: Option<u16>,
}

impl fmt::Display for ExOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}, y: {:04x}, storeOp: {:04x}, ctl: {:06x}, selC: {}",
            self.flags,
            if self.jump { 'J' } else { 'j' },
            if self.jump_absolute { 'A' } else { 'a' },
            if self.halt { 'H' } else { 'h' },
            self.y,
            self.store_op,
            self.ctl,
            self.sel_c
        )
    }
}

/// Output of the MEM stage.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemOutput {
    /// ALU result passed through from EX.
    pub y: u16,
    /// Store operand, or the loaded word for a load.
    pub store_op: u16,
    /// Destination register selector.
    pub sel_c: usize,
    /// Control word passed on to WB.
    pub ctl: ControlWord,
    /// Address of the instruction.
    pub associated_pc: Option<u16>,
}

impl fmt::Display for MemOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y: {:04x}, storeOp: {:04x}, selC: {}, ctl: {:06x}",
            self.y, self.store_op, self.sel_c, self.ctl
        )
    }
}

/// Output of the WB stage, consumed by the ID stage's register-file commit.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WbOutput {
    /// Value to commit.
    pub c: u16,
    /// Destination register selector.
    pub sel_c: usize,
    /// WRL is asserted.
    pub write_low: bool,
    /// WRH is asserted.
    pub write_high: bool,
    /// WBEN is asserted.
    pub write_enable: bool,
    /// Address of the instruction.
    pub associated_pc: Option<u16>,
}

impl fmt::Display for WbOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "c: {:04x}, {}{}{}",
            self.c,
            if self.write_low { "L" } else { "l" },
            if self.write_high { "H" } else { "h" },
            if self.write_enable { "E" } else { "e" }
        )
    }
}

/// Formats a latch as `[pc] status` for trace output.
pub(crate) fn describe(pc: Option<u16>, status: &(impl fmt::Display + ?Sized)) -> String {
    format!("[{}] {status}", Pc(pc))
}
