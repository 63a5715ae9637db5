//! Pipeline Latch Interface.
//!
//! This module defines the common trait for pipeline latches. It provides:
//! 1. **Bookkeeping:** The associated PC of the instruction a latch carries.
//! 2. **Bubble Detection:** Whether a latch carries no architectural effect.
//! 3. **Status Text:** A one-line description for stage views and traces.

use std::fmt;

use crate::core::pipeline::latches::{ExOutput, IdOutput, IfOutput, MemOutput, WbOutput, describe};
use crate::core::pipeline::signals::ControlWord;

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch: fmt::Display {
    /// Address of the instruction occupying the latch, if known.
    fn associated_pc(&self) -> Option<u16>;

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if the latch carries NOP content, `false` otherwise.
    fn is_bubble(&self) -> bool;

    /// One-line status: the associated PC followed by the latch contents.
    fn status(&self) -> String {
        describe(self.associated_pc(), self)
    }
}

impl PipelineLatch for IfOutput {
    fn associated_pc(&self) -> Option<u16> {
        self.associated_pc
    }

    fn is_bubble(&self) -> bool {
        self.ins == 0
    }
}

impl PipelineLatch for IdOutput {
    fn associated_pc(&self) -> Option<u16> {
        self.associated_pc
    }

    fn is_bubble(&self) -> bool {
        self.ctl_ex == ControlWord::NOP_EX
    }
}

impl PipelineLatch for ExOutput {
    fn associated_pc(&self) -> Option<u16> {
        self.associated_pc
    }

    fn is_bubble(&self) -> bool {
        self.ctl == ControlWord::NOP_EX
    }
}

impl PipelineLatch for MemOutput {
    fn associated_pc(&self) -> Option<u16> {
        self.associated_pc
    }

    fn is_bubble(&self) -> bool {
        self.ctl == ControlWord::NOP_EX
    }
}

impl PipelineLatch for WbOutput {
    fn associated_pc(&self) -> Option<u16> {
        self.associated_pc
    }

    fn is_bubble(&self) -> bool {
        !self.write_enable
    }
}
