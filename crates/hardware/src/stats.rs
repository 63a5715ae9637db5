//! Pipeline statistics collection and reporting.
//!
//! This module tracks the events the driver observes each cycle. It provides:
//! 1. **Cycles:** Total cycles stepped since the last reset.
//! 2. **Stalls:** Cycles in which ID held the pipeline for a data or flags hazard.
//! 3. **Control Flow:** Taken jumps, each of which squashes the instructions behind it.
//! 4. **Memory Traffic:** Loads and stores issued by the MEM stage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters maintained by the CPU driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Cycles stepped since the reset line was released.
    pub cycles: u64,
    /// Cycles in which ID asserted its stall output.
    pub stall_cycles: u64,
    /// Jumps taken (each flushes the fetch in flight).
    pub taken_jumps: u64,
    /// Memory loads issued.
    pub loads: u64,
    /// Memory stores issued.
    pub stores: u64,
}

impl PipelineStats {
    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of cycles lost to stalls, in `0.0..=1.0`.
    pub fn stall_ratio(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.stall_cycles as f64 / self.cycles as f64
        }
    }

    /// Average number of cycles between stalls, or `None` if nothing stalled.
    pub fn cycles_per_stall(&self) -> Option<f64> {
        (self.stall_cycles > 0).then(|| self.cycles as f64 / self.stall_cycles as f64)
    }

    /// One-line summary suitable for a log message.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycles={} stalls={} ({:.2}%) jumps={} loads={} stores={}",
            self.cycles,
            self.stall_cycles,
            self.stall_ratio() * 100.0,
            self.taken_jumps,
            self.loads,
            self.stores
        )?;
        if let Some(cps) = self.cycles_per_stall() {
            write!(f, " cycles/stall={cps:.2}")?;
        }
        Ok(())
    }
}
