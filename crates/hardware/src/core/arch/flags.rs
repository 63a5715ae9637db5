//! Condition Flags Register.
//!
//! The four condition codes written by EX and consulted by the decode ROM
//! when it resolves conditional branches and carry-dependent arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The N/C/Z/V condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    /// Negative: bit 15 of the last flag-setting result.
    pub n: bool,
    /// Carry out of bit 15 of the last arithmetic operation.
    pub c: bool,
    /// Zero: the last flag-setting result was zero.
    pub z: bool,
    /// Signed overflow of the last arithmetic operation.
    pub v: bool,
}

impl Flags {
    /// Builds a flags value from individual bits.
    pub const fn new(n: bool, c: bool, z: bool, v: bool) -> Self {
        Self { n, c, z, v }
    }
}

impl fmt::Display for Flags {
    /// Upper case for a set flag, lower case for a clear one (e.g. `nCZv`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = if self.n { 'N' } else { 'n' };
        let c = if self.c { 'C' } else { 'c' };
        let z = if self.z { 'Z' } else { 'z' };
        let v = if self.v { 'V' } else { 'v' };
        write!(f, "{n}{c}{z}{v}")
    }
}
