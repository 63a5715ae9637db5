//! ALU adder operations.
//!
//! All three arithmetic functions of the part are the same 16-bit adder fed
//! with optionally complemented inputs, so one routine computes the sum,
//! carry-out, and two's-complement overflow for each of them.

/// Output of the 16-bit adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdderResult {
    /// Sum modulo 2^16.
    pub sum: u16,
    /// Carry out of bit 15.
    pub carry: bool,
    /// Both addends share a sign that the sum does not.
    pub overflow: bool,
}

/// Adds two 16-bit values and a carry-in.
///
/// # Arguments
///
/// * `r`        - First addend, already complemented if the function requires it.
/// * `s`        - Second addend, already complemented if the function requires it.
/// * `carry_in` - Carry into bit 0 (`0` or `1`).
///
/// # Returns
///
/// The wrapped sum with carry-out and signed overflow.
pub const fn add(r: u16, s: u16, carry_in: u16) -> AdderResult {
    let wide = r as u32 + s as u32 + (carry_in & 1) as u32;
    let sum = wide as u16;
    let same_sign = (r & 0x8000) == (s & 0x8000);
    AdderResult {
        sum,
        carry: wide > 0xffff,
        overflow: same_sign && (r & 0x8000) != (sum & 0x8000),
    }
}
