//! ALU bitwise and constant operations.
//!
//! These functions never produce a carry or overflow.

use super::function;

/// Executes a non-arithmetic ALU function.
///
/// # Arguments
///
/// * `func` - Function select (clear, XOR, OR, AND, or preset).
/// * `r`    - Routed `R` operand.
/// * `s`    - Routed `S` operand.
///
/// # Returns
///
/// The 16-bit result. Adder function codes are not handled here and yield `0`.
pub const fn execute(func: u8, r: u16, s: u16) -> u16 {
    match func {
        function::XOR => r ^ s,
        function::OR => r | s,
        function::AND => r & s,
        function::PRESET => 0xffff,
        _ => 0x0000,
    }
}
