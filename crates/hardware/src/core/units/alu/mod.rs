//! Arithmetic Logic Unit (ALU).
//!
//! This module models the IDT7381 16-bit ALU used in the Execute stage. The
//! part is driven by a 3-bit function select `I`, a 2-bit operand routing
//! select `RS`, and a carry-in, and reports carry-out, zero, and overflow
//! alongside its result.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: the three adder functions (`R+S`, `R+~S`, `~R+S`)
//! - [`logic`]:      clear, XOR, OR, AND, preset
//!
//! The EX stage builds a fresh ALU every cycle, so the chip's internal `F`
//! feedback register always reads as zero.

/// Adder-based operations with carry and overflow.
pub mod arithmetic;

/// Bitwise operations and the constant functions.
pub mod logic;

/// ALU function select codes (`I2 I1 I0`).
pub mod function {
    /// Result is `0x0000`.
    pub const CLEAR: u8 = 0b000;
    /// `~R + S + C0`.
    pub const S_MINUS_R: u8 = 0b001;
    /// `R + ~S + C0`.
    pub const R_MINUS_S: u8 = 0b010;
    /// `R + S + C0`.
    pub const ADD: u8 = 0b011;
    /// `R ^ S`.
    pub const XOR: u8 = 0b100;
    /// `R | S`.
    pub const OR: u8 = 0b101;
    /// `R & S`.
    pub const AND: u8 = 0b110;
    /// Result is `0xffff`.
    pub const PRESET: u8 = 0b111;
}

/// ALU operand routing codes (`RS1 RS0`), selecting the `R` and `S` inputs.
pub mod routing {
    /// `R = A`, `S = F` (feedback register).
    pub const A_F: u8 = 0b00;
    /// `R = A`, `S = 0`.
    pub const A_ZERO: u8 = 0b01;
    /// `R = 0`, `S = B`.
    pub const ZERO_B: u8 = 0b10;
    /// `R = A`, `S = B`.
    pub const A_B: u8 = 0b11;
}

/// Inputs presented to the ALU for one operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluInput {
    /// `A` port (left operand).
    pub a: u16,
    /// `B` port (right operand).
    pub b: u16,
    /// Carry-in (`0` or `1`).
    pub carry_in: u16,
    /// Function select, one of [`function`].
    pub function: u8,
    /// Operand routing, one of [`routing`].
    pub routing: u8,
}

/// Result and status outputs of one ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// `F` port (result).
    pub f: u16,
    /// Carry out of bit 15; only the adder functions produce a carry.
    pub c16: bool,
    /// The result is zero.
    pub z: bool,
    /// Signed overflow; only the adder functions can overflow.
    pub ovf: bool,
}

/// Behavioral model of the IDT7381 ALU.
#[derive(Clone, Copy, Debug, Default)]
pub struct Idt7381 {
    f: u16,
}

impl Idt7381 {
    /// Creates an ALU with a cleared feedback register.
    pub const fn new() -> Self {
        Self { f: 0 }
    }

    /// Executes one ALU operation.
    ///
    /// # Arguments
    ///
    /// * `input` - Operand values, carry-in, function and routing selects.
    ///
    /// # Returns
    ///
    /// The result together with carry-out, zero, and overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use turtle16_core::core::units::alu::{function, routing, AluInput, Idt7381};
    ///
    /// // CMP 2, 2 is R + ~S + 1.
    /// let out = Idt7381::new().execute(&AluInput {
    ///     a: 2,
    ///     b: 2,
    ///     carry_in: 1,
    ///     function: function::R_MINUS_S,
    ///     routing: routing::A_B,
    /// });
    /// assert_eq!(out.f, 0);
    /// assert!(out.c16 && out.z && !out.ovf);
    /// ```
    pub fn execute(&self, input: &AluInput) -> AluOutput {
        let (r, s) = self.route(input);
        let sum = match input.function {
            function::S_MINUS_R => arithmetic::add(!r, s, input.carry_in),
            function::R_MINUS_S => arithmetic::add(r, !s, input.carry_in),
            function::ADD => arithmetic::add(r, s, input.carry_in),
            other => arithmetic::AdderResult {
                sum: logic::execute(other, r, s),
                carry: false,
                overflow: false,
            },
        };
        AluOutput {
            f: sum.sum,
            c16: sum.carry,
            z: sum.sum == 0,
            ovf: sum.overflow,
        }
    }

    /// Selects the `R` and `S` operands according to `RS`.
    const fn route(&self, input: &AluInput) -> (u16, u16) {
        match input.routing & 0b11 {
            routing::A_F => (input.a, self.f),
            routing::A_ZERO => (input.a, 0),
            routing::ZERO_B => (0, input.b),
            _ => (input.a, input.b),
        }
    }
}
