//! Turtle16 Instruction Set Architecture.
//!
//! Contains the opcode map, instruction field extraction, the decode ROM that
//! turns `(flags, opcode)` into a control word, and the disassembler.
//!
//! # Components
//!
//! * `opcodes`: The 32 five-bit major opcodes.
//! * `instruction`: Register selectors and immediate extraction.
//! * `decode`: The decode ROM and the `InstructionDecoder` trait.
//! * `control`: The built-in control equations that program the ROM.
//! * `disasm`: Instruction and program disassembly.

/// Control equations used to program the default decode ROM.
pub mod control;

/// Decode ROM addressing, storage, and lookup.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Opcode definitions.
pub mod opcodes;

pub use decode::{DecodeRom, InstructionDecoder};
