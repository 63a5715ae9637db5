//! Instruction Disassembler for Turtle16.
//!
//! Converts a 16-bit instruction word into a human-readable string for
//! pipeline tracing, stage status, and test diagnostics. When the address of
//! an instruction is known, PC-relative branch targets are replaced with
//! generated labels (`L0`, `L1`, ...).
//!
//! # Usage
//!
//! ```
//! use turtle16_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0b00010011_00100001).as_deref(), Some("LOAD r3, r1, 1"));
//! assert_eq!(disassemble(0b10011000_00000000), None); // unassigned opcode
//! ```

use std::collections::BTreeMap;

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::*;

/// Assembly syntax formats, named by their operand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// No operands.
    X,
    /// `rC, rA, rB`
    Rrr,
    /// `rC, rA, imm5`
    Rri,
    /// `rB, rA, imm5` with the immediate split around the register fields.
    Irr,
    /// `rC, imm8`
    Rii,
    /// `imm11`
    Iii,
    /// `rA, imm5`
    Xri,
    /// `rA, rB`
    Xrr,
    /// `rC, rA`
    Xrx,
}

/// Returns the mnemonic and syntax format for an opcode, or `None` if unassigned.
pub const fn lookup(opcode: u8) -> Option<(&'static str, Format)> {
    let entry = match opcode {
        OP_NOP => ("NOP", Format::X),
        OP_HLT => ("HLT", Format::X),
        OP_LOAD => ("LOAD", Format::Rri),
        OP_STORE => ("STORE", Format::Irr),
        OP_LI => ("LI", Format::Rii),
        OP_LUI => ("LUI", Format::Rii),
        OP_CMP => ("CMP", Format::Xrr),
        OP_ADD => ("ADD", Format::Rrr),
        OP_SUB => ("SUB", Format::Rrr),
        OP_AND => ("AND", Format::Rrr),
        OP_OR => ("OR", Format::Rrr),
        OP_XOR => ("XOR", Format::Rrr),
        OP_NOT => ("NOT", Format::Xrx),
        OP_CMPI => ("CMPI", Format::Xri),
        OP_ADDI => ("ADDI", Format::Rri),
        OP_SUBI => ("SUBI", Format::Rri),
        OP_ANDI => ("ANDI", Format::Rri),
        OP_ORI => ("ORI", Format::Rri),
        OP_XORI => ("XORI", Format::Rri),
        OP_JMP => ("JMP", Format::Iii),
        OP_JR => ("JR", Format::Xri),
        OP_JALR => ("JALR", Format::Rri),
        OP_BEQ => ("BEQ", Format::Iii),
        OP_BNE => ("BNE", Format::Iii),
        OP_BLT => ("BLT", Format::Iii),
        OP_BGT => ("BGT", Format::Iii),
        OP_BLTU => ("BLTU", Format::Iii),
        OP_BGTU => ("BGTU", Format::Iii),
        OP_ADC => ("ADC", Format::Rrr),
        OP_SBC => ("SBC", Format::Rrr),
        _ => return None,
    };
    Some(entry)
}

/// Disassembles one instruction without label resolution.
///
/// Returns `None` for unassigned opcodes.
pub fn disassemble(ins: u16) -> Option<String> {
    Disassembler::new().disassemble_one(None, ins)
}

/// Stateful disassembler that assigns labels to branch targets.
#[derive(Clone, Debug, Default)]
pub struct Disassembler {
    labels: BTreeMap<u16, String>,
}

impl Disassembler {
    /// Creates a disassembler with no labels assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels assigned so far, keyed by target address.
    pub const fn labels(&self) -> &BTreeMap<u16, String> {
        &self.labels
    }

    /// Returns the label for `target`, assigning the next free one if needed.
    fn label_for(&mut self, target: u16) -> String {
        let next = self.labels.len();
        self.labels
            .entry(target)
            .or_insert_with(|| format!("L{next}"))
            .clone()
    }

    /// Disassembles one instruction.
    ///
    /// # Arguments
    ///
    /// * `pc`  - Address of the instruction, if known. When present, PC-relative
    ///   targets (`pc + imm + 2`) are printed as labels.
    /// * `ins` - The 16-bit instruction word.
    ///
    /// # Returns
    ///
    /// The assembly text, or `None` for unassigned opcodes.
    pub fn disassemble_one(&mut self, pc: Option<u16>, ins: u16) -> Option<String> {
        let opcode = ins.opcode();
        let (mnemonic, format) = lookup(opcode)?;
        let c = ins.sel_c();
        let a = ins.sel_a();
        let b = ins.sel_b();
        let text = match format {
            Format::X => mnemonic.to_string(),
            Format::Rrr => format!("{mnemonic} r{c}, r{a}, r{b}"),
            Format::Rri => format!("{mnemonic} r{c}, r{a}, {}", ins.imm5() as i16),
            Format::Irr => format!("{mnemonic} r{b}, r{a}, {}", ins.imm_split() as i16),
            Format::Rii if opcode == OP_LUI => format!("{mnemonic} r{c}, {}", ins & 0xff),
            Format::Rii => format!("{mnemonic} r{c}, {}", ins.imm8() as i16),
            Format::Iii => {
                let imm = ins.imm11();
                match pc {
                    Some(pc) => {
                        let target = pc.wrapping_add(imm).wrapping_add(2);
                        format!("{mnemonic} {}", self.label_for(target))
                    }
                    None => format!("{mnemonic} {}", imm as i16),
                }
            }
            Format::Xri => format!("{mnemonic} r{a}, {}", ins.imm5() as i16),
            Format::Xrr => format!("{mnemonic} r{a}, r{b}"),
            Format::Xrx => format!("{mnemonic} r{c}, r{a}"),
        };
        Some(text)
    }

    /// Disassembles a whole program, one line per word.
    ///
    /// Unassigned opcodes produce an empty line. Labels for branch targets are
    /// available from [`Disassembler::labels`] afterwards.
    pub fn disassemble_program(&mut self, program: &[u16]) -> Vec<String> {
        program
            .iter()
            .enumerate()
            .map(|(pc, &ins)| self.disassemble_one(Some(pc as u16), ins).unwrap_or_default())
            .collect()
    }
}
