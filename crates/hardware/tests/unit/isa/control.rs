//! # Control Logic Tests
//!
//! Tests for the control words produced by the built-in decoder equations.

use rstest::rstest;
use turtle16_core::core::arch::Flags;
use turtle16_core::core::pipeline::signals::{
    ControlWord, RightOperand, StoreOperand, WriteBackSource,
};
use turtle16_core::core::units::alu::{function, routing};
use turtle16_core::isa::control::{branch_taken, control_word, generate};
use turtle16_core::isa::opcodes::*;

fn word(opcode: u8) -> ControlWord {
    control_word(opcode, Flags::default())
}

#[test]
fn test_generate_matches_control_word() {
    let table = generate();
    assert_eq!(table.len(), 512);
    assert_eq!(table[OP_LOAD as usize], word(OP_LOAD));
    assert_eq!(
        table[(1 << 6) | OP_BEQ as usize],
        control_word(OP_BEQ, Flags::new(false, false, true, false))
    );
}

#[test]
fn test_nop() {
    let nop = word(OP_NOP);
    assert_eq!(nop, ControlWord::NOP_ID);
    assert!(!nop.halt());
    assert!(!nop.write_enable());
    assert!(nop.left_operand_unused());
    assert!(nop.right_operand_unused());
}

#[test]
fn test_hlt() {
    assert_eq!(word(OP_HLT), ControlWord::NOP_ID.assert_line(0));
}

#[test]
fn test_load() {
    let ctl = word(OP_LOAD);
    assert!(ctl.mem_load());
    assert!(!ctl.mem_store());
    assert_eq!(ctl.right_operand(), RightOperand::Imm5);
    assert_eq!(ctl.alu_function(), function::ADD);
    assert_eq!(ctl.write_back_source(), WriteBackSource::StoreOperand);
    assert!(ctl.write_enable() && ctl.write_low() && ctl.write_high());
    assert!(!ctl.left_operand_unused());
    assert!(!ctl.updates_flags());
}

#[test]
fn test_store() {
    let ctl = word(OP_STORE);
    assert!(ctl.mem_store());
    assert!(ctl.drives_store_operand());
    assert_eq!(ctl.store_operand(), StoreOperand::RegisterB);
    assert_eq!(ctl.right_operand(), RightOperand::SplitImm5);
    assert!(!ctl.write_enable());
    assert!(!ctl.left_operand_unused());
    assert!(!ctl.right_operand_unused());
}

#[test]
fn test_li_and_lui_lanes() {
    let li = word(OP_LI);
    assert_eq!(li.store_operand(), StoreOperand::Imm8);
    assert!(li.write_low() && li.write_high());
    assert!(li.left_operand_unused() && li.right_operand_unused());

    let lui = word(OP_LUI);
    assert_eq!(lui.store_operand(), StoreOperand::UpperImm8);
    assert!(!lui.write_low());
    assert!(lui.write_high());
}

#[test]
fn test_compare_sets_flags_without_write_back() {
    for opcode in [OP_CMP, OP_CMPI] {
        let ctl = word(opcode);
        assert!(ctl.updates_flags());
        assert!(!ctl.write_enable());
        assert_eq!(ctl.alu_function(), function::R_MINUS_S);
        assert_eq!(ctl.carry_in(), 1);
    }
}

#[rstest]
#[case(OP_ADD, function::ADD, 0, RightOperand::RegisterB)]
#[case(OP_SUB, function::R_MINUS_S, 1, RightOperand::RegisterB)]
#[case(OP_AND, function::AND, 0, RightOperand::RegisterB)]
#[case(OP_OR, function::OR, 0, RightOperand::RegisterB)]
#[case(OP_XOR, function::XOR, 0, RightOperand::RegisterB)]
#[case(OP_ADDI, function::ADD, 0, RightOperand::Imm5)]
#[case(OP_SUBI, function::R_MINUS_S, 1, RightOperand::Imm5)]
#[case(OP_ANDI, function::AND, 0, RightOperand::Imm5)]
#[case(OP_ORI, function::OR, 0, RightOperand::Imm5)]
#[case(OP_XORI, function::XOR, 0, RightOperand::Imm5)]
fn test_arithmetic(
    #[case] opcode: u8,
    #[case] func: u8,
    #[case] carry: u16,
    #[case] right: RightOperand,
) {
    let ctl = word(opcode);
    assert_eq!(ctl.alu_function(), func);
    assert_eq!(ctl.carry_in(), carry);
    assert_eq!(ctl.right_operand(), right);
    assert_eq!(ctl.alu_routing(), routing::A_B);
    assert!(ctl.updates_flags());
    assert_eq!(ctl.write_back_source(), WriteBackSource::AluResult);
    assert!(ctl.write_enable());
    assert_eq!(ctl.right_operand_unused(), right != RightOperand::RegisterB);
}

#[test]
fn test_not() {
    let ctl = word(OP_NOT);
    assert_eq!(ctl.alu_function(), function::S_MINUS_R);
    assert_eq!(ctl.alu_routing(), routing::A_ZERO);
    assert!(!ctl.updates_flags());
    assert!(ctl.write_enable());
}

#[test]
fn test_jumps() {
    let jmp = word(OP_JMP);
    assert!(jmp.jump());
    assert!(!jmp.jump_absolute());
    assert_eq!(jmp.right_operand(), RightOperand::Imm11);

    let jr = word(OP_JR);
    assert!(jr.jump() && jr.jump_absolute());
    assert!(!jr.write_enable());

    let jalr = word(OP_JALR);
    assert!(jalr.jump() && jalr.jump_absolute());
    assert_eq!(jalr.store_operand(), StoreOperand::Pc);
    assert_eq!(jalr.write_back_source(), WriteBackSource::StoreOperand);
    assert!(jalr.write_enable());
}

#[rstest]
#[case(OP_BEQ, Flags::new(false, false, true, false), true)]
#[case(OP_BEQ, Flags::default(), false)]
#[case(OP_BNE, Flags::default(), true)]
#[case(OP_BNE, Flags::new(false, false, true, false), false)]
#[case(OP_BLT, Flags::new(true, false, false, false), true)]
#[case(OP_BLT, Flags::new(true, false, false, true), false)]
#[case(OP_BLT, Flags::new(false, false, false, true), true)]
#[case(OP_BGT, Flags::default(), true)]
#[case(OP_BGT, Flags::new(false, false, true, false), false)]
#[case(OP_BGT, Flags::new(true, false, false, false), false)]
#[case(OP_BLTU, Flags::default(), true)]
#[case(OP_BLTU, Flags::new(false, true, false, false), false)]
#[case(OP_BGTU, Flags::new(false, true, false, false), true)]
#[case(OP_BGTU, Flags::new(false, true, true, false), false)]
#[case(OP_ADD, Flags::new(false, false, true, false), false)]
fn test_branch_conditions(#[case] opcode: u8, #[case] flags: Flags, #[case] taken: bool) {
    assert_eq!(branch_taken(opcode, flags), taken);
    if is_conditional_branch(opcode) {
        let ctl = control_word(opcode, flags);
        assert_eq!(ctl.jump(), taken);
        if !taken {
            assert_eq!(ctl, ControlWord::NOP_ID);
        }
    }
}

#[test]
fn test_carry_arithmetic_follows_carry_flag() {
    let set = Flags::new(false, true, false, false);
    assert_eq!(control_word(OP_ADC, set).carry_in(), 1);
    assert_eq!(control_word(OP_ADC, Flags::default()).carry_in(), 0);
    assert_eq!(control_word(OP_SBC, set).carry_in(), 0);
    assert_eq!(control_word(OP_SBC, Flags::default()).carry_in(), 1);
    assert_eq!(control_word(OP_SBC, set).alu_function(), function::R_MINUS_S);
}
