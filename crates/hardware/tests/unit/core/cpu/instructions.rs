//! # Instruction Tests
//!
//! Each test runs a short program through the complete pipeline and checks
//! the architectural result: registers, flags, data memory traffic, and the
//! PC sequence.

use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;
use crate::common::mocks::MockBus;
use turtle16_core::core::arch::Flags;
use turtle16_core::core::pipeline::signals::ControlWord;
use turtle16_core::isa::opcodes::*;

#[rstest]
#[case(13, 13)]
#[case(-1, 0xffff)]
#[case(-128, 0xff80)]
#[case(127, 0x007f)]
fn test_li(#[case] imm: i16, #[case] expected: u16) {
    let mut ctx = TestContext::new().load_program(&[li(3, imm), hlt()]);
    ctx.step_n(5);
    assert_eq!(ctx.get_reg(3), expected);
}

#[test]
fn test_li_commits_in_write_back() {
    let mut ctx = TestContext::new().load_program(&[nop(), li(3, 13)]);
    ctx.step_n(5);
    assert_eq!(ctx.get_reg(3), 0);
    ctx.cpu.step();
    assert_eq!(ctx.get_reg(3), 13);
}

#[test]
fn test_lui_keeps_low_byte() {
    let mut ctx = TestContext::new().load_program(&[li(1, 0x34), lui(1, 0x12), hlt()]);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.get_reg(1), 0x1234);
}

#[rstest]
#[case(OP_ADD, 0x10e0)]
#[case(OP_SUB, 0xf100)]
#[case(OP_AND, 0x00f0)]
#[case(OP_OR, 0x0ff0)]
#[case(OP_XOR, 0x0f00)]
fn test_register_alu(#[case] opcode: u8, #[case] expected: u16) {
    let mut ctx = TestContext::new().load_program(&[alu(opcode, 3, 1, 2), hlt()]);
    ctx.set_reg(1, 0x00f0);
    ctx.set_reg(2, 0x0ff0);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.get_reg(3), expected);
}

#[rstest]
#[case(OP_ADDI, -16, 0x00e0)]
#[case(OP_SUBI, 1, 0x00ef)]
#[case(OP_ANDI, 15, 0x0000)]
#[case(OP_ORI, 15, 0x00ff)]
#[case(OP_XORI, -1, 0xff0f)]
fn test_immediate_alu(#[case] opcode: u8, #[case] imm: i16, #[case] expected: u16) {
    let mut ctx = TestContext::new().load_program(&[alu_imm(opcode, 3, 1, imm), hlt()]);
    ctx.set_reg(1, 0x00f0);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.get_reg(3), expected);
}

#[test]
fn test_not() {
    let mut ctx = TestContext::new().load_program(&[not(0, 1), hlt()]);
    ctx.set_reg(1, 0x00f0);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.get_reg(0), 0xff0f);
}

#[test]
fn test_cmp_sets_flags_only() {
    let mut ctx = TestContext::new().load_program(&[cmp(1, 2), hlt()]);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.cpu.flags, Flags::new(true, false, false, false));
    assert_eq!(ctx.cpu.registers(), [0, 1, 2, 0, 0, 0, 0, 0]);
}

#[test]
fn test_cmpi_equal() {
    let mut ctx = TestContext::new().load_program(&[cmpi(7, 9), hlt()]);
    ctx.set_reg(7, 9);
    assert!(ctx.run_to_halt(20));
    assert!(ctx.cpu.flags.z);
    assert!(ctx.cpu.flags.c);
}

#[test]
fn test_adc_adds_carry() {
    let mut ctx = TestContext::new().load_program(&[alu(OP_ADC, 0, 1, 2), hlt()]);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 1);
    ctx.cpu.flags.c = true;
    ctx.step_n(5);
    assert_eq!(ctx.get_reg(0), 3);
    assert!(!ctx.cpu.flags.c);
}

#[rstest]
#[case(true, 0, true)]
#[case(false, 1, false)]
fn test_sbc(#[case] carry: bool, #[case] expected: u16, #[case] zero: bool) {
    let mut ctx = TestContext::new().load_program(&[alu(OP_SBC, 0, 1, 2), hlt()]);
    ctx.set_reg(1, 2);
    ctx.set_reg(2, 1);
    ctx.cpu.flags.c = carry;
    ctx.step_n(5);
    assert_eq!(ctx.get_reg(0), expected);
    assert!(ctx.cpu.flags.c);
    assert_eq!(ctx.cpu.flags.z, zero);
}

#[test]
fn test_load_reads_bus_once() {
    let mut bus = MockBus::new();
    let _ = bus
        .expect_load()
        .with(eq(0xffff))
        .times(1)
        .return_const(0xabcdu16);
    let _ = bus.expect_store().never();

    let mut ctx = TestContext::with_bus(bus).load_program(&[load(3, 1, 1), hlt()]);
    ctx.set_reg(1, 0xfffe);
    ctx.step_n(5);
    assert_eq!(ctx.get_reg(3), 0xabcd);
}

#[test]
fn test_store_writes_bus() {
    let mut bus = MockBus::new();
    let _ = bus
        .expect_store()
        .with(eq(0xabcd), eq(0xffff))
        .times(1)
        .return_const(());
    let _ = bus.expect_load().never();

    // STORE r3, r1, -1
    let ins: u16 = 0b00011_111_001_011_11;
    assert_eq!(ins, store(3, 1, -1));
    let mut ctx = TestContext::with_bus(bus).load_program(&[nop(), ins, hlt()]);
    ctx.set_reg(1, 0);
    ctx.set_reg(3, 0xabcd);
    // STORE leaves MEM on the cycle HLT enters EX.
    ctx.step_n(5);
    ctx.cpu.bus_mut().checkpoint();
    assert!(ctx.cpu.is_halted());
}

#[test]
fn test_store_then_load_through_ram() {
    let mut ctx =
        TestContext::new().load_program(&[li(1, 42), store(1, 0, 5), load(2, 0, 5), hlt()]);
    assert!(ctx.run_to_halt(30));
    assert_eq!(ctx.cpu.bus().read(5), 42);
    assert_eq!(ctx.get_reg(2), 42);
}

#[test]
fn test_jmp() {
    let mut ctx = TestContext::new().load_program(&[nop(), jmp(1023)]);
    assert_eq!(ctx.pc_trace(4), vec![1, 2, 3, 1026]);
}

#[test]
fn test_jmp_skips_and_squashes() {
    let mut ctx =
        TestContext::new().load_program(&[jmp(1), li(1, 1), li(2, 1), li(3, 1), hlt()]);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 1);
}

#[test]
fn test_jr() {
    let mut ctx = TestContext::new().load_program(&[
        jr(1, 0),
        li(2, 1),
        li(3, 1),
        li(4, 1),
        li(5, 1),
        hlt(),
    ]);
    ctx.set_reg(1, 4);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.cpu.registers(), [0, 4, 0, 0, 0, 1, 0, 0]);
}

#[test]
fn test_jalr_links_and_jumps() {
    let mut ctx = TestContext::new().load_program(&[nop(), jalr(7, 1, 0)]);
    ctx.set_reg(1, 1000);
    assert_eq!(ctx.pc_trace(6), vec![1, 2, 3, 1000, 1001, 1002]);
    assert_eq!(ctx.get_reg(7), 3);
}

/// Compares `rA` with `rB`, then branches over `LI r4, 1`.
fn branch_program(opcode: u8) -> Vec<u16> {
    vec![cmp(1, 2), branch(opcode, 0), li(4, 1), li(5, 1), hlt()]
}

#[rstest]
#[case(OP_BEQ, 3, 3, true)]
#[case(OP_BEQ, 3, 4, false)]
#[case(OP_BNE, 3, 4, true)]
#[case(OP_BNE, 3, 3, false)]
#[case(OP_BLT, 1, 2, true)]
#[case(OP_BLT, 2, 1, false)]
#[case(OP_BLT, 0xffff, 1, true)]
#[case(OP_BGT, 2, 1, true)]
#[case(OP_BGT, 1, 1, false)]
#[case(OP_BGT, 1, 0xffff, true)]
#[case(OP_BLTU, 1, 2, true)]
#[case(OP_BLTU, 0xffff, 1, false)]
#[case(OP_BGTU, 2, 1, true)]
#[case(OP_BGTU, 1, 1, false)]
#[case(OP_BGTU, 1, 0xffff, false)]
fn test_conditional_branch(
    #[case] opcode: u8,
    #[case] a: u16,
    #[case] b: u16,
    #[case] taken: bool,
) {
    let mut ctx = TestContext::new().load_program(&branch_program(opcode));
    ctx.set_reg(1, a);
    ctx.set_reg(2, b);
    assert!(ctx.run_to_halt(30));
    assert_eq!(ctx.get_reg(4), u16::from(!taken));
    assert_eq!(ctx.get_reg(5), 1);
}

#[test]
fn test_branch_waits_for_flags() {
    let mut ctx = TestContext::new().load_program(&branch_program(OP_BEQ));
    ctx.set_reg(1, 3);
    ctx.set_reg(2, 3);
    ctx.step_n(3);
    assert!(ctx.cpu.output_id.stall);
    assert_eq!(ctx.cpu.output_id.ctl_ex, ControlWord::NOP_EX);
    ctx.cpu.step();
    assert!(ctx.cpu.output_id.ctl_ex.jump());
}

#[test]
fn test_unassigned_opcodes_are_nops() {
    let mut ctx = TestContext::new().load_program(&[19 << 11, 23 << 11 | 0x7ff, hlt()]);
    assert!(ctx.run_to_halt(20));
    assert_eq!(ctx.cpu.registers(), [0; 8]);
    assert_eq!(ctx.cpu.flags, Flags::default());
}
