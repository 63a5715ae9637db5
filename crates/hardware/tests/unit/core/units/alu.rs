//! # ALU Tests
//!
//! Tests for the IDT7381 model: every function code, operand routing, and
//! the carry/overflow rules of the adder.

use proptest::prelude::*;
use rstest::rstest;
use turtle16_core::core::units::alu::{AluInput, AluOutput, Idt7381, function, routing};

fn run(function: u8, routing: u8, a: u16, b: u16, carry_in: u16) -> AluOutput {
    Idt7381::new().execute(&AluInput {
        a,
        b,
        carry_in,
        function,
        routing,
    })
}

#[rstest]
#[case(function::CLEAR, 0x1234, 0x00ff, 0x0000)]
#[case(function::XOR, 0x1234, 0x00ff, 0x12cb)]
#[case(function::OR, 0x1234, 0x00ff, 0x12ff)]
#[case(function::AND, 0x1234, 0x00ff, 0x0034)]
#[case(function::PRESET, 0x1234, 0x00ff, 0xffff)]
#[case(function::ADD, 0x1234, 0x00ff, 0x1333)]
#[case(function::R_MINUS_S, 0x1234, 0x0034, 0x1200)]
#[case(function::S_MINUS_R, 0x0034, 0x1234, 0x1200)]
fn test_function(#[case] func: u8, #[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    let carry_in = u16::from(matches!(func, function::R_MINUS_S | function::S_MINUS_R));
    assert_eq!(run(func, routing::A_B, a, b, carry_in).f, expected);
}

#[rstest]
#[case(routing::A_B, 0x0005)]
#[case(routing::A_ZERO, 0x0002)]
#[case(routing::ZERO_B, 0x0003)]
#[case(routing::A_F, 0x0002)]
fn test_routing(#[case] rs: u8, #[case] expected: u16) {
    assert_eq!(run(function::ADD, rs, 2, 3, 0).f, expected);
}

#[test]
fn test_logic_functions_never_carry() {
    let out = run(function::PRESET, routing::A_B, 0xffff, 0xffff, 1);
    assert!(!out.c16);
    assert!(!out.ovf);
    assert!(!out.z);
}

#[test]
fn test_clear_sets_zero() {
    assert!(run(function::CLEAR, routing::A_B, 1, 1, 0).z);
}

#[test]
fn test_compare_equal() {
    let out = run(function::R_MINUS_S, routing::A_B, 7, 7, 1);
    assert_eq!(out.f, 0);
    assert!(out.c16);
    assert!(out.z);
    assert!(!out.ovf);
}

#[test]
fn test_compare_less_borrows() {
    let out = run(function::R_MINUS_S, routing::A_B, 1, 2, 1);
    assert_eq!(out.f, 0xffff);
    assert!(!out.c16);
    assert!(!out.z);
    assert!(!out.ovf);
}

#[test]
fn test_signed_overflow() {
    let out = run(function::ADD, routing::A_B, 0x7fff, 1, 0);
    assert_eq!(out.f, 0x8000);
    assert!(out.ovf);
    assert!(!out.c16);

    let out = run(function::R_MINUS_S, routing::A_B, 0x8000, 1, 1);
    assert_eq!(out.f, 0x7fff);
    assert!(out.ovf);
    assert!(out.c16);
}

#[test]
fn test_carry_in_feeds_adder() {
    assert_eq!(run(function::ADD, routing::A_B, 1, 1, 1).f, 3);
    let out = run(function::ADD, routing::A_B, 0xffff, 0, 1);
    assert_eq!(out.f, 0);
    assert!(out.c16);
    assert!(out.z);
}

proptest! {
    #[test]
    fn prop_add_matches_wrapping_add(a: u16, b: u16) {
        let out = run(function::ADD, routing::A_B, a, b, 0);
        let (sum, carry) = a.overflowing_add(b);
        prop_assert_eq!(out.f, sum);
        prop_assert_eq!(out.c16, carry);
        prop_assert_eq!(out.ovf, (a as i16).overflowing_add(b as i16).1);
        prop_assert_eq!(out.z, sum == 0);
    }

    #[test]
    fn prop_subtract_matches_wrapping_sub(a: u16, b: u16) {
        let out = run(function::R_MINUS_S, routing::A_B, a, b, 1);
        prop_assert_eq!(out.f, a.wrapping_sub(b));
        // Carry is the inverted borrow.
        prop_assert_eq!(out.c16, a >= b);
        prop_assert_eq!(out.ovf, (a as i16).overflowing_sub(b as i16).1);
    }
}
