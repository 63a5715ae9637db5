//! # Pipeline Latch Tests
//!
//! Tests for latch defaults, trace rendering, and the `PipelineLatch` views.

use pretty_assertions::assert_eq;
use turtle16_core::core::arch::Flags;
use turtle16_core::core::pipeline::latches::{ExOutput, IdOutput, IfOutput, MemOutput, WbOutput};
use turtle16_core::core::pipeline::signals::ControlWord;
use turtle16_core::core::pipeline::traits::PipelineLatch;

#[test]
fn test_defaults_are_bubbles() {
    assert!(IfOutput::default().is_bubble());
    assert!(IdOutput::default().is_bubble());
    assert!(ExOutput::default().is_bubble());
    assert!(MemOutput::default().is_bubble());
    assert!(WbOutput::default().is_bubble());
    assert_eq!(ExOutput::default().ctl, ControlWord::NOP_EX);
    assert!(!ExOutput::default().halt);
}

#[test]
fn test_if_output_status() {
    let out = IfOutput {
        ins: 0x2321,
        pc: 5,
        associated_pc: Some(4),
    };
    assert!(!out.is_bubble());
    assert_eq!(out.associated_pc(), Some(4));
    assert_eq!(out.status(), "[0004] ins: 2321, pc: 0005");
    assert_eq!(IfOutput::default().status(), "[----] ins: 0000, pc: 0000");
}

#[test]
fn test_id_output_display() {
    let out = IdOutput {
        stall: true,
        ..IdOutput::default()
    };
    assert_eq!(
        out.to_string(),
        "stall, ctl: 1fffff, a: 0000, b: 0000, ins: 0000"
    );
}

#[test]
fn test_ex_output_display() {
    let out = ExOutput {
        flags: Flags::new(false, true, true, false),
        jump: true,
        y: 0x1234,
        ..ExOutput::default()
    };
    assert_eq!(
        out.to_string(),
        "nCZvJah, y: 1234, storeOp: 0000, ctl: 1fffff, selC: 0"
    );
}

#[test]
fn test_mem_output_display() {
    let out = MemOutput {
        y: 0xffff,
        store_op: 0xabcd,
        sel_c: 3,
        ..MemOutput::default()
    };
    assert_eq!(
        out.to_string(),
        "y: ffff, storeOp: abcd, selC: 3, ctl: 1fffff"
    );
}

#[test]
fn test_wb_output() {
    let out = WbOutput {
        c: 0x00ff,
        sel_c: 1,
        write_low: true,
        write_high: false,
        write_enable: true,
        associated_pc: Some(0x10),
    };
    assert!(!out.is_bubble());
    assert_eq!(out.status(), "[0010] c: 00ff, LhE");
}
