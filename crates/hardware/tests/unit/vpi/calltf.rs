//! `$alu_predict_vpi` Call Contract Tests
//!
//! The task reads three inputs, masks the opcode to 4 bits, evaluates, and
//! writes all five outputs. A call with the wrong number of arguments
//! touches nothing.

use alusim_core::common::HarnessError;
use alusim_core::vpi::{ValueHandle, alu_predict_calltf};
use alusim_core::{AluOutput, evaluate};
use pretty_assertions::assert_eq;

use crate::common::harness::AluPorts;
use crate::common::mocks::handle::{input, output, untouched};

#[test]
fn writes_all_outputs() {
    let mut ports = AluPorts::new(0, 1, 0x1);
    let out = alu_predict_calltf(&mut ports.args()).unwrap();

    let expected = AluOutput {
        result: 0xFFFF_FFFF,
        zero: false,
        sign: true,
        carry: true,
        overflow: false,
    };
    assert_eq!(out, expected);
    assert_eq!(ports.outputs(), expected);
    assert_eq!(ports.output_writes(), 5);
}

#[test]
fn matches_direct_evaluation_for_every_opcode() {
    for opcode in 0..16 {
        let mut ports = AluPorts::new(0x8000_0001, 0x21, opcode);
        let _ = alu_predict_calltf(&mut ports.args()).unwrap();
        assert_eq!(ports.outputs(), evaluate(0x8000_0001, 0x21, opcode), "opcode {opcode:#x}");
    }
}

#[test]
fn opcode_handle_upper_bits_are_ignored() {
    let mut ports = AluPorts::new(2, 3, 0xFFFF_FFF0);
    let out = alu_predict_calltf(&mut ports.args()).unwrap();
    assert_eq!(out.result, 5);
}

#[test]
fn inputs_are_left_unchanged() {
    let mut ports = AluPorts::new(7, 9, 0x4);
    let _ = alu_predict_calltf(&mut ports.args()).unwrap();
    assert_eq!(ports.a.value(), 7);
    assert_eq!(ports.b.value(), 9);
    assert_eq!(ports.opcode.value(), 4);
    assert_eq!(ports.a.writes() + ports.b.writes() + ports.opcode.writes(), 0);
}

#[test]
fn reads_inputs_once_and_writes_each_output_once() {
    // 0x7FFF_FFFF + 1: result 0x8000_0000, sign and overflow set.
    let mut a = input(0x7FFF_FFFF);
    let mut b = input(1);
    let mut op = input(0x0);
    let mut result = output(0x8000_0000);
    let mut zero = output(0);
    let mut sign = output(1);
    let mut carry = output(0);
    let mut overflow = output(1);

    let mut args: [&mut dyn ValueHandle; 8] = [
        &mut a,
        &mut b,
        &mut op,
        &mut result,
        &mut zero,
        &mut sign,
        &mut carry,
        &mut overflow,
    ];
    let out = alu_predict_calltf(&mut args).unwrap();
    assert!(out.overflow);
}

#[test]
fn too_few_arguments_are_rejected_without_side_effects() {
    let mut a = untouched();
    let mut b = untouched();
    let mut op = untouched();
    let mut args: [&mut dyn ValueHandle; 3] = [&mut a, &mut b, &mut op];

    let err = alu_predict_calltf(&mut args).unwrap_err();
    assert_eq!(
        err,
        HarnessError::ArgumentCount {
            task: "$alu_predict_vpi",
            expected: 8,
            found: 3,
        }
    );
}

#[test]
fn too_many_arguments_are_rejected() {
    let mut ports = AluPorts::new(1, 1, 0);
    let mut extra = untouched();
    let [a, b, op, result, zero, sign, carry, overflow] = ports.args();
    let mut args: [&mut dyn ValueHandle; 9] =
        [a, b, op, result, zero, sign, carry, overflow, &mut extra];

    let err = alu_predict_calltf(&mut args).unwrap_err();
    assert!(matches!(err, HarnessError::ArgumentCount { found: 9, .. }));
    assert_eq!(ports.output_writes(), 0);
}

#[test]
fn flag_slots_are_single_bit() {
    let mut ports = AluPorts::new(u32::MAX, 1, 0x0);
    let _ = alu_predict_calltf(&mut ports.args()).unwrap();
    for flag in [ports.zero, ports.sign, ports.carry, ports.overflow] {
        assert!(flag.value() <= 1);
        assert_eq!(flag.width(), 1);
    }
    assert_eq!(ports.zero.value(), 1);
    assert_eq!(ports.carry.value(), 1);
}
