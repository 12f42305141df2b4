//! ALU Shift Operation Tests
//!
//!   SLL (0x6): Shift Left Logical, carry = last bit shifted out
//!   SRL (0x7): Shift Right Logical
//!   SRA (0x8): Shift Right Arithmetic
//!
//! The shift amount is `b & 0x1F`; shifting by 32 is shifting by 0.

use alusim_core::evaluate;
use proptest::prelude::*;
use rstest::rstest;

const SLL: u32 = 0x6;
const SRL: u32 = 0x7;
const SRA: u32 = 0x8;

// ═════════════════════════════════════════════════════════════════════════════
//  SLL
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sll_by_32_wraps_to_zero_shift() {
    let r = evaluate(1, 32, SLL);
    assert_eq!(r.result, 1);
    assert!(!r.carry);
}

#[test]
fn sll_by_zero_leaves_value_and_clears_carry() {
    let r = evaluate(0xFFFF_FFFF, 0, SLL);
    assert_eq!(r.result, 0xFFFF_FFFF);
    assert!(!r.carry);
    assert!(r.sign);
}

#[test]
fn sll_by_one_carries_bit_31() {
    let r = evaluate(0x8000_0001, 1, SLL);
    assert_eq!(r.result, 0x0000_0002);
    assert!(r.carry);
}

#[test]
fn sll_by_31_carries_bit_1() {
    let r = evaluate(0b10, 31, SLL);
    assert_eq!(r.result, 0);
    assert!(r.carry);
    assert!(r.zero);
}

#[test]
fn sll_ignores_upper_bits_of_b() {
    assert_eq!(evaluate(0x1, 0xFFFF_FF04, SLL).result, 0x10);
}

#[rstest]
#[case(0x0000_0001, 4, 0x0000_0010, false)]
#[case(0x1000_0000, 4, 0x0000_0000, true)]
#[case(0x0800_0000, 4, 0x8000_0000, false)]
#[case(0xF000_0000, 4, 0x0000_0000, true)]
#[case(0xF000_0000, 5, 0x0000_0000, false)]
fn sll_vectors(#[case] a: u32, #[case] b: u32, #[case] result: u32, #[case] carry: bool) {
    let r = evaluate(a, b, SLL);
    assert_eq!(r.result, result);
    assert_eq!(r.carry, carry);
    assert!(!r.overflow);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SRL / SRA
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn srl_zero_fills() {
    let r = evaluate(0x8000_0000, 1, SRL);
    assert_eq!(r.result, 0x4000_0000);
    assert!(!r.sign);
    assert!(!r.carry);
}

#[test]
fn srl_by_31_leaves_top_bit() {
    assert_eq!(evaluate(0x8000_0000, 31, SRL).result, 1);
}

#[test]
fn sra_sign_extends() {
    let r = evaluate(0x8000_0000, 1, SRA);
    assert_eq!(r.result, 0xC000_0000);
    assert!(r.sign);
    assert!(!r.carry);
}

#[test]
fn sra_by_31_of_negative_is_all_ones() {
    assert_eq!(evaluate(0x8000_0000, 31, SRA).result, 0xFFFF_FFFF);
}

#[test]
fn sra_of_positive_matches_srl() {
    assert_eq!(evaluate(0x7000_0000, 4, SRA).result, 0x0700_0000);
}

#[test]
fn sra_by_32_wraps_to_zero_shift() {
    assert_eq!(evaluate(0x8000_0000, 32, SRA).result, 0x8000_0000);
}

proptest! {
    #[test]
    fn shifts_use_low_five_bits(a in any::<u32>(), b in any::<u32>()) {
        let sh = b & 0x1F;
        prop_assert_eq!(evaluate(a, b, SLL).result, a << sh);
        prop_assert_eq!(evaluate(a, b, SRL).result, a >> sh);
        prop_assert_eq!(evaluate(a, b, SRA).result, ((a as i32) >> sh) as u32);
    }

    #[test]
    fn sll_carry_is_last_bit_out(a in any::<u32>(), sh in 1u32..32) {
        let expected = (a >> (32 - sh)) & 1 == 1;
        prop_assert_eq!(evaluate(a, sh, SLL).carry, expected);
    }

    #[test]
    fn right_shifts_never_carry(a in any::<u32>(), b in any::<u32>()) {
        prop_assert!(!evaluate(a, b, SRL).carry);
        prop_assert!(!evaluate(a, b, SRA).carry);
    }
}
