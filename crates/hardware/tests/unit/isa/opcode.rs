//! Opcode Decoding Tests
//!
//! Every 4-bit value decodes; upper bits are ignored; mnemonics and the
//! `Display` form parse back to the same opcode.

use alusim_core::AluOp;
use alusim_core::common::ParseOpError;
use rstest::rstest;

#[rstest]
#[case(0x0, AluOp::Add)]
#[case(0x1, AluOp::Sub)]
#[case(0x2, AluOp::And)]
#[case(0x3, AluOp::Or)]
#[case(0x4, AluOp::Xor)]
#[case(0x5, AluOp::Slt)]
#[case(0x6, AluOp::Sll)]
#[case(0x7, AluOp::Srl)]
#[case(0x8, AluOp::Sra)]
#[case(0x9, AluOp::from_bits(0x9))]
#[case(0xF, AluOp::from_bits(0xF))]
fn decode_table(#[case] bits: u32, #[case] op: AluOp) {
    assert_eq!(AluOp::from_bits(bits), op);
    assert_eq!(u32::from(op), bits);
}

#[test]
fn upper_bits_are_masked() {
    assert_eq!(AluOp::from_bits(0xFFFF_FFF6), AluOp::Sll);
    assert_eq!(AluOp::from(0x21), AluOp::Sub);
}

#[test]
fn all_covers_sixteen_encodings_in_order() {
    let bits: Vec<u8> = AluOp::all().map(AluOp::bits).collect();
    assert_eq!(bits, (0..16).collect::<Vec<u8>>());
    assert_eq!(AluOp::all().filter(|op| op.is_defined()).count(), 9);
}

#[test]
fn shift_class() {
    let shifts: Vec<AluOp> = AluOp::all().filter(|op| op.is_shift()).collect();
    assert_eq!(shifts, vec![AluOp::Sll, AluOp::Srl, AluOp::Sra]);
}

#[test]
fn display_round_trips_through_from_str() {
    for op in AluOp::all() {
        let text = op.to_string();
        assert_eq!(text.parse::<AluOp>(), Ok(op), "{text}");
    }
}

#[rstest]
#[case("ADD", AluOp::Add)]
#[case(" sra ", AluOp::Sra)]
#[case("0x6", AluOp::Sll)]
#[case("7", AluOp::Srl)]
#[case("0xA", AluOp::from_bits(0xA))]
#[case("undef(0xc)", AluOp::from_bits(0xC))]
#[case("18", AluOp::And)]
fn parse_accepts_mnemonics_and_numbers(#[case] text: &str, #[case] op: AluOp) {
    assert_eq!(text.parse::<AluOp>(), Ok(op));
}

#[rstest]
#[case("mul")]
#[case("")]
#[case("0xZZ")]
#[case("-1")]
#[case("undef(0x2)")]
#[case("undef(0)")]
#[case("undef(0x1a)")]
fn parse_rejects_unknown_text(#[case] text: &str) {
    assert_eq!(text.parse::<AluOp>(), Err(ParseOpError(text.to_string())));
}

#[test]
fn undefined_display_names_the_code() {
    let op = AluOp::from_bits(0xB);
    assert_eq!(op.to_string(), "undef(0xb)");
    assert_eq!(op.mnemonic(), "undef");
}

#[test]
fn undefined_variant_only_holds_undefined_codes() {
    for op in AluOp::all() {
        if let AluOp::Undefined(code) = op {
            assert!((0x9..=0xF).contains(&code.code()), "{op}");
            assert_eq!(code.code(), op.bits());
        }
    }
}

#[test]
fn enum_and_raw_dispatch_agree_for_every_encoding() {
    use alusim_core::{Alu, evaluate};
    for op in AluOp::all() {
        assert_eq!(
            Alu::evaluate(op, 0xF0F0_F0F0, 0x0000_00F0),
            evaluate(0xF0F0_F0F0, 0x0000_00F0, u32::from(op)),
            "{op}"
        );
    }
}
