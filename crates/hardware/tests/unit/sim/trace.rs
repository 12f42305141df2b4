//! Reference Trace Tests
//!
//! Capturing a trace from the model and verifying it must be clean; a
//! tampered record must be reported; malformed lines report their line.

use std::io::Cursor;

use alusim_core::AluOutput;
use alusim_core::common::TraceError;
use alusim_core::config::GeneralConfig;
use alusim_core::sim::{
    TraceChecker, TraceRecord, read_trace, read_trace_file, verify_trace, write_trace,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::logging::capture_logs;

fn captured() -> Vec<TraceRecord> {
    (0..16)
        .map(|opcode| TraceRecord::capture(0x8000_0001 ^ (opcode << 8), 0x23, opcode))
        .collect()
}

#[test]
fn record_serializes_flags_as_bits() {
    let record = TraceRecord::capture(0, 1, 0x1);
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"a":0,"b":1,"opcode":1,"result":4294967295,"zero":0,"sign":1,"carry":1,"overflow":0}"#
    );
}

#[test]
fn record_accepts_boolean_flags() {
    let json = r#"{"a":5,"b":3,"opcode":1,"result":2,"zero":false,"sign":false,"carry":false,"overflow":false}"#;
    let record: TraceRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record, TraceRecord::capture(5, 3, 1));
}

#[test]
fn record_rejects_non_bit_flags() {
    let json = r#"{"a":5,"b":3,"opcode":1,"result":2,"zero":2,"sign":0,"carry":0,"overflow":0}"#;
    assert!(serde_json::from_str::<TraceRecord>(json).is_err());
}

#[test]
fn write_then_read_preserves_records() {
    let records = captured();
    let mut buf = Vec::new();
    write_trace(&mut buf, &records).unwrap();

    let text = String::from_utf8(buf.clone()).unwrap();
    assert_eq!(text.lines().count(), 16);

    let back = read_trace(Cursor::new(buf)).unwrap();
    assert_eq!(back, records);
}

#[test]
fn read_skips_blank_and_comment_lines() {
    let text = "# captured from tb_alu\n\n{\"a\":1,\"b\":1,\"opcode\":0,\"result\":2,\"zero\":0,\"sign\":0,\"carry\":0,\"overflow\":0}\n   \n";
    let records = read_trace(Cursor::new(text)).unwrap();
    assert_eq!(records, vec![TraceRecord::capture(1, 1, 0)]);
}

#[test]
fn malformed_line_reports_its_number() {
    let text = "# header\n{\"a\":1,\"b\":1,\"opcode\":0,\"result\":2,\"zero\":0,\"sign\":0,\"carry\":0,\"overflow\":0}\n{\"a\":1}\n";
    let err = read_trace(Cursor::new(text)).unwrap_err();
    assert!(matches!(err, TraceError::Parse { line: 3, .. }), "{err}");
    assert!(err.to_string().starts_with("malformed trace record on line 3"));
}

#[test]
fn captured_trace_verifies_clean() {
    let records = captured();
    let report = verify_trace(&records);
    assert!(report.is_clean());
    assert_eq!(report.checked, 16);
    assert_eq!(report.stats.evaluations, 16);
}

#[test]
fn tampered_record_is_reported() {
    let mut records = captured();
    // Conventional "no borrow" polarity for SUB would flip the carry.
    records[1].carry = !records[1].carry;

    let report = TraceChecker::new(&GeneralConfig {
        log_evaluations: true,
    })
    .verify(&records);

    assert_eq!(report.checked, 16);
    assert_eq!(report.mismatches.len(), 1);
    let mismatch = report.mismatches[0];
    assert_eq!(mismatch.index, 1);
    assert_eq!(mismatch.inputs, records[1].inputs());
    assert_eq!(mismatch.expected, records[1].expected());
    assert_eq!(
        mismatch.actual,
        AluOutput {
            carry: !records[1].carry,
            ..records[1].expected()
        }
    );
}

#[test]
fn trace_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alu.trace.jsonl");
    let records = captured();
    write_trace(std::fs::File::create(&path).unwrap(), &records).unwrap();

    let back = read_trace_file(&path).unwrap();
    assert!(verify_trace(&back).is_clean());
}

#[test]
fn missing_trace_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_trace_file(&dir.path().join("absent.jsonl")).unwrap_err();
    assert!(matches!(err, TraceError::Io(_)));
}

#[rstest]
#[case(true, 16)]
#[case(false, 0)]
fn log_evaluations_controls_per_record_debug_lines(#[case] enabled: bool, #[case] lines: usize) {
    let mut records = captured();
    records[4].result ^= 1;
    let checker = TraceChecker::new(&GeneralConfig {
        log_evaluations: enabled,
    });

    let (report, logs) = capture_logs(|| checker.verify(&records));

    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(logs.matches("checked index=").count(), lines);
    assert_eq!(logs.matches("trace mismatch index=4").count(), 1);
}
