//! Reference traces.
//!
//! A trace is a JSON-lines file with one evaluation per line:
//!
//! ```text
//! {"a":5,"b":3,"opcode":1,"result":2,"zero":0,"sign":0,"carry":0,"overflow":0}
//! ```
//!
//! Flags are written as `0`/`1`, the way the host records 1-bit outputs, and
//! read back from either `0`/`1` or `true`/`false`. Blank lines and lines
//! starting with `#` are skipped. Verifying a trace re-evaluates each
//! record's inputs and compares all five outputs.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::batch::AluInputs;
use crate::common::error::TraceError;
use crate::config::GeneralConfig;
use crate::core::units::alu::{AluOutput, evaluate};
use crate::stats::EvalStats;

/// One recorded evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// First operand.
    pub a: u32,
    /// Second operand.
    pub b: u32,
    /// Opcode as driven by the testbench (may carry upper bits).
    pub opcode: u32,
    /// Recorded result.
    pub result: u32,
    /// Recorded zero flag.
    #[serde(with = "flag_bit")]
    pub zero: bool,
    /// Recorded sign flag.
    #[serde(with = "flag_bit")]
    pub sign: bool,
    /// Recorded carry flag.
    #[serde(with = "flag_bit")]
    pub carry: bool,
    /// Recorded overflow flag.
    #[serde(with = "flag_bit")]
    pub overflow: bool,
}

impl TraceRecord {
    /// Records what the model computes for these inputs.
    pub fn capture(a: u32, b: u32, opcode: u32) -> Self {
        Self::from_parts(AluInputs::new(a, b, opcode), evaluate(a, b, opcode))
    }

    /// Builds a record from inputs and an output.
    pub const fn from_parts(inputs: AluInputs, out: AluOutput) -> Self {
        Self {
            a: inputs.a,
            b: inputs.b,
            opcode: inputs.opcode,
            result: out.result,
            zero: out.zero,
            sign: out.sign,
            carry: out.carry,
            overflow: out.overflow,
        }
    }

    /// The record's inputs.
    pub const fn inputs(&self) -> AluInputs {
        AluInputs::new(self.a, self.b, self.opcode)
    }

    /// The record's outputs.
    pub const fn expected(&self) -> AluOutput {
        AluOutput {
            result: self.result,
            zero: self.zero,
            sign: self.sign,
            carry: self.carry,
            overflow: self.overflow,
        }
    }
}

/// Serde adapter storing a flag as the integer 0 or 1.
mod flag_bit {
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Int(u64),
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*flag))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Bool(flag) => Ok(flag),
            Repr::Int(0) => Ok(false),
            Repr::Int(1) => Ok(true),
            Repr::Int(n) => Err(de::Error::custom(format!("flag must be 0 or 1, got {n}"))),
        }
    }
}

/// Reads a JSON-lines trace.
///
/// # Errors
///
/// [`TraceError::Io`] if reading fails, [`TraceError::Parse`] with the
/// 1-based line number for the first malformed record.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let record = serde_json::from_str(text)
            .map_err(|source| TraceError::Parse { line: idx + 1, source })?;
        records.push(record);
    }
    Ok(records)
}

/// Opens and reads a trace file.
///
/// # Errors
///
/// See [`read_trace`].
pub fn read_trace_file(path: &Path) -> Result<Vec<TraceRecord>, TraceError> {
    read_trace(BufReader::new(File::open(path)?))
}

/// Writes records as JSON lines.
///
/// # Errors
///
/// [`TraceError::Write`] if a record cannot be written.
pub fn write_trace<W: Write>(mut writer: W, records: &[TraceRecord]) -> Result<(), TraceError> {
    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(TraceError::Write)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// A record whose recorded outputs differ from the model's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// 0-based position of the record in the trace.
    pub index: usize,
    /// Inputs of the record.
    pub inputs: AluInputs,
    /// Outputs stored in the trace.
    pub expected: AluOutput,
    /// Outputs the model computes.
    pub actual: AluOutput,
}

/// Outcome of verifying a trace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TraceReport {
    /// Records checked.
    pub checked: usize,
    /// Records that did not match, in trace order.
    pub mismatches: Vec<Mismatch>,
    /// Counters over every checked evaluation.
    pub stats: EvalStats,
}

impl TraceReport {
    /// Returns `true` when every record matched.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Checks recorded evaluations against the model.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceChecker {
    log_evaluations: bool,
}

impl TraceChecker {
    /// Creates a checker honouring the `log_evaluations` setting.
    pub const fn new(config: &GeneralConfig) -> Self {
        Self {
            log_evaluations: config.log_evaluations,
        }
    }

    /// Re-evaluates every record and collects mismatches.
    pub fn verify(&self, records: &[TraceRecord]) -> TraceReport {
        let mut report = TraceReport::default();
        for (index, record) in records.iter().enumerate() {
            let inputs = record.inputs();
            let expected = record.expected();
            let actual = inputs.evaluate();
            report.stats.record(inputs.op(), &actual);
            report.checked += 1;

            if self.log_evaluations {
                debug!(index, a = inputs.a, b = inputs.b, op = %inputs.op(), %actual, "checked");
            }
            if actual != expected {
                warn!(index, a = inputs.a, b = inputs.b, op = %inputs.op(), %expected, %actual, "trace mismatch");
                report.mismatches.push(Mismatch {
                    index,
                    inputs,
                    expected,
                    actual,
                });
            }
        }
        report
    }
}

/// Verifies records with default settings.
pub fn verify_trace(records: &[TraceRecord]) -> TraceReport {
    TraceChecker::default().verify(records)
}
