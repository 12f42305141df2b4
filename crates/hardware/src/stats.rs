//! Evaluation statistics collection and reporting.
//!
//! This module tracks what a batch run or trace check exercised. It provides:
//! 1. **Opcode mix:** Evaluation counts for each of the 16 encodings.
//! 2. **Flag activity:** How often each condition flag came out set.
//! 3. **Reporting:** Text sections for the CLI and a serde form for Python/JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::common::constants::OPCODE_COUNT;
use crate::core::units::alu::AluOutput;
use crate::isa::AluOp;

/// Counters gathered over a set of evaluations.
///
/// Workers each keep their own `EvalStats` and the totals are combined
/// with [`merge`](Self::merge), so no counter is ever shared across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EvalStats {
    /// Total evaluations recorded.
    pub evaluations: u64,
    /// Evaluations per 4-bit opcode, indexed by encoding.
    pub per_opcode: [u64; OPCODE_COUNT],
    /// Evaluations whose zero flag was set.
    pub zero_set: u64,
    /// Evaluations whose sign flag was set.
    pub sign_set: u64,
    /// Evaluations whose carry flag was set.
    pub carry_set: u64,
    /// Evaluations whose overflow flag was set.
    pub overflow_set: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "opcodes", "flags"];

impl EvalStats {
    /// Records one evaluation.
    pub fn record(&mut self, op: AluOp, out: &AluOutput) {
        self.evaluations += 1;
        self.per_opcode[usize::from(op.bits())] += 1;
        self.zero_set += u64::from(out.zero);
        self.sign_set += u64::from(out.sign);
        self.carry_set += u64::from(out.carry);
        self.overflow_set += u64::from(out.overflow);
    }

    /// Adds another set of counters into this one.
    pub fn merge(&mut self, other: &Self) {
        self.evaluations += other.evaluations;
        for (mine, theirs) in self.per_opcode.iter_mut().zip(other.per_opcode) {
            *mine += theirs;
        }
        self.zero_set += other.zero_set;
        self.sign_set += other.sign_set;
        self.carry_set += other.carry_set;
        self.overflow_set += other.overflow_set;
    }

    /// Evaluations recorded for `op`.
    pub fn count(&self, op: AluOp) -> u64 {
        self.per_opcode[usize::from(op.bits())]
    }

    /// Evaluations that landed in the undefined opcode range.
    pub fn undefined(&self) -> u64 {
        AluOp::all()
            .filter(|op| !op.is_defined())
            .map(|op| self.count(op))
            .sum()
    }

    /// Renders the requested sections as text.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an
    /// empty slice renders everything.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let total = if self.evaluations == 0 {
            1.0
        } else {
            self.evaluations as f64
        };
        let pct = |n: u64| (n as f64 / total) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "ALU EVALUATION STATISTICS");
            let _ = writeln!(out, "----------------------------------------------------------");
            let _ = writeln!(out, "evaluations              {}", self.evaluations);
            let _ = writeln!(
                out,
                "undefined_opcodes        {} ({:.2}%)",
                self.undefined(),
                pct(self.undefined())
            );
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("opcodes") {
            let _ = writeln!(out, "OPCODE MIX");
            for op in AluOp::all().filter(|op| self.count(*op) > 0) {
                let name = format!("op.{op}");
                let _ = writeln!(
                    out,
                    "  {name:<22} {} ({:.2}%)",
                    self.count(op),
                    pct(self.count(op))
                );
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("flags") {
            let _ = writeln!(out, "FLAGS SET");
            for (name, n) in [
                ("zero", self.zero_set),
                ("sign", self.sign_set),
                ("carry", self.carry_set),
                ("overflow", self.overflow_set),
            ] {
                let _ = writeln!(out, "  flag.{name:<17} {n} ({:.2}%)", pct(n));
            }
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
