//! Bulk evaluation.
//!
//! Evaluations are independent, so a large set of input triples can be
//! split into chunks and spread over a scoped worker pool. Each worker
//! writes into its own disjoint slice of the output buffer and keeps its
//! own [`EvalStats`]; the statistics are merged after all workers join.
//! Output order always matches input order.

use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::BatchConfig;
use crate::core::units::alu::{AluOutput, evaluate};
use crate::isa::AluOp;
use crate::stats::EvalStats;

/// One set of ALU inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AluInputs {
    /// First operand.
    pub a: u32,
    /// Second operand.
    pub b: u32,
    /// Raw opcode; only the low 4 bits are used.
    pub opcode: u32,
}

impl AluInputs {
    /// Bundles one set of inputs.
    pub const fn new(a: u32, b: u32, opcode: u32) -> Self {
        Self { a, b, opcode }
    }

    /// Decoded opcode.
    pub const fn op(&self) -> AluOp {
        AluOp::from_bits(self.opcode)
    }

    /// Evaluates these inputs.
    pub fn evaluate(&self) -> AluOutput {
        evaluate(self.a, self.b, self.opcode)
    }
}

/// Outputs and statistics of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchRun {
    /// One output per input, in input order.
    pub outputs: Vec<AluOutput>,
    /// Counters over every evaluation in the run.
    pub stats: EvalStats,
}

/// Scoped worker pool for bulk ALU evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchEvaluator {
    workers: usize,
    chunk_size: usize,
}

impl Default for BatchEvaluator {
    fn default() -> Self {
        Self::new(&BatchConfig::default())
    }
}

impl BatchEvaluator {
    /// Creates a pool from configuration.
    ///
    /// A worker count of 0 resolves to the host's available parallelism;
    /// a chunk size of 0 is treated as 1.
    pub fn new(config: &BatchConfig) -> Self {
        let workers = if config.workers == 0 {
            thread::available_parallelism().map_or(1, NonZeroUsize::get)
        } else {
            config.workers
        };
        Self {
            workers,
            chunk_size: config.chunk_size.max(1),
        }
    }

    /// Resolved worker count.
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Evaluations per work unit.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Evaluates every input, preserving order.
    pub fn evaluate_all(&self, inputs: &[AluInputs]) -> BatchRun {
        if inputs.is_empty() {
            return BatchRun::default();
        }

        let chunks = inputs.len().div_ceil(self.chunk_size);
        let threads = self.workers.min(chunks).max(1);
        debug!(
            inputs = inputs.len(),
            chunks,
            threads,
            chunk_size = self.chunk_size,
            "batch evaluation"
        );

        if threads == 1 {
            return evaluate_sequential(inputs);
        }

        let mut outputs = vec![AluOutput::default(); inputs.len()];
        let mut jobs: Vec<Vec<(&[AluInputs], &mut [AluOutput])>> =
            (0..threads).map(|_| Vec::new()).collect();
        for (i, pair) in inputs
            .chunks(self.chunk_size)
            .zip(outputs.chunks_mut(self.chunk_size))
            .enumerate()
        {
            jobs[i % threads].push(pair);
        }

        let mut stats = EvalStats::default();
        thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .into_iter()
                .map(|work| scope.spawn(move || run_jobs(work)))
                .collect();
            for handle in handles {
                match handle.join() {
                    Ok(worker_stats) => stats.merge(&worker_stats),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
        });

        BatchRun { outputs, stats }
    }
}

fn run_jobs(work: Vec<(&[AluInputs], &mut [AluOutput])>) -> EvalStats {
    let mut stats = EvalStats::default();
    for (inputs, outputs) in work {
        for (input, slot) in inputs.iter().zip(outputs.iter_mut()) {
            *slot = input.evaluate();
            stats.record(input.op(), slot);
        }
    }
    stats
}

/// Evaluates every input on the calling thread.
pub fn evaluate_sequential(inputs: &[AluInputs]) -> BatchRun {
    let mut stats = EvalStats::default();
    let outputs = inputs
        .iter()
        .map(|input| {
            let out = input.evaluate();
            stats.record(input.op(), &out);
            out
        })
        .collect();
    BatchRun { outputs, stats }
}
