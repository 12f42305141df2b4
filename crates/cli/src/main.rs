//! ALU reference model CLI.
//!
//! This binary drives the model from the command line. It provides:
//! 1. **Eval:** Evaluate one operation and print the result and flags.
//! 2. **Table:** Evaluate all 16 opcodes for one operand pair.
//! 3. **Check:** Verify a JSON-lines reference trace; exits 1 on any mismatch.

use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use alusim_core::config::Config;
use alusim_core::core::units::alu::shifts::shamt;
use alusim_core::sim::{TraceChecker, read_trace_file};
use alusim_core::{Alu, AluOp};

#[derive(Parser, Debug)]
#[command(
    name = "alusim",
    author,
    version,
    about = "Bit-exact 32-bit ALU reference model",
    long_about = "Evaluate ALU operations or check reference traces.\n\nOperands accept decimal, negative decimal (two's complement) or 0x-prefixed hex.\nOpcodes accept a mnemonic (add, sub, and, or, xor, slt, sll, srl, sra) or a number.\n\nExamples:\n  alusim eval 0x7fffffff 1 add\n  alusim table 0x80000000 1\n  alusim check tb_alu.trace.jsonl --stats"
)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one operation.
    Eval {
        /// First operand.
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        a: u32,

        /// Second operand (low 5 bits are the shift amount).
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        b: u32,

        /// Opcode mnemonic or number (low 4 bits used).
        op: AluOp,

        /// Print the output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every opcode for one operand pair.
    Table {
        /// First operand.
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        a: u32,

        /// Second operand.
        #[arg(value_parser = parse_word, allow_hyphen_values = true)]
        b: u32,
    },

    /// Verify a JSON-lines reference trace.
    Check {
        /// Trace file, one record per line.
        trace: PathBuf,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print evaluation statistics after the check.
        #[arg(long)]
        stats: bool,
    },
}

/// Parses an operand: `0x` hex, decimal, or negative decimal as two's complement.
fn parse_word(s: &str) -> Result<u32, String> {
    let text = s.trim();
    let parsed = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        u32::from_str_radix(&hex.replace('_', ""), 16).map_err(|e| e.to_string())
    } else if text.starts_with('-') {
        text.parse::<i32>().map(|v| v as u32).map_err(|e| e.to_string())
    } else {
        text.parse::<u32>().map_err(|e| e.to_string())
    };
    parsed.map_err(|e| format!("invalid operand {s:?}: {e}"))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Eval { a, b, op, json } => cmd_eval(a, b, op, json),
        Commands::Table { a, b } => cmd_table(a, b),
        Commands::Check {
            trace,
            config,
            stats,
        } => cmd_check(&trace, config.as_deref(), stats),
    }
}

fn cmd_eval(a: u32, b: u32, op: AluOp, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string(&Alu::evaluate(op, a, b)) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!("failed to serialize output: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", describe(op, a, b));
    }
    ExitCode::SUCCESS
}

/// One-line listing of an evaluation; shifts show the effective shift amount.
fn describe(op: AluOp, a: u32, b: u32) -> String {
    let out = Alu::evaluate(op, a, b);
    if op.is_shift() {
        format!("{op} {a:#010x}, {} -> {out}", shamt(b))
    } else {
        format!("{op} {a:#010x}, {b:#010x} -> {out}")
    }
}

fn cmd_table(a: u32, b: u32) -> ExitCode {
    println!("a = {a:#010x}  b = {b:#010x}  shamt = {}", shamt(b));
    println!("----------------------------------------------------------");
    for op in AluOp::all() {
        let label = format!("{:#03x} {op}", op.bits());
        println!("  {label:<16} {}", Alu::evaluate(op, a, b));
    }
    ExitCode::SUCCESS
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))
}

fn cmd_check(trace: &std::path::Path, config: Option<&std::path::Path>, stats: bool) -> ExitCode {
    let config = match load_config(config) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let records = match read_trace_file(trace) {
        Ok(records) => records,
        Err(e) => {
            error!("{}: {e}", trace.display());
            return ExitCode::FAILURE;
        }
    };
    info!(records = records.len(), path = %trace.display(), "checking trace");

    let report = TraceChecker::new(&config.general).verify(&records);
    for m in &report.mismatches {
        println!(
            "record {:>6}: {} {:#010x}, {:#010x}",
            m.index,
            m.inputs.op(),
            m.inputs.a,
            m.inputs.b
        );
        println!("    expected {}", m.expected);
        println!("    actual   {}", m.actual);
    }
    println!(
        "{} records checked, {} mismatches",
        report.checked,
        report.mismatches.len()
    );
    if stats {
        report.stats.print();
    }

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
