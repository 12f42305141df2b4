//! The `$alu_predict_vpi` system task.
//!
//! The task takes eight positional arguments:
//!
//! | # | Name       | Direction |
//! |---|------------|-----------|
//! | 0 | `a`        | in        |
//! | 1 | `b`        | in        |
//! | 2 | `opcode`   | in (low 4 bits used) |
//! | 3 | `result`   | out       |
//! | 4 | `zero`     | out       |
//! | 5 | `sign`     | out       |
//! | 6 | `carry`    | out       |
//! | 7 | `overflow` | out       |
//!
//! Inputs are read, the ALU is evaluated, and all five outputs are written
//! before the call returns. A call with the wrong argument count writes
//! nothing.

use tracing::trace;

use super::registry::{SysTfData, SysTfKind, SysTfRegistry};
use super::traits::ValueHandle;
use crate::common::constants::{ALU_PREDICT_ARGS, ALU_PREDICT_TASK, OPCODE_MASK};
use crate::common::error::HarnessError;
use crate::core::units::alu::{AluOutput, evaluate};

/// Reads the inputs, evaluates the ALU, and writes the outputs.
///
/// # Arguments
///
/// * `args` - Exactly [`ALU_PREDICT_ARGS`] handles in the order
///   `a, b, opcode, result, zero, sign, carry, overflow`.
///
/// # Returns
///
/// The output that was written to the result and flag slots.
///
/// # Errors
///
/// [`HarnessError::ArgumentCount`] if `args` does not hold exactly eight
/// handles. No handle is read or written in that case.
pub fn alu_predict_calltf(args: &mut [&mut dyn ValueHandle]) -> Result<AluOutput, HarnessError> {
    let found = args.len();
    let [a, b, op, result, zero, sign, carry, overflow] = args else {
        return Err(HarnessError::ArgumentCount {
            task: ALU_PREDICT_TASK,
            expected: ALU_PREDICT_ARGS,
            found,
        });
    };

    let a = a.get_value();
    let b = b.get_value();
    let opcode = op.get_value() & OPCODE_MASK;

    let out = evaluate(a, b, opcode);
    trace!(a, b, opcode, result = out.result, "alu_predict");

    let slots = [result, zero, sign, carry, overflow];
    for (slot, value) in slots.into_iter().zip(out.as_slots()) {
        slot.put_value(value);
    }

    Ok(out)
}

fn alu_predict_systf(args: &mut [&mut dyn ValueHandle]) -> Result<(), HarnessError> {
    alu_predict_calltf(args).map(|_| ())
}

/// Registers `$alu_predict_vpi` as a system task.
///
/// # Errors
///
/// [`HarnessError::DuplicateTask`] if the task is already registered.
pub fn register_alu_predict_systf(registry: &mut SysTfRegistry) -> Result<(), HarnessError> {
    registry.register(SysTfData {
        name: ALU_PREDICT_TASK,
        kind: SysTfKind::Task,
        calltf: alu_predict_systf,
    })
}
