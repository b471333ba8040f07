// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Recording of executed instructions for later inspection
use std::fmt::{self, Debug, Display};

use super::{Interpreter, OpCode};

/// Operands as they were resolved at execution time, each held as an
/// `(address, value)` pair; the third pair of the arithmetic ops is the
/// destination and the value stored there.
#[derive(Clone, Copy)]
enum TracedOp {
    Add((i64, i64), (i64, i64), (i64, i64)),
    Mul((i64, i64), (i64, i64), (i64, i64)),
    Halt,
}

#[derive(Clone, Copy)]
/// An opaque type containing information about what instruction was executed,
/// which can be queried with its various methods, or converted into a
/// [String] using its [Display] impl.
pub struct TracedInstr {
    op: TracedOp,
    instr_ptr: i64,
    opcode: OpCode,
}

impl TracedInstr {
    /// Return the instruction pointer's position when the traced instruction
    /// was executed
    pub fn instr_ptr(&self) -> i64 {
        self.instr_ptr
    }

    /// Return the opcode of the traced instruction
    pub fn op_code(&self) -> OpCode {
        self.opcode
    }

    /// If the instruction stored a value, return that value
    pub fn stored_val(&self) -> Option<i64> {
        match self.op {
            TracedOp::Add(_, _, (_, val)) | TracedOp::Mul(_, _, (_, val)) => Some(val),
            TracedOp::Halt => None,
        }
    }
}

impl Interpreter {
    /// Begin a [Trace] of executed instructions. If a trace is already
    /// running, this replaces that trace and returns it in a [`Some`],
    /// otherwise, it returns [`None`].
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was
    /// active, returns [`None`]
    ///
    /// see [Interpreter::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub(crate) fn trace_op(&mut self, opcode: OpCode, resolved_params: [(i64, i64); 3]) {
        if let Some(trace) = self.trace.as_mut() {
            let [a, b, dest] = resolved_params;
            let op = match opcode {
                OpCode::Add => TracedOp::Add(a, b, dest),
                OpCode::Mul => TracedOp::Mul(a, b, dest),
                OpCode::Halt => unreachable!("HALT takes no parameters"),
            };
            trace.0.push(TracedInstr {
                op,
                instr_ptr: self.index,
                opcode,
            });
        }
    }

    pub(crate) fn trace_halt(&mut self) {
        if let Some(trace) = self.trace.as_mut() {
            trace.0.push(TracedInstr {
                op: TracedOp::Halt,
                instr_ptr: self.index,
                opcode: OpCode::Halt,
            });
        }
    }
}

#[derive(Debug, Default, Clone)]
/// A log of instructions that an [Interpreter] has executed since a call to
/// [Interpreter::start_trace]
///
/// see [Interpreter::start_trace]
pub struct Trace(pub Vec<TracedInstr>);

impl Trace {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }
}

impl Debug for TracedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        macro_rules! arg {
            ($arg: ident) => {
                format_args!("{} => {}", $arg.0, $arg.1)
            };
        }
        match self {
            Self::Add(a0, a1, a2) => f
                .debug_tuple("Add")
                .field(&arg!(a0))
                .field(&arg!(a1))
                .field(&arg!(a2))
                .finish(),
            Self::Mul(a0, a1, a2) => f
                .debug_tuple("Mul")
                .field(&arg!(a0))
                .field(&arg!(a1))
                .field(&arg!(a2))
                .finish(),
            Self::Halt => write!(f, "Halt"),
        }
    }
}

impl Debug for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedInstr")
            .field("op", &self.op)
            .field("instr_ptr", &self.instr_ptr)
            .field("opcode", &self.opcode)
            .finish()
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ran instruction at {:0>4}: ", self.instr_ptr)?;
        match self.op {
            TracedOp::Add((pa, va), (pb, vb), (dest, val))
            | TracedOp::Mul((pa, va), (pb, vb), (dest, val)) => {
                write!(
                    f,
                    "[{} {pa} (resolves to {va}), {pb} (resolves to {vb}), {dest} (stored {val})]",
                    self.opcode,
                )
            }
            TracedOp::Halt => write!(f, "[HALT]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_records_stores_in_order() {
        let mut interpreter = Interpreter::new([1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
        interpreter.start_trace();
        interpreter.run().unwrap();
        let Trace(trace) = interpreter.end_trace().unwrap();
        let stored: Vec<_> = trace.iter().map(TracedInstr::stored_val).collect();
        assert_eq!(stored, vec![Some(70), Some(3500), None]);
    }

    #[test]
    fn display_resolves_operands() {
        let mut interpreter = Interpreter::new([2, 3, 0, 3, 99]);
        interpreter.start_trace();
        interpreter.run().unwrap();
        let trace = interpreter.end_trace().unwrap();
        assert_eq!(
            trace.0[0].to_string(),
            "ran instruction at 0000: [MUL 3 (resolves to 3), 0 (resolves to 2), 3 (stored 6)]"
        );
        assert_eq!(trace.0[1].to_string(), "ran instruction at 0004: [HALT]");
    }
}
