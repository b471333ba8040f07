// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Library providing a stride-4 stored-program interpreter and a brute-force
//! search over its two injectable parameters.
//!
//! The machine is the three-opcode core from [Day 2]: a fixed-size sequence
//! of signed integers holds both code and data, and execution starts at
//! position 0, advancing 4 cells per arithmetic instruction until a `HALT`.
//! Operands are positional: an operand cell holds the address of the value
//! it stands for.
//!
//! # Example
//!
//! ```rust
//! use nounverb::prelude::*;
//! let mut interpreter = Interpreter::new([1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
//!
//! interpreter.run().unwrap();
//! assert_eq!(interpreter.mem_get(0), Ok(3500));
//! ```
//!
//! The [search] module drives the interpreter over the whole `(noun, verb)`
//! parameter space:
//!
//! ```rust
//! use nounverb::prelude::*;
//! let program: Program = "1,9,10,3,2,3,11,0,99,30,40,50".parse().unwrap();
//!
//! let answer = search(&program, 3500).unwrap();
//! assert_eq!((answer.noun, answer.verb), (9, 10));
//! ```
//!
//! [Day 2]: https://adventofcode.com/2019/day/2

/// A module providing the fixed-size program memory, with checked access by
/// the signed ints the machine itself stores.
mod mem;

pub mod program;
pub mod search;
pub mod trace;

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

pub use mem::{Memory, OutOfBounds};
use trace::Trace;

/// A small module that re-exports items needed when working with the
/// interpreter and the parameter search
pub mod prelude {
    pub use crate::program::Program;
    pub use crate::search::{search, Answer};
    pub use crate::{Interpreter, StepOutcome};
}

/// An error occurred when executing an instruction
#[derive(Debug, PartialEq, Eq)]
pub enum InterpreterError {
    /// An opcode outside of {1, 2, 99} was fetched
    UnrecognizedOpcode(i64),
    /// An instruction fetch, operand, or destination fell outside of memory
    OutOfBounds(OutOfBounds),
    /// The step budget was exhausted without halting
    StepLimitExceeded(usize),
}

impl Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpreterError::UnrecognizedOpcode(n) => {
                write!(f, "encountered unrecognized opcode {n}")
            }
            InterpreterError::OutOfBounds(e) => write!(f, "{e}"),
            InterpreterError::StepLimitExceeded(budget) => {
                write!(f, "execution exceeded its {budget}-step budget without halting")
            }
        }
    }
}

impl Error for InterpreterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InterpreterError::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OutOfBounds> for InterpreterError {
    fn from(err: OutOfBounds) -> Self {
        Self::OutOfBounds(err)
    }
}

/// The operation selected by the integer in an instruction's first cell
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum OpCode {
    /// Sum the two operands and store the result at the destination address
    Add = 1,
    /// Multiply the two operands and store the result at the destination
    /// address
    Mul = 2,
    /// Stop execution; the only normal termination. The rest of the
    /// instruction window is ignored.
    Halt = 99,
}

impl TryFrom<i64> for OpCode {
    type Error = InterpreterError;
    fn try_from(i: i64) -> Result<Self, Self::Error> {
        match i {
            1 => Ok(OpCode::Add),
            2 => Ok(OpCode::Mul),
            99 => Ok(OpCode::Halt),
            other => Err(InterpreterError::UnrecognizedOpcode(other)),
        }
    }
}

impl Display for OpCode {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Add => write!(fmt, "ADD"),
            OpCode::Mul => write!(fmt, "MUL"),
            OpCode::Halt => write!(fmt, "HALT"),
        }
    }
}

/// Whether the interpreter has more instructions to execute after a step
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum StepOutcome {
    /// More instructions remain to be executed
    Running,
    /// A `HALT` instruction was executed
    Halted,
}

#[derive(Debug, Clone)]
/// An interpreter executing one memory image in place.
///
/// Each interpreter exclusively owns its [Memory] for the lifetime of the
/// run; cloning copies the memory, so a parameterized template can be reused
/// without state leaking between runs.
pub struct Interpreter {
    index: i64,
    fuel: usize,
    mem: Memory,
    trace: Option<Trace>,
}

// ignore the trace and the remaining fuel
impl PartialEq for Interpreter {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.mem == other.mem
    }
}

impl Index<usize> for Interpreter {
    type Output = i64;

    fn index(&self, i: usize) -> &Self::Output {
        self.mem.index(i)
    }
}

impl IndexMut<usize> for Interpreter {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        self.mem.index_mut(i)
    }
}

impl From<Memory> for Interpreter {
    fn from(mem: Memory) -> Self {
        Self {
            index: 0,
            fuel: mem.len(),
            mem,
            trace: None,
        }
    }
}

impl Interpreter {
    /// Create a new interpreter. Collects `code` into the starting memory
    /// state.
    pub fn new(code: impl IntoIterator<Item = i64>) -> Self {
        Self::from(code.into_iter().collect::<Memory>())
    }

    /// Get the memory at `address`
    #[doc(alias = "peek")]
    pub fn mem_get(&self, address: i64) -> Result<i64, OutOfBounds> {
        self.mem.get(address)
    }

    /// Manually set a memory location
    #[doc(alias("poke", "write"))]
    pub fn mem_override(&mut self, address: i64, value: i64) -> Result<(), OutOfBounds> {
        self.mem.set(address, value)
    }

    /// A view of the memory in its current state
    pub fn memory(&self) -> &Memory {
        &self.mem
    }

    /// The instruction pointer's current position
    pub fn instr_ptr(&self) -> i64 {
        self.index
    }

    /// common logic of the two instructions that take 3 parameters
    fn binary_op(
        &mut self,
        opcode: OpCode,
        operation: impl Fn(i64, i64) -> i64,
    ) -> Result<StepOutcome, InterpreterError> {
        let a_addr = self.mem.get(self.index + 1)?;
        let b_addr = self.mem.get(self.index + 2)?;
        let dest = self.mem.get(self.index + 3)?;
        let a = self.mem.get(a_addr)?;
        let b = self.mem.get(b_addr)?;
        let val = operation(a, b);
        self.trace_op(opcode, [(a_addr, a), (b_addr, b), (dest, val)]);
        self.mem.set(dest, val)?;
        self.index += 4;
        Ok(StepOutcome::Running)
    }

    /// Execute the single instruction under the instruction pointer.
    ///
    /// `ADD` and `MUL` advance the pointer by 4 and return
    /// [`StepOutcome::Running`]; `HALT` leaves the pointer and memory alone
    /// and returns [`StepOutcome::Halted`]. Anything else fails the run: the
    /// error is the final word on that interpreter, which should be dropped.
    pub fn step(&mut self) -> Result<StepOutcome, InterpreterError> {
        match OpCode::try_from(self.mem.get(self.index)?)? {
            OpCode::Add => self.binary_op(OpCode::Add, |a, b| a + b),
            OpCode::Mul => self.binary_op(OpCode::Mul, |a, b| a * b),
            OpCode::Halt => {
                self.trace_halt();
                Ok(StepOutcome::Halted)
            }
        }
    }

    /// Execute instructions until the program halts, then return `Ok(())`;
    /// the result of the run is left in memory for [Interpreter::mem_get].
    ///
    /// Each arithmetic instruction spends one unit of fuel, with a budget
    /// equal to the memory length. A well-formed stride-4 program halts
    /// within `len / 4` steps and can never exhaust it; the budget exists so
    /// that no program, well-formed or not, runs forever.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        loop {
            if self.step()? == StepOutcome::Halted {
                return Ok(());
            }
            self.fuel = self
                .fuel
                .checked_sub(1)
                .ok_or(InterpreterError::StepLimitExceeded(self.mem.len()))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// the first small example: `position 0 += position 0`
    #[test]
    fn add_in_place() {
        let mut interpreter = Interpreter::new([1, 0, 0, 0, 99]);
        interpreter.run().unwrap();
        assert!(interpreter.memory().iter().eq([2, 0, 0, 0, 99]));
    }

    /// the second small example: `3 * 2` written to position 3
    #[test]
    fn mul_to_position_3() {
        let mut interpreter = Interpreter::new([2, 3, 0, 3, 99]);
        interpreter.run().unwrap();
        assert!(interpreter.memory().iter().eq([2, 3, 0, 6, 99]));
    }

    /// a lone HALT terminates immediately with no mutation
    #[test]
    fn bare_halt() {
        let mut interpreter = Interpreter::new([99]);
        let pristine = interpreter.clone();
        assert_eq!(interpreter.step(), Ok(StepOutcome::Halted));
        assert_eq!(interpreter, pristine);
        assert_eq!(interpreter.instr_ptr(), 0);
    }

    #[test]
    fn unrecognized_opcode_is_fatal() {
        let mut interpreter = Interpreter::new([5, 0, 0, 0, 99]);
        assert_eq!(
            interpreter.run(),
            Err(InterpreterError::UnrecognizedOpcode(5))
        );
    }

    /// without a HALT, the pointer walks off the end and the run fails
    /// instead of wrapping or panicking
    #[test]
    fn pointer_leaves_memory() {
        let mut interpreter = Interpreter::new([1, 0, 0, 0]);
        assert_eq!(
            interpreter.run(),
            Err(InterpreterError::OutOfBounds(OutOfBounds {
                address: 4,
                len: 4
            }))
        );
    }

    #[test]
    fn operand_address_out_of_bounds() {
        let mut interpreter = Interpreter::new([1, 100, 0, 0, 99]);
        assert_eq!(
            interpreter.run(),
            Err(InterpreterError::OutOfBounds(OutOfBounds {
                address: 100,
                len: 5
            }))
        );
    }

    #[test]
    fn empty_memory_fails_on_fetch() {
        let mut interpreter = Interpreter::new(std::iter::empty());
        assert_eq!(
            interpreter.run(),
            Err(InterpreterError::OutOfBounds(OutOfBounds {
                address: 0,
                len: 0
            }))
        );
    }

    /// two independent copies of the same initial memory end up identical
    #[test]
    fn runs_are_idempotent() {
        let template = Interpreter::new([1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
        let (mut first, mut second) = (template.clone(), template.clone());
        first.run().unwrap();
        second.run().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.mem_get(0), Ok(3500));
    }
}
