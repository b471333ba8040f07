// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The immutable program template and its text loader.
//!
//! A [Program] is the initial memory image. It is never executed directly:
//! every run copies it into a fresh [Interpreter], so no state can leak from
//! one trial to the next.

use crate::{Interpreter, OutOfBounds};
use std::error::Error;
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// The initial memory contents, before any parameter is injected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program(Vec<i64>);

impl Program {
    /// A fresh interpreter over a copy of the template
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::new(self.0.iter().copied())
    }

    /// A fresh interpreter with `noun` and `verb` written to positions 1
    /// and 2. Fails if the template doesn't have those positions.
    pub fn trial(&self, noun: i64, verb: i64) -> Result<Interpreter, OutOfBounds> {
        let mut interpreter = self.interpreter();
        interpreter.mem_override(1, noun)?;
        interpreter.mem_override(2, verb)?;
        Ok(interpreter)
    }

    /// The number of cells in the template
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the template has no cells at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<i64> for Program {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The text form of a program couldn't be parsed
#[derive(Debug, PartialEq, Eq)]
pub struct ProgramParseError {
    entry: usize,
    inner: ParseIntError,
}

impl Display for ProgramParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry {} of the program is not an integer: {}",
            self.entry, self.inner
        )
    }
}

impl Error for ProgramParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

impl FromStr for Program {
    type Err = ProgramParseError;

    /// Parse the conventional text form: comma-separated decimal integers,
    /// with incidental whitespace around entries tolerated
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self(Vec::new()));
        }
        s.split(',')
            .map(str::trim)
            .enumerate()
            .map(|(entry, num)| {
                num.parse()
                    .map_err(|inner| ProgramParseError { entry, inner })
            })
            .collect()
    }
}
