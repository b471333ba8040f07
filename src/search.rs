// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Brute-force enumeration of the `(noun, verb)` parameter space.
//!
//! Each trial owns a fresh copy of the [Program], so trials can't affect one
//! another, and a trial that fails to halt cleanly is skipped rather than
//! aborting the search: a malformed run carries no signal about the target.

use crate::program::Program;
use itertools::Itertools;
use log::debug;
use std::fmt::{self, Display};
use std::ops::RangeInclusive;

/// The range both parameters are drawn from
pub const PARAM_RANGE: RangeInclusive<i64> = 0..=99;

/// A `(noun, verb)` pair whose trial left the search target at position 0
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Answer {
    /// the value that was injected at position 1
    pub noun: i64,
    /// the value that was injected at position 2
    pub verb: i64,
}

impl Answer {
    /// The conventional single-number form of the answer
    pub fn combined(self) -> i64 {
        100 * self.noun + self.verb
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "noun={} verb={}", self.noun, self.verb)
    }
}

/// Find the first `(noun, verb)` pair in [PARAM_RANGE]², enumerated in
/// row-major order (noun outer), whose trial halts with `target` at
/// position 0.
///
/// Failed trials are reported at debug level through the [log] facade and
/// skipped; they never terminate the search or the process. Exhausting the
/// space without a hit returns [None].
///
/// # Example
///
/// ```rust
/// use nounverb::prelude::*;
/// let program: Program = "1,9,10,3,2,3,11,0,99,30,40,50".parse().unwrap();
///
/// assert_eq!(search(&program, 3500), Some(Answer { noun: 9, verb: 10 }));
/// assert_eq!(search(&program, -1), None);
/// ```
pub fn search(program: &Program, target: i64) -> Option<Answer> {
    PARAM_RANGE
        .cartesian_product(PARAM_RANGE)
        .map(|(noun, verb)| Answer { noun, verb })
        .find(|&pair| trial_hits_target(program, pair, target))
}

fn trial_hits_target(program: &Program, Answer { noun, verb }: Answer, target: i64) -> bool {
    let mut interpreter = match program.trial(noun, verb) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            debug!("skipping trial (noun={noun}, verb={verb}): {e}");
            return false;
        }
    };
    match interpreter.run() {
        Ok(()) => interpreter.mem_get(0) == Ok(target),
        Err(e) => {
            debug!("abandoning trial (noun={noun}, verb={verb}): {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// With the template `[1, noun, verb, 0, 99]`, a trial computes
    /// `mem[noun] + mem[verb]`, and most of the 10,000 pairs are
    /// out-of-bounds operand addresses. Only (4, 4) reaches 99 + 99.
    #[test]
    fn failed_trials_are_skipped() {
        let program: Program = "1,0,0,0,99".parse().unwrap();
        assert_eq!(search(&program, 198), Some(Answer { noun: 4, verb: 4 }));
    }

    #[test]
    fn exhaustion_is_a_value() {
        let program: Program = "1,0,0,0,99".parse().unwrap();
        assert_eq!(search(&program, 1_000_000), None);
    }

    #[test]
    fn combined_form() {
        assert_eq!(Answer { noun: 9, verb: 10 }.combined(), 910);
        assert_eq!(Answer { noun: 0, verb: 5 }.combined(), 5);
    }
}
