// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

/// A fixed-length, zero-indexed sequence of signed integers holding both
/// code and data.
///
/// The length is set when the memory is collected from an iterator and never
/// changes afterwards. Addresses come out of the memory itself, so checked
/// access through [Memory::get] and [Memory::set] takes `i64` and rejects
/// anything outside of `[0, len)`; the `usize`-indexed [Index]/[IndexMut]
/// impls panic like slice indexing and are meant for tests and tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory(Box<[i64]>);

/// An address fell outside of `[0, len)`
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct OutOfBounds {
    /// the offending address
    pub address: i64,
    /// the length of the memory it missed
    pub len: usize,
}

impl Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "address {} is outside of memory of length {}",
            self.address, self.len
        )
    }
}

impl Error for OutOfBounds {}

impl Memory {
    fn checked_index(&self, address: i64) -> Result<usize, OutOfBounds> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.0.len())
            .ok_or(OutOfBounds {
                address,
                len: self.0.len(),
            })
    }

    /// Read the cell at `address`
    pub fn get(&self, address: i64) -> Result<i64, OutOfBounds> {
        self.checked_index(address).map(|i| self.0[i])
    }

    /// Overwrite the cell at `address`
    pub fn set(&mut self, address: i64, value: i64) -> Result<(), OutOfBounds> {
        let i = self.checked_index(address)?;
        self.0[i] = value;
        Ok(())
    }

    /// The number of cells
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the memory has no cells at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cell contents in address order
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<i64> for Memory {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Memory {
    type Output = i64;
    fn index(&self, i: usize) -> &i64 {
        self.0.index(i)
    }
}

impl IndexMut<usize> for Memory {
    fn index_mut(&mut self, i: usize) -> &mut i64 {
        self.0.index_mut(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_both_overruns() {
        let mut mem: Memory = [10, 20, 30].into_iter().collect();
        assert_eq!(mem.get(-1), Err(OutOfBounds { address: -1, len: 3 }));
        assert_eq!(mem.get(3), Err(OutOfBounds { address: 3, len: 3 }));
        assert_eq!(mem.set(3, 0), Err(OutOfBounds { address: 3, len: 3 }));
        assert_eq!(mem.get(2), Ok(30));
    }

    #[test]
    fn writes_stay_in_place() {
        let mut mem: Memory = [10, 20, 30].into_iter().collect();
        mem.set(1, -7).unwrap();
        assert_eq!(mem.len(), 3);
        assert!(mem.iter().eq([10, -7, 30]));
    }
}
