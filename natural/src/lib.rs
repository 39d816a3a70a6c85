//! Natural numbers for Zahlen.
//!
//! This crate defines the ordered induction type the integer crate is built on.
//! A natural has a least element `one` (there is no zero), a successor for every
//! value, and a predecessor for every value except `one`. Nothing here assumes a
//! particular representation: [`Counting`] is the bundled implementation, and any
//! other type satisfying [`Natural`] works the same way downstream.

mod counting;
pub use counting::{Counting, CountingError};

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// An ordered induction type whose minimum is `one`.
///
/// # Laws
///
/// - `one()` is the least value: `one().compare(n) != Greater` for every `n`
/// - `n.successor().predecessor() == Some(n)`
/// - `predecessor()` is `None` exactly at `one()`
/// - `compare` is a total order consistent with successor: `n < n.successor()`
/// - `a.checked_sub(b)` is `Some` exactly when `a > b`, and then
///   `b` advanced by the result equals `a`
pub trait Natural: Clone + fmt::Debug {
    /// The least natural number.
    fn one() -> Self;

    #[must_use]
    fn successor(&self) -> Self;

    /// Returns `None` at `one`, which has no natural predecessor.
    #[must_use]
    fn predecessor(&self) -> Option<Self>;

    #[must_use]
    fn compare(&self, other: &Self) -> Ordering;

    #[must_use]
    fn equal_to(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    #[must_use]
    fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[must_use]
    fn less_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    #[must_use]
    fn is_one(&self) -> bool {
        self.predecessor().is_none()
    }

    /// Difference `self - other`, defined only when `self > other`.
    ///
    /// The default walks both operands down in lockstep. Implementations with a
    /// positional representation should override it.
    #[must_use]
    fn checked_sub(&self, other: &Self) -> Option<Self> {
        let mut minuend = self.clone();
        let mut subtrahend = other.clone();
        loop {
            let shorter = minuend.predecessor()?;
            match subtrahend.predecessor() {
                Some(next) => {
                    minuend = shorter;
                    subtrahend = next;
                }
                None => return Some(shorter),
            }
        }
    }

    /// Every natural in increasing order, starting at `one`.
    #[must_use]
    fn naturals() -> Naturals<Self> {
        Naturals::new()
    }
}

/// Lazy, unbounded enumeration `one, two, three, ...` of a natural type.
///
/// Each value is produced only when pulled. Independent enumerations never
/// share a cursor.
#[derive(Debug, Clone)]
pub struct Naturals<N> {
    next: N,
}

impl<N: Natural> Naturals<N> {
    #[must_use]
    pub fn new() -> Self {
        Self { next: N::one() }
    }
}

impl<N: Natural> Default for Naturals<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Natural> Iterator for Naturals<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let following = self.next.successor();
        Some(mem::replace(&mut self.next, following))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<N: Natural> FusedIterator for Naturals<N> {}
