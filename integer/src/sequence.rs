//! Lazy integer sequences.
//!
//! Every constructor returns a fresh iterator that owns its own cursor, so two
//! consumers of the same sequence never observe each other's progress.

use std::iter::FusedIterator;
use std::mem;

use zahlen_natural::{Natural, Naturals};

use crate::Integer;

/// Ascending integers `lo..=hi`. Empty when `hi < lo`.
#[must_use]
pub fn range<N: Natural>(lo: &Integer<N>, hi: &Integer<N>) -> Range<N> {
    Range {
        next: lo.less_than_or_equal_to(hi).then(|| lo.clone()),
        end: hi.clone(),
    }
}

/// Every integer exactly once: `0, 1, -1, 2, -2, ...`.
#[must_use]
pub fn all_integers<N: Natural>() -> AllIntegers<N> {
    AllIntegers {
        next: Integer::Zero,
    }
}

/// Every positive prime in increasing order: `2, 3, 5, 7, 11, ...`.
///
/// Primality is decided by unary trial division, so each successive prime costs
/// noticeably more than the last.
#[must_use]
pub fn all_primes<N: Natural>() -> AllPrimes<N> {
    AllPrimes {
        candidates: N::naturals(),
    }
}

impl<N: Natural> Integer<N> {
    #[must_use]
    pub fn range(lo: &Self, hi: &Self) -> Range<N> {
        range(lo, hi)
    }

    #[must_use]
    pub fn all_integers() -> AllIntegers<N> {
        all_integers()
    }

    #[must_use]
    pub fn all_primes() -> AllPrimes<N> {
        all_primes()
    }
}

/// Finite ascending run produced by [`range`]. Cloning restarts from the
/// clone's current position.
#[derive(Debug, Clone)]
pub struct Range<N: Natural> {
    next: Option<Integer<N>>,
    end: Integer<N>,
}

impl<N: Natural> Iterator for Range<N> {
    type Item = Integer<N>;

    fn next(&mut self) -> Option<Integer<N>> {
        let current = self.next.take()?;
        if current.less_than(&self.end) {
            self.next = Some(current.successor());
        } else {
            tracing::trace!(end = ?self.end, "range exhausted");
        }
        Some(current)
    }
}

impl<N: Natural> FusedIterator for Range<N> {}

/// Unbounded enumeration produced by [`all_integers`].
#[derive(Debug, Clone)]
pub struct AllIntegers<N: Natural> {
    next: Integer<N>,
}

impl<N: Natural> Iterator for AllIntegers<N> {
    type Item = Integer<N>;

    fn next(&mut self) -> Option<Integer<N>> {
        let following = match &self.next {
            Integer::Zero => Integer::one(),
            Integer::Positive(n) => Integer::Negative(n.clone()),
            Integer::Negative(n) => Integer::Positive(n.successor()),
        };
        Some(mem::replace(&mut self.next, following))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<N: Natural> FusedIterator for AllIntegers<N> {}

/// Unbounded enumeration produced by [`all_primes`].
#[derive(Debug, Clone)]
pub struct AllPrimes<N: Natural> {
    candidates: Naturals<N>,
}

impl<N: Natural> Iterator for AllPrimes<N> {
    type Item = Integer<N>;

    fn next(&mut self) -> Option<Integer<N>> {
        let prime = self
            .candidates
            .by_ref()
            .map(Integer::Positive)
            .find(Integer::is_prime)?;
        tracing::trace!(prime = ?prime, "found prime");
        Some(prime)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<N: Natural> FusedIterator for AllPrimes<N> {}
