//! Counting numbers backed by a non-zero machine word.

use std::cmp::Ordering;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Natural;

/// A counting number `1, 2, 3, ...`.
///
/// Zero is structurally unrepresentable via `NonZeroU64`, so every value is a
/// valid natural without further checks.
///
/// # Serde
///
/// Serializes as a plain JSON number. Deserializing `0` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counting(NonZeroU64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountingError {
    #[error("counting numbers start at one")]
    Zero,
}

impl Counting {
    pub const ONE: Self = Self(NonZeroU64::MIN);

    pub fn new(value: u64) -> Result<Self, CountingError> {
        NonZeroU64::new(value).map(Self).ok_or(CountingError::Zero)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for Counting {
    type Error = CountingError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Counting> for u64 {
    fn from(value: Counting) -> Self {
        value.get()
    }
}

impl Natural for Counting {
    fn one() -> Self {
        Self::ONE
    }

    /// # Panics
    ///
    /// Panics past `u64::MAX`. Reaching it by unit steps is not feasible.
    fn successor(&self) -> Self {
        Self(
            self.0
                .checked_add(1)
                .expect("counting number overflowed u64"),
        )
    }

    fn predecessor(&self) -> Option<Self> {
        NonZeroU64::new(self.get() - 1).map(Self)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.get()
            .checked_sub(other.get())
            .and_then(NonZeroU64::new)
            .map(Self)
    }
}
