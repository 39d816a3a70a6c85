//! Sign-magnitude representation and normalization.
//!
//! An [`Integer`] is `Zero` or a signed natural magnitude. Because naturals
//! start at one, the shape of the enum is already the canonical form: there is
//! exactly one value per integer, and no variant can hold a "zero magnitude".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use zahlen_natural::{Counting, Natural};

use crate::ArithmeticError;

/// A signed integer over the natural type `N`.
///
/// `Zero` has no payload, so a zero with a magnitude cannot be written:
///
/// ```compile_fail
/// use zahlen_integer::{Counting, Integer};
///
/// let _ = Integer::Zero(Counting::ONE);
/// ```
///
/// # Serde
///
/// Externally tagged: `"Zero"`, `{"Positive": n}`, `{"Negative": n}`. Any value
/// that deserializes is canonical, since the magnitude is itself a natural.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Integer<N = Counting> {
    Zero,
    Positive(N),
    Negative(N),
}

/// Sign of an [`Integer`], without its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// Collapses the difference `plus - minus` of two naturals into canonical form.
///
/// This is the one place where a signed difference becomes an [`Integer`].
#[must_use]
pub fn make_integer<N: Natural>(plus: &N, minus: &N) -> Integer<N> {
    match plus.compare(minus) {
        Ordering::Equal => Integer::Zero,
        Ordering::Greater => plus
            .checked_sub(minus)
            .map_or(Integer::Zero, Integer::Positive),
        Ordering::Less => minus
            .checked_sub(plus)
            .map_or(Integer::Zero, Integer::Negative),
    }
}

impl<N: Natural> Integer<N> {
    #[must_use]
    pub const fn zero() -> Self {
        Self::Zero
    }

    #[must_use]
    pub fn one() -> Self {
        Self::Positive(N::one())
    }

    #[must_use]
    pub fn two() -> Self {
        Self::Positive(N::one().successor())
    }

    #[must_use]
    pub fn minus_one() -> Self {
        Self::Negative(N::one())
    }

    #[must_use]
    pub fn positive(magnitude: N) -> Self {
        Self::Positive(magnitude)
    }

    #[must_use]
    pub fn negative(magnitude: N) -> Self {
        Self::Negative(magnitude)
    }

    #[must_use]
    pub const fn sign(&self) -> Sign {
        match self {
            Self::Zero => Sign::Zero,
            Self::Positive(_) => Sign::Positive,
            Self::Negative(_) => Sign::Negative,
        }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    #[must_use]
    pub const fn is_positive(&self) -> bool {
        matches!(self, Self::Positive(_))
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        matches!(self, Self::Negative(_))
    }

    /// The natural part of a non-zero integer; `None` for zero.
    #[must_use]
    pub const fn magnitude(&self) -> Option<&N> {
        match self {
            Self::Zero => None,
            Self::Positive(n) | Self::Negative(n) => Some(n),
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::Positive(n) | Self::Negative(n) => Self::Positive(n.clone()),
        }
    }

    /// `-1`, `0` or `1` according to the sign.
    #[must_use]
    pub fn signum(&self) -> Self {
        match self.sign() {
            Sign::Negative => Self::minus_one(),
            Sign::Zero => Self::Zero,
            Sign::Positive => Self::one(),
        }
    }

    /// Converts a strictly positive integer back into its natural magnitude.
    pub fn to_counting(&self) -> Result<N, ArithmeticError> {
        match self {
            Self::Positive(n) => Ok(n.clone()),
            Self::Zero | Self::Negative(_) => {
                tracing::debug!(value = ?self, "refusing to convert non-positive integer");
                Err(ArithmeticError::NotPositive)
            }
        }
    }
}

impl<N> Default for Integer<N> {
    fn default() -> Self {
        Self::Zero
    }
}

impl<N: Natural> From<N> for Integer<N> {
    fn from(magnitude: N) -> Self {
        Self::Positive(magnitude)
    }
}
