//! Multiplication, exact division, remainders and gcd.
//!
//! Everything here reduces to repeated addition or subtraction:
//! `multiply` adds `|lhs|` into an accumulator `|rhs|` times, division and gcd
//! subtract until nothing is left.

use std::ops::Mul;

use zahlen_natural::Natural;

use crate::{ArithmeticError, Integer, Sign};

impl<N: Natural> Integer<N> {
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let (multiplicand, mut remaining) = match other.sign() {
            Sign::Negative => (self.negate(), other.negate()),
            Sign::Zero | Sign::Positive => (self.clone(), other.clone()),
        };
        let mut product = Self::Zero;
        while remaining.is_positive() {
            product = product.add(&multiplicand);
            remaining = remaining.predecessor();
        }
        product
    }

    #[must_use]
    pub fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Exact quotient by trial subtraction.
    ///
    /// Returns `Ok(None)` when `divisor` does not divide `self`, so callers can
    /// tell "not divisible" apart from a zero divisor.
    pub fn try_divide(&self, divisor: &Self) -> Result<Option<Self>, ArithmeticError> {
        match (self.sign(), divisor.sign()) {
            (_, Sign::Zero) => {
                tracing::debug!(dividend = ?self, "division by zero");
                Err(ArithmeticError::DivisionByZero)
            }
            (_, Sign::Negative) => self.negate().try_divide(&divisor.negate()),
            (Sign::Zero, Sign::Positive) => Ok(Some(Self::Zero)),
            (Sign::Positive, Sign::Positive) => Ok(self.divide_positive(divisor)),
            (Sign::Negative, Sign::Positive) => Ok(self
                .negate()
                .divide_positive(divisor)
                .map(|quotient| quotient.negate())),
        }
    }

    pub fn divide(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        self.try_divide(divisor)?.ok_or_else(|| {
            tracing::debug!(dividend = ?self, divisor = ?divisor, "inexact division");
            ArithmeticError::InexactDivision
        })
    }

    /// Least non-negative residue of `self` modulo a strictly positive `modulus`.
    pub fn modulo(&self, modulus: &Self) -> Result<Self, ArithmeticError> {
        if !modulus.is_positive() {
            tracing::debug!(modulus = ?modulus, "modulus must be strictly positive");
            return Err(ArithmeticError::NonPositiveModulus);
        }
        Ok(self.reduce(modulus))
    }

    pub fn is_divisible_by(&self, divisor: &Self) -> Result<bool, ArithmeticError> {
        if divisor.is_zero() {
            tracing::debug!(dividend = ?self, "divisibility by zero");
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.modulo(&divisor.abs())?.is_zero())
    }

    /// Greatest common divisor by the subtractive Euclidean algorithm.
    ///
    /// The result is non-negative; `gcd(0, 0)` is zero. Consecutive inputs take
    /// a number of subtractions linear in the larger operand.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        loop {
            if a.is_zero() {
                return b;
            }
            if b.is_zero() {
                return a;
            }
            if b.less_than(&a) {
                a = a.subtract(&b);
            } else {
                b = b.subtract(&a);
            }
        }
    }

    /// Least common multiple, found by stepping through multiples of `|self|`.
    ///
    /// Zero when either operand is zero.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::Zero;
        }
        let step = self.abs();
        let modulus = other.abs();
        let mut multiple = step.clone();
        while !multiple.reduce(&modulus).is_zero() {
            multiple = multiple.add(&step);
        }
        multiple
    }

    /// Residue in `[0, modulus)`. `modulus` must be positive.
    pub(crate) fn reduce(&self, modulus: &Self) -> Self {
        let mut residue = self.clone();
        while residue.is_negative() {
            residue = residue.add(modulus);
        }
        while !residue.less_than(modulus) {
            residue = residue.subtract(modulus);
        }
        residue
    }

    fn divide_positive(&self, divisor: &Self) -> Option<Self> {
        let mut remainder = self.clone();
        let mut quotient = Self::Zero;
        loop {
            if remainder.is_zero() {
                return Some(quotient);
            }
            if remainder.less_than(divisor) {
                return None;
            }
            remainder = remainder.subtract(divisor);
            quotient = quotient.successor();
        }
    }
}

impl<N: Natural> Mul for Integer<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<N: Natural> Mul for &Integer<N> {
    type Output = Integer<N>;

    fn mul(self, rhs: Self) -> Integer<N> {
        self.multiply(rhs)
    }
}
