//! Parity, integer square roots, primality and factorial.

use zahlen_natural::Natural;

use crate::{ArithmeticError, Integer, Sign, range};

impl<N: Natural> Integer<N> {
    #[must_use]
    pub fn is_even(&self) -> bool {
        let mut remaining = self.abs();
        let mut even = true;
        while remaining.is_positive() {
            remaining = remaining.predecessor();
            even = !even;
        }
        even
    }

    #[must_use]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Largest `r` with `r * r <= self`, by unary ascent from one.
    pub fn almost_square_root(&self) -> Result<Self, ArithmeticError> {
        if self.is_negative() {
            tracing::debug!(value = ?self, "square root of negative integer");
            return Err(ArithmeticError::NegativeInput);
        }
        Ok(self.floor_root())
    }

    /// Primality by trial division up to the square root.
    ///
    /// Zero and units are not prime; a negative value is prime when its
    /// negation is.
    #[must_use]
    pub fn is_prime(&self) -> bool {
        let candidate = self.abs();
        if candidate.less_than_or_equal_to(&Self::one()) {
            return false;
        }
        let limit = candidate.floor_root();
        !range(&Self::two(), &limit).any(|divisor| candidate.reduce(&divisor).is_zero())
    }

    pub fn factorial(&self) -> Result<Self, ArithmeticError> {
        match self.sign() {
            Sign::Negative => {
                tracing::debug!(value = ?self, "factorial of negative integer");
                Err(ArithmeticError::NegativeInput)
            }
            Sign::Zero => Ok(Self::one()),
            Sign::Positive => Ok(range(&Self::one(), self)
                .fold(Self::one(), |product, factor| product.multiply(&factor))),
        }
    }

    /// `self` must be non-negative.
    fn floor_root(&self) -> Self {
        if self.is_zero() {
            return Self::Zero;
        }
        let mut root = Self::one();
        loop {
            let next = root.successor();
            if self.less_than(&next.square()) {
                return root;
            }
            root = next;
        }
    }
}
