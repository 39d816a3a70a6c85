//! Successor, predecessor, negation, addition and subtraction.
//!
//! Addition and subtraction walk the second operand to zero one unit at a time,
//! so both cost exactly `|rhs|` successor/predecessor steps.

use std::ops::{Add, Neg, Sub};

use zahlen_natural::Natural;

use crate::{Integer, Sign};

impl<N: Natural> Integer<N> {
    #[must_use]
    pub fn successor(&self) -> Self {
        match self {
            Self::Positive(n) => Self::Positive(n.successor()),
            Self::Zero => Self::one(),
            Self::Negative(n) => n.predecessor().map_or(Self::Zero, Self::Negative),
        }
    }

    #[must_use]
    pub fn predecessor(&self) -> Self {
        self.negate().successor().negate()
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::Positive(n) => Self::Negative(n.clone()),
            Self::Negative(n) => Self::Positive(n.clone()),
        }
    }

    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        let mut remaining = other.clone();
        loop {
            match remaining.sign() {
                Sign::Zero => return sum,
                Sign::Positive => {
                    sum = sum.successor();
                    remaining = remaining.predecessor();
                }
                Sign::Negative => {
                    sum = sum.predecessor();
                    remaining = remaining.successor();
                }
            }
        }
    }

    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let mut difference = self.clone();
        let mut remaining = other.clone();
        loop {
            match remaining.sign() {
                Sign::Zero => return difference,
                Sign::Positive => {
                    difference = difference.predecessor();
                    remaining = remaining.predecessor();
                }
                Sign::Negative => {
                    difference = difference.successor();
                    remaining = remaining.successor();
                }
            }
        }
    }
}

impl<N: Natural> Neg for Integer<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<N: Natural> Neg for &Integer<N> {
    type Output = Integer<N>;

    fn neg(self) -> Integer<N> {
        self.negate()
    }
}

impl<N: Natural> Add for Integer<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Integer::add(&self, &rhs)
    }
}

impl<N: Natural> Add for &Integer<N> {
    type Output = Integer<N>;

    fn add(self, rhs: Self) -> Integer<N> {
        Integer::add(self, rhs)
    }
}

impl<N: Natural> Sub for Integer<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl<N: Natural> Sub for &Integer<N> {
    type Output = Integer<N>;

    fn sub(self, rhs: Self) -> Integer<N> {
        self.subtract(rhs)
    }
}
