//! Equality and ordering by case analysis on signs.
//!
//! Magnitudes are only compared when both signs agree, and then through the
//! natural type. For two negatives the comparison is flipped, since the larger
//! magnitude is the smaller integer.

use std::cmp::Ordering;

use zahlen_natural::Natural;

use crate::Integer;

impl<N: Natural> Integer<N> {
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Zero, Self::Zero) => true,
            (Self::Positive(a), Self::Positive(b)) | (Self::Negative(a), Self::Negative(b)) => {
                a.equal_to(b)
            }
            (Self::Zero, Self::Positive(_) | Self::Negative(_))
            | (Self::Positive(_), Self::Zero | Self::Negative(_))
            | (Self::Negative(_), Self::Zero | Self::Positive(_)) => false,
        }
    }

    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Positive(a), Self::Positive(b)) => a.less_than(b),
            (Self::Negative(a), Self::Negative(b)) => b.less_than(a),
            (Self::Negative(_), Self::Zero | Self::Positive(_)) | (Self::Zero, Self::Positive(_)) => {
                true
            }
            (Self::Zero, Self::Zero | Self::Negative(_))
            | (Self::Positive(_), Self::Zero | Self::Negative(_)) => false,
        }
    }

    #[must_use]
    pub fn less_than_or_equal_to(&self, other: &Self) -> bool {
        !other.less_than(self)
    }

    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        other.less_than(self)
    }

    #[must_use]
    pub fn greater_than_or_equal_to(&self, other: &Self) -> bool {
        !self.less_than(other)
    }

    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self.equal_to(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl<N: Natural> PartialEq for Integer<N> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl<N: Natural> Eq for Integer<N> {}

impl<N: Natural> PartialOrd for Integer<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

/// `max`, `min` and `clamp` come from here and agree with [`Integer::compare`].
impl<N: Natural> Ord for Integer<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
