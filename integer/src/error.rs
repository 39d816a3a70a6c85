use thiserror::Error;

/// Domain failures of integer operations.
///
/// Each kind is distinct so callers can treat, say, an inexact quotient as an
/// ordinary negative answer while still surfacing a zero divisor as a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("divisor does not divide the dividend exactly")]
    InexactDivision,
    #[error("operation is undefined for negative integers")]
    NegativeInput,
    #[error("only strictly positive integers convert to counting numbers")]
    NotPositive,
    #[error("modulus must be strictly positive")]
    NonPositiveModulus,
}
