//! Constructive integers for Zahlen.
//!
//! Every integer is a sign together with a natural-number magnitude, built and
//! taken apart using nothing but the operations of [`Natural`]. There is no
//! machine arithmetic anywhere in this crate: addition walks successor and
//! predecessor chains, multiplication is repeated addition, division and gcd are
//! repeated subtraction. The cost model is deliberately unary.
//!
//! All magnitude-proportional algorithms are loops, so stack depth does not grow
//! with the size of the operands.
//!
//! ```
//! use zahlen_integer::{Counting, Integer};
//!
//! let twelve = Integer::Positive(Counting::new(12)?);
//! let eighteen = Integer::Positive(Counting::new(18)?);
//! assert_eq!(twelve.gcd(&eighteen), Integer::Positive(Counting::new(6)?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod additive;
mod error;
mod multiplicative;
mod order;
mod repr;
mod sequence;
mod theory;

pub use error::ArithmeticError;
pub use repr::{Integer, Sign, make_integer};
pub use sequence::{AllIntegers, AllPrimes, Range, all_integers, all_primes, range};
pub use zahlen_natural::{Counting, CountingError, Natural, Naturals};
