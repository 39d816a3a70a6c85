//! Algebraic laws over small integers.
//!
//! Operands stay small because every operation is unary.

use proptest::prelude::{ProptestConfig, Strategy, prop_assert, prop_assert_eq, proptest};
use zahlen_integer::{ArithmeticError, Counting, Integer, make_integer};

use crate::common::{int, nat};

fn small() -> impl Strategy<Value = Integer> {
    (-40_i64..=40).prop_map(int)
}

fn tiny() -> impl Strategy<Value = Integer> {
    (-9_i64..=9).prop_map(int)
}

fn natural() -> impl Strategy<Value = Counting> {
    (1_u64..=60).prop_map(nat)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn make_integer_trichotomy(a in natural(), b in natural()) {
        let difference = make_integer(&a, &b);
        prop_assert_eq!(difference.is_zero(), a == b);
        if a > b {
            prop_assert_eq!(difference, Integer::Positive(nat(a.get() - b.get())));
        } else if a < b {
            prop_assert_eq!(difference, Integer::Negative(nat(b.get() - a.get())));
        }
    }

    #[test]
    fn negate_is_an_involution(i in small()) {
        prop_assert_eq!(i.negate().negate(), i);
    }

    #[test]
    fn successor_and_predecessor_invert(i in small()) {
        prop_assert_eq!(i.successor().predecessor(), i.clone());
        prop_assert_eq!(i.predecessor().successor(), i);
    }

    #[test]
    fn add_commutes(i in small(), j in small()) {
        prop_assert_eq!(i.add(&j), j.add(&i));
    }

    #[test]
    fn add_inverse_is_zero(i in small()) {
        prop_assert!(i.add(&i.negate()).is_zero());
    }

    #[test]
    fn subtract_undoes_add(i in small(), j in small()) {
        prop_assert_eq!(i.add(&j).subtract(&j), i);
    }

    #[test]
    fn add_associates(i in small(), j in small(), k in small()) {
        prop_assert_eq!(i.add(&j).add(&k), i.add(&j.add(&k)));
    }

    #[test]
    fn multiply_associates(i in tiny(), j in tiny(), k in tiny()) {
        prop_assert_eq!(i.multiply(&j).multiply(&k), i.multiply(&j.multiply(&k)));
    }

    #[test]
    fn multiply_commutes(i in small(), j in tiny()) {
        prop_assert_eq!(i.multiply(&j), j.multiply(&i));
    }

    #[test]
    fn multiply_distributes_over_add(i in tiny(), j in tiny(), k in tiny()) {
        prop_assert_eq!(i.multiply(&j.add(&k)), i.multiply(&j).add(&i.multiply(&k)));
    }

    #[test]
    fn to_counting_round_trips(n in natural()) {
        let positive = Integer::Positive(n);
        let part = positive.magnitude().cloned();
        prop_assert_eq!(positive.to_counting().ok(), part);
        prop_assert_eq!(positive.negate().to_counting(), Err(ArithmeticError::NotPositive));
    }

    #[test]
    fn divide_inverts_multiply(i in small(), j in tiny()) {
        if j.is_zero() {
            prop_assert_eq!(i.divide(&j), Err(ArithmeticError::DivisionByZero));
        } else {
            let product = i.multiply(&j);
            prop_assert_eq!(product.divide(&j), Ok(i));
        }
    }

    #[test]
    fn divide_reports_inexact(i in small(), j in tiny()) {
        match i.divide(&j) {
            Ok(quotient) => prop_assert_eq!(quotient.multiply(&j), i),
            Err(ArithmeticError::DivisionByZero) => prop_assert!(j.is_zero()),
            Err(error) => {
                prop_assert_eq!(error, ArithmeticError::InexactDivision);
                prop_assert_eq!(i.try_divide(&j), Ok(None));
            }
        }
    }

    #[test]
    fn modulo_stays_below_modulus(i in small(), m in 1_i64..=9) {
        let modulus = int(m);
        let residue = i.modulo(&modulus).unwrap();
        prop_assert!(!residue.is_negative());
        prop_assert!(residue < modulus);
        prop_assert!(i.subtract(&residue).is_divisible_by(&modulus).unwrap());
    }

    #[test]
    fn gcd_divides_both(i in small(), j in small()) {
        let divisor = i.gcd(&j);
        prop_assert!(!divisor.is_negative());
        if !divisor.is_zero() {
            prop_assert!(i.is_divisible_by(&divisor).unwrap());
            prop_assert!(j.is_divisible_by(&divisor).unwrap());
        }
    }

    #[test]
    fn ordering_matches_machine_integers(a in -40_i64..=40, b in -40_i64..=40) {
        prop_assert_eq!(int(a).compare(&int(b)), a.cmp(&b));
        prop_assert_eq!(int(a).less_than(&int(b)), a < b);
    }

    #[test]
    fn parity_matches_machine_integers(a in -40_i64..=40) {
        prop_assert_eq!(int(a).is_even(), a % 2 == 0);
    }
}
