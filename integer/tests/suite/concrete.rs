//! Worked examples through the public API.

use insta::assert_snapshot;
use zahlen_integer::{ArithmeticError, Counting, Integer, all_integers, all_primes, range};

use crate::common::int;

fn render(values: &[Integer]) -> String {
    format!("{values:?}")
}

#[test]
fn gcd_of_twelve_and_eighteen() {
    assert_eq!(int(12).gcd(&int(18)), int(6));
}

#[test]
fn factorial_of_four() {
    assert_eq!(int(4).factorial(), Ok(int(24)));
}

#[test]
fn primality_examples() {
    assert!(int(2).is_prime());
    assert!(!int(4).is_prime());
    assert!(Integer::negative(Counting::new(7).unwrap()).is_prime());
}

#[test]
fn first_five_integers() {
    let first: Vec<Integer> = all_integers().take(5).collect();
    assert_eq!(first, vec![int(0), int(1), int(-1), int(2), int(-2)]);
    assert_snapshot!(
        render(&first),
        @"[Zero, Positive(Counting(1)), Negative(Counting(1)), Positive(Counting(2)), Negative(Counting(2))]"
    );
}

#[test]
fn first_five_primes() {
    let first: Vec<Integer> = all_primes().take(5).collect();
    assert_eq!(first, vec![int(2), int(3), int(5), int(7), int(11)]);
    assert_snapshot!(
        render(&first),
        @"[Positive(Counting(2)), Positive(Counting(3)), Positive(Counting(5)), Positive(Counting(7)), Positive(Counting(11))]"
    );
}

#[test]
fn range_two_to_one_is_empty() {
    assert_eq!(range(&int(2), &int(1)).next(), None);
}

#[test]
fn divide_failure_kinds() {
    assert_eq!(int(9).divide(&int(0)), Err(ArithmeticError::DivisionByZero));
    assert_eq!(int(9).divide(&int(4)), Err(ArithmeticError::InexactDivision));
    assert_eq!(int(9).try_divide(&int(4)), Ok(None));
    assert_eq!(int(-9).divide(&int(3)), Ok(int(-3)));
}

#[test]
fn error_messages() {
    assert_snapshot!(ArithmeticError::DivisionByZero.to_string(), @"division by zero");
    assert_snapshot!(
        ArithmeticError::NotPositive.to_string(),
        @"only strictly positive integers convert to counting numbers"
    );
}

#[test]
fn negative_inputs_are_rejected() {
    assert_eq!(int(-1).factorial(), Err(ArithmeticError::NegativeInput));
    assert_eq!(int(-1).almost_square_root(), Err(ArithmeticError::NegativeInput));
    assert_eq!(int(0).to_counting(), Err(ArithmeticError::NotPositive));
    assert_eq!(int(3).modulo(&int(-2)), Err(ArithmeticError::NonPositiveModulus));
}

#[test]
fn large_operands_run_iteratively() {
    let big = int(150_000);
    assert_eq!(big.subtract(&int(-150_000)), int(300_000));
    assert_eq!(int(300_001).gcd(&int(300_000)), int(1));
}
