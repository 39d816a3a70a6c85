//! Fixtures shared by the integration suites.

#![allow(dead_code)]

use zahlen_integer::{Counting, Integer};

pub fn nat(value: u64) -> Counting {
    Counting::new(value).expect("test fixture must be non-zero")
}

pub fn int(value: i64) -> Integer {
    match value.signum() {
        1 => Integer::Positive(nat(value.unsigned_abs())),
        -1 => Integer::Negative(nat(value.unsigned_abs())),
        _ => Integer::Zero,
    }
}
