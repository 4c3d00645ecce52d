//! Minimum/equality demos: the monomorphic versions first, then the single
//! generic function that replaces the whole family.

use std::fmt::Debug;

pub fn min_i64(a: i64, b: i64) -> i64 {
    if a < b {
        a
    } else {
        b
    }
}

pub fn min_f64(a: f64, b: f64) -> f64 {
    if a < b {
        a
    } else {
        b
    }
}

/// One `min` for every ordered type; `PartialOrd` plays the role of an
/// ordering constraint on the type parameter.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

pub fn equal<T: PartialEq>(a: T, b: T) -> bool {
    a == b
}

/// "Print anything" demo: the loosest useful bound.
pub fn describe<T: Debug>(v: &T) -> String {
    format!("{:?}", v)
}
