//! Helpers for working with the `f64` values stored in expressions.

/// The largest magnitude at which every integer is exactly representable as an `f64`.
const MAX_EXACT_INTEGER: f64 = (1u64 << 53) as f64;

/// Returns the value as an `i64` if it is an integer that `f64` represents exactly.
pub fn as_integer(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}

/// Returns true if the value is a finite integer.
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// Replaces negative zero with positive zero, leaving other values untouched.
pub fn normalize(n: f64) -> f64 {
    if n == 0.0 {
        0.0
    } else {
        n
    }
}

/// Computes the (non-negative) greatest common divisor of two integers. `gcd(0, 0)` is `0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}
