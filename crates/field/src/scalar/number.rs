//! Numeric comparison across the integer and double representations
//!
//! Ordering rules:
//! - NaN sorts below every other number, including negative infinity.
//! - NaN equals NaN.
//! - `-0.0` equals `0.0`.
//! - An integer and a double compare by their exact mathematical values,
//!   never by casting the integer to `f64` (which drops low bits above 2^53).

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// `i64::MIN` as a double. Exactly representable (-2^63).
const I64_MIN_AS_F64: f64 = -9_223_372_036_854_775_808.0;

/// 2^63, the first double above `i64::MAX`. `i64::MAX` itself has no exact
/// `f64` representation and rounds up to this value.
const I64_MAX_BOUND_AS_F64: f64 = 9_223_372_036_854_775_808.0;

/// Compare two doubles with NaN as the lowest value.
#[inline]
pub fn compare_doubles(lhs: f64, rhs: f64) -> Ordering {
    if lhs < rhs {
        Ordering::Less
    } else if lhs > rhs {
        Ordering::Greater
    } else if lhs == rhs {
        Ordering::Equal
    } else {
        // At least one side is NaN.
        match (lhs.is_nan(), rhs.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

/// Compare an integer against a double at full precision.
///
/// The double is first checked against the edges of the `i64` range; only
/// inside that range is it truncated to an integer. When the truncated value
/// ties with `lhs`, the fractional part of `rhs` decides, compared in the
/// double domain against the (exactly representable) truncation.
pub fn compare_integer_double(lhs: i64, rhs: f64) -> Ordering {
    if rhs.is_nan() {
        return Ordering::Greater;
    }
    // Also covers negative infinity.
    if rhs < I64_MIN_AS_F64 {
        return Ordering::Greater;
    }
    // Also covers positive infinity.
    if rhs >= I64_MAX_BOUND_AS_F64 {
        return Ordering::Less;
    }

    // In range: truncation toward zero is exact.
    let truncated = rhs as i64;
    match lhs.cmp(&truncated) {
        Ordering::Equal => compare_doubles(truncated as f64, rhs),
        unequal => unequal,
    }
}

/// Compare a double against an integer at full precision.
#[inline]
pub fn compare_double_integer(lhs: f64, rhs: i64) -> Ordering {
    compare_integer_double(rhs, lhs).reverse()
}

/// Integral representation of a double, if it equals some `i64` exactly.
pub fn double_as_exact_integer(value: f64) -> Option<i64> {
    if value.is_finite()
        && value.trunc() == value
        && (I64_MIN_AS_F64..I64_MAX_BOUND_AS_F64).contains(&value)
    {
        Some(value as i64)
    } else {
        None
    }
}

/// Hash shape shared by both numeric representations.
///
/// Numbers that compare equal produce the same stream: integral doubles hash
/// as their integer, every NaN hashes alike, and `-0.0` hashes as `0`.
#[derive(Hash)]
enum NumberHash {
    Integral(i64),
    Fractional(u64),
    NaN,
}

pub(crate) fn hash_integer<H: Hasher>(value: i64, state: &mut H) {
    NumberHash::Integral(value).hash(state);
}

pub(crate) fn hash_double<H: Hasher>(value: f64, state: &mut H) {
    let shape = if value.is_nan() {
        NumberHash::NaN
    } else if let Some(integral) = double_as_exact_integer(value) {
        NumberHash::Integral(integral)
    } else {
        NumberHash::Fractional(value.to_bits())
    };
    shape.hash(state);
}
