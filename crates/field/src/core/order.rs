//! Total order over all values
//!
//! Values of comparable kinds (see [`ValueKind::is_comparable_with`]) are
//! ordered by payload. All other pairs are ordered by [`TypeOrder`] rank:
//!
//! ```text
//! Null < Boolean < Number < Timestamp < String < Blob < GeoPoint < Array < Object
//! ```
//!
//! Equality is derived from the order, so `Integer(1) == Double(1.0)` and
//! `Double(NaN) == Double(NaN)`. Index consumers persist this order; any
//! change to it invalidates stored index data.
//!
//! [`ValueKind::is_comparable_with`]: crate::ValueKind::is_comparable_with
//! [`TypeOrder`]: crate::TypeOrder

use core::cmp::Ordering;

use crate::core::value::Value;
use crate::error::invariant_violation;
use crate::scalar::number::{compare_double_integer, compare_doubles, compare_integer_double};

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Boolean(a), Boolean(b)) => a.cmp(b),

            (Integer(a), Integer(b)) => a.cmp(b),
            (Integer(a), Double(b)) => compare_integer_double(*a, *b),
            (Double(a), Integer(b)) => compare_double_integer(*a, *b),
            (Double(a), Double(b)) => compare_doubles(*a, *b),

            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            (ServerTimestamp(a), ServerTimestamp(b)) => a.local().cmp(&b.local()),
            // Pending writes sort after every resolved timestamp.
            (Timestamp(_), ServerTimestamp(_)) => Ordering::Less,
            (ServerTimestamp(_), Timestamp(_)) => Ordering::Greater,

            (String(a), String(b)) => a.cmp(b),
            (Blob(a), Blob(b)) => a.cmp(b),
            (GeoPoint(a), GeoPoint(b)) => a.cmp(b),
            (Array(a), Array(b)) => a.cmp(b),
            (Object(a), Object(b)) => a.cmp(b),

            _ => compare_by_rank(self, other),
        }
    }
}

/// Order of two values whose kinds are not comparable.
///
/// Reaching this with a comparable pair means a kind was added without a
/// case above.
fn compare_by_rank(lhs: &Value, rhs: &Value) -> Ordering {
    let (lhs_kind, rhs_kind) = (lhs.kind(), rhs.kind());
    if lhs_kind.is_comparable_with(rhs_kind) {
        invariant_violation(
            "Value::cmp",
            format_args!("no ordering for {lhs_kind} against {rhs_kind}"),
        );
    }
    lhs_kind.type_order().cmp(&rhs_kind.type_order())
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}
