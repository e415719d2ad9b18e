//! Hash implementation for Value
//!
//! Consistent with the order-derived equality: values that compare equal
//! hash alike. Numbers share one hash space across both representations, and
//! a server timestamp hashes only its `local` part.

use core::hash::{Hash, Hasher};

use crate::core::kind::ValueKind;
use crate::core::value::Value;
use crate::scalar::number::{hash_double, hash_integer};

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Null => ValueKind::Null.hash(state),
            Self::Boolean(b) => {
                ValueKind::Boolean.hash(state);
                b.hash(state);
            }
            // Integer and Double share a prefix so 1 and 1.0 collide.
            Self::Integer(i) => {
                ValueKind::Integer.type_order().hash(state);
                hash_integer(*i, state);
            }
            Self::Double(d) => {
                ValueKind::Double.type_order().hash(state);
                hash_double(*d, state);
            }
            Self::Timestamp(t) => {
                ValueKind::Timestamp.hash(state);
                t.hash(state);
            }
            Self::ServerTimestamp(t) => {
                ValueKind::ServerTimestamp.hash(state);
                t.local().hash(state);
            }
            Self::String(s) => {
                ValueKind::String.hash(state);
                s.hash(state);
            }
            Self::Blob(b) => {
                ValueKind::Blob.hash(state);
                b.hash(state);
            }
            Self::GeoPoint(g) => {
                ValueKind::GeoPoint.hash(state);
                g.hash(state);
            }
            Self::Array(a) => {
                ValueKind::Array.hash(state);
                a.hash(state);
            }
            Self::Object(o) => {
                ValueKind::Object.hash(state);
                o.hash(state);
            }
        }
    }
}
