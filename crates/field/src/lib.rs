//! Totally ordered document field values.
//!
//! [`Value`] holds exactly one of a fixed set of field kinds: null, boolean,
//! integer, double, timestamp, server timestamp, string, blob, geo point,
//! array and object. Every pair of values, of any kinds, is ordered
//! consistently so the query and index layers can use the order for range
//! scans and uniqueness.
//!
//! ```rust
//! use nebula_field::{Object, Value};
//!
//! assert!(Value::integer(i64::MAX) < Value::double(9_223_372_036_854_775_808.0));
//! assert!(Value::nan() < Value::double(f64::NEG_INFINITY));
//! assert_eq!(Value::integer(3), Value::double(3.0));
//!
//! let ba = Value::object(Object::from([("b", 1_i64), ("a", 2_i64)]));
//! let ab = Value::object(Object::from([("a", 2_i64), ("b", 1_i64)]));
//! assert_eq!(ba, ab);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod collections;
pub mod core;
pub mod error;
pub mod scalar;
pub mod temporal;

pub use crate::core::{TypeOrder, Value, ValueKind, ValueLimits};
pub use collections::{Array, Object};
pub use error::{ValueError, ValueResult};
pub use scalar::{Blob, GeoPoint};
pub use temporal::{ServerTimestamp, Timestamp};

static_assertions::assert_impl_all!(Value: Send, Sync, Clone, Ord, std::hash::Hash);

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Array, Blob, GeoPoint, Object, ServerTimestamp, Timestamp, Value, ValueError, ValueKind,
        ValueResult,
    };
}
