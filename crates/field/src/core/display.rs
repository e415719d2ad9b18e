//! Human-readable rendering of values
//!
//! Intended for logs and debugging output, not as a wire encoding.

use core::fmt::{self, Display, Formatter};

use crate::core::value::Value;

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Double(d) => fmt_double(*d, f),
            Self::Timestamp(t) => write!(f, "{t}"),
            Self::ServerTimestamp(t) => write!(f, "{t}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Blob(b) => write!(f, "{b}"),
            Self::GeoPoint(g) => write!(f, "{g}"),
            Self::Array(a) => {
                f.write_str("[")?;
                for (index, item) in a.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(o) => {
                f.write_str("{")?;
                for (index, (key, value)) in o.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn fmt_double(value: f64, f: &mut Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        // `{:?}` keeps the trailing `.0` so doubles stay distinguishable from integers.
        write!(f, "{value:?}")
    }
}
