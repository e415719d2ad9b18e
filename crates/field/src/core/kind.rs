//! Value kinds and cross-kind ordering rules.
//!
//! This module defines [`ValueKind`] (the discriminator of a [`Value`]) and
//! [`TypeOrder`] (the rank used between kinds that cannot be compared by
//! value).
//!
//! Quick example:
//! ```rust
//! use nebula_field::{TypeOrder, Value, ValueKind};
//!
//! let v = Value::double(2.5);
//! assert_eq!(v.kind(), ValueKind::Double);
//! assert!(ValueKind::Double.is_comparable_with(ValueKind::Integer));
//! assert_eq!(ValueKind::Double.type_order(), TypeOrder::Number);
//! assert_eq!(ValueKind::try_from(2), Ok(ValueKind::Integer));
//! ```
//!
//! The discriminant codes and the rank order are persisted by index
//! consumers. Changing either is a breaking change for stored data.
//!
//! [`Value`]: crate::Value

use core::fmt::{Display, Formatter};

use crate::error::{ValueError, invariant_violation};

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum ValueKind {
    Null = 0,
    Boolean = 1,
    Integer = 2,
    Double = 3,
    Timestamp = 4,
    ServerTimestamp = 5,
    String = 6,
    Blob = 7,
    GeoPoint = 8,
    Array = 9,
    Object = 10,
}

/// Rank between kinds that are not mutually comparable.
///
/// Integer and Double share [`TypeOrder::Number`]; Timestamp and
/// ServerTimestamp share [`TypeOrder::Timestamp`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TypeOrder {
    Null,
    Boolean,
    Number,
    Timestamp,
    String,
    Blob,
    GeoPoint,
    Array,
    Object,
}

impl ValueKind {
    /// All kinds in discriminant order
    pub const ALL: [Self; 11] = [
        Self::Null,
        Self::Boolean,
        Self::Integer,
        Self::Double,
        Self::Timestamp,
        Self::ServerTimestamp,
        Self::String,
        Self::Blob,
        Self::GeoPoint,
        Self::Array,
        Self::Object,
    ];

    /// Rank of this kind in the cross-kind order
    pub const fn type_order(self) -> TypeOrder {
        match self {
            Self::Null => TypeOrder::Null,
            Self::Boolean => TypeOrder::Boolean,
            Self::Integer | Self::Double => TypeOrder::Number,
            Self::Timestamp | Self::ServerTimestamp => TypeOrder::Timestamp,
            Self::String => TypeOrder::String,
            Self::Blob => TypeOrder::Blob,
            Self::GeoPoint => TypeOrder::GeoPoint,
            Self::Array => TypeOrder::Array,
            Self::Object => TypeOrder::Object,
        }
    }

    /// Whether values of the two kinds are ordered by value rather than by rank
    ///
    /// Two kinds are comparable exactly when they share a rank.
    pub const fn is_comparable_with(self, other: Self) -> bool {
        self.type_order() as u8 == other.type_order() as u8
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Double)
    }

    /// Check if this kind is temporal
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Timestamp | Self::ServerTimestamp)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Whether the payload of this kind lives on the heap.
    ///
    /// Moving a value of such a kind transfers the payload; every other kind
    /// is plain data and is copied.
    pub const fn owns_heap_payload(self) -> bool {
        matches!(self, Self::String | Self::Blob | Self::Array | Self::Object)
    }

    /// Stable persisted discriminant
    pub const fn discriminant(self) -> u8 {
        self as u8
    }

    /// Decode a discriminant read from trusted storage.
    ///
    /// An unknown code means the kind enumeration and the stored data have
    /// diverged. That is treated as a fatal invariant violation, not as a
    /// recoverable error; use [`ValueKind::try_from`] for untrusted input.
    #[track_caller]
    pub fn expect_from_discriminant(code: u8) -> Self {
        match Self::try_from(code) {
            Ok(kind) => kind,
            Err(_) => invariant_violation(
                "ValueKind::expect_from_discriminant",
                format_args!("discriminant {code}"),
            ),
        }
    }

    /// Get a descriptive name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Timestamp => "timestamp",
            Self::ServerTimestamp => "server_timestamp",
            Self::String => "string",
            Self::Blob => "blob",
            Self::GeoPoint => "geo_point",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| ValueError::unknown_kind(code))
    }
}

impl From<ValueKind> for u8 {
    fn from(kind: ValueKind) -> Self {
        kind.discriminant()
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
