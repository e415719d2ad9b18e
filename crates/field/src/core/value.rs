//! The document field Value
//!
//! This is the central type of the crate: one closed enum holding exactly one
//! of the supported field kinds. Construction goes through the named
//! factories below; ordering, equality and hashing live in sibling modules.

use core::mem;

use crate::collections::{Array, Object};
use crate::core::kind::ValueKind;
use crate::error::{ValueError, ValueResult};
use crate::scalar::{Blob, GeoPoint};
use crate::temporal::{ServerTimestamp, Timestamp};

/// A document field value.
///
/// Values have plain value semantics. `clone` yields an independent copy
/// (nested arrays and objects included); moving transfers heap payloads
/// without copying them. A default-constructed value is [`Value::Null`].
///
/// Comparison, cloning and dropping recurse once per level of nested arrays
/// and objects. Check untrusted input with
/// [`ValueLimits::validate`](crate::ValueLimits::validate) to bound the depth.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// IEEE-754 double, may be NaN or infinite
    Double(f64),

    /// Resolved point in time
    Timestamp(Timestamp),

    /// Point in time pending server resolution
    ServerTimestamp(ServerTimestamp),

    /// UTF-8 text
    String(String),

    /// Binary data
    Blob(Blob),

    /// Latitude/longitude pair
    GeoPoint(GeoPoint),

    /// Ordered sequence of values
    Array(Array),

    /// Key-sorted map of values
    Object(Object),
}

static NULL_VALUE: Value = Value::Null;
static TRUE_VALUE: Value = Value::Boolean(true);
static FALSE_VALUE: Value = Value::Boolean(false);
static NAN_VALUE: Value = Value::Double(f64::NAN);

impl Value {
    // ==================== Shared instances ====================

    /// Process-wide immutable null
    #[inline]
    pub fn null_ref() -> &'static Self {
        &NULL_VALUE
    }

    /// Process-wide immutable `true`
    #[inline]
    pub fn true_ref() -> &'static Self {
        &TRUE_VALUE
    }

    /// Process-wide immutable `false`
    #[inline]
    pub fn false_ref() -> &'static Self {
        &FALSE_VALUE
    }

    /// Process-wide immutable boolean
    #[inline]
    pub fn boolean_ref(value: bool) -> &'static Self {
        if value { &TRUE_VALUE } else { &FALSE_VALUE }
    }

    /// Process-wide immutable canonical NaN
    #[inline]
    pub fn nan_ref() -> &'static Self {
        &NAN_VALUE
    }

    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a double value
    pub const fn double(v: f64) -> Self {
        Self::Double(v)
    }

    /// Create the canonical NaN double
    pub const fn nan() -> Self {
        Self::Double(f64::NAN)
    }

    /// Create a timestamp value
    pub const fn timestamp(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }

    /// Create a pending server timestamp
    pub const fn server_timestamp(local: Timestamp, previous: Timestamp) -> Self {
        Self::ServerTimestamp(ServerTimestamp::new(local, previous))
    }

    /// Create a string value from `String` or `&str`
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a blob value
    pub fn blob(v: impl Into<Blob>) -> Self {
        Self::Blob(v.into())
    }

    /// Create a geo point value
    pub const fn geo_point(v: GeoPoint) -> Self {
        Self::GeoPoint(v)
    }

    /// Create an array value
    pub fn array(v: impl Into<Array>) -> Self {
        Self::Array(v.into())
    }

    /// Create an object value
    pub fn object(v: impl Into<Object>) -> Self {
        Self::Object(v.into())
    }

    /// Deterministic default payload for `kind`.
    ///
    /// Zero, empty or origin for each kind. Empty blobs, arrays and objects
    /// do not allocate.
    pub fn default_of(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Null => Self::Null,
            ValueKind::Boolean => Self::Boolean(false),
            ValueKind::Integer => Self::Integer(0),
            ValueKind::Double => Self::Double(0.0),
            ValueKind::Timestamp => Self::Timestamp(Timestamp::ORIGIN),
            ValueKind::ServerTimestamp => Self::ServerTimestamp(ServerTimestamp::default()),
            ValueKind::String => Self::String(String::new()),
            ValueKind::Blob => Self::Blob(Blob::empty()),
            ValueKind::GeoPoint => Self::GeoPoint(GeoPoint::origin()),
            ValueKind::Array => Self::Array(Array::new()),
            ValueKind::Object => Self::Object(Object::new()),
        }
    }

    // ==================== Kind transitions ====================

    /// Switch to `kind`, resetting the payload to [`Value::default_of`].
    ///
    /// No-op when `kind` is already active, the payload is kept as is.
    pub fn retag(&mut self, kind: ValueKind) {
        let from = self.kind();
        if from == kind {
            return;
        }
        tracing::trace!(%from, to = %kind, "retag value");
        *self = Self::default_of(kind);
    }

    /// Move the value out, leaving `Null` behind
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Double(_) => ValueKind::Double,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::ServerTimestamp(_) => ValueKind::ServerTimestamp,
            Self::String(_) => ValueKind::String,
            Self::Blob(_) => ValueKind::Blob,
            Self::GeoPoint(_) => ValueKind::GeoPoint,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if this is numeric (integer or double)
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Double(_))
    }

    /// Check if this is NaN
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Double(d) if d.is_nan())
    }

    #[inline]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    #[inline]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[inline]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    // ==================== Accessors (as_*) ====================

    #[inline]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Self::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_server_timestamp(&self) -> Option<&ServerTimestamp> {
        match self {
            Self::ServerTimestamp(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_blob(&self) -> Option<&Blob> {
        match self {
            Self::Blob(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_geo_point(&self) -> Option<&GeoPoint> {
        match self {
            Self::GeoPoint(g) => Some(g),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    // ==================== Checked accessors (try_*) ====================

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        ValueError::type_mismatch(expected, self.kind())
    }

    pub fn try_boolean(&self) -> ValueResult<bool> {
        self.as_boolean()
            .ok_or_else(|| self.mismatch(ValueKind::Boolean))
    }

    pub fn try_integer(&self) -> ValueResult<i64> {
        self.as_integer()
            .ok_or_else(|| self.mismatch(ValueKind::Integer))
    }

    pub fn try_double(&self) -> ValueResult<f64> {
        self.as_double()
            .ok_or_else(|| self.mismatch(ValueKind::Double))
    }

    pub fn try_timestamp(&self) -> ValueResult<&Timestamp> {
        self.as_timestamp()
            .ok_or_else(|| self.mismatch(ValueKind::Timestamp))
    }

    pub fn try_server_timestamp(&self) -> ValueResult<&ServerTimestamp> {
        self.as_server_timestamp()
            .ok_or_else(|| self.mismatch(ValueKind::ServerTimestamp))
    }

    pub fn try_str(&self) -> ValueResult<&str> {
        self.as_str().ok_or_else(|| self.mismatch(ValueKind::String))
    }

    pub fn try_blob(&self) -> ValueResult<&Blob> {
        self.as_blob().ok_or_else(|| self.mismatch(ValueKind::Blob))
    }

    pub fn try_geo_point(&self) -> ValueResult<&GeoPoint> {
        self.as_geo_point()
            .ok_or_else(|| self.mismatch(ValueKind::GeoPoint))
    }

    pub fn try_array(&self) -> ValueResult<&Array> {
        self.as_array().ok_or_else(|| self.mismatch(ValueKind::Array))
    }

    pub fn try_object(&self) -> ValueResult<&Object> {
        self.as_object()
            .ok_or_else(|| self.mismatch(ValueKind::Object))
    }

    // ==================== Moves (into_*) ====================

    /// Move the string payload out without copying
    pub fn into_string(self) -> ValueResult<String> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    /// Move the blob payload out without copying
    pub fn into_blob(self) -> ValueResult<Blob> {
        match self {
            Self::Blob(b) => Ok(b),
            other => Err(other.mismatch(ValueKind::Blob)),
        }
    }

    /// Move the array payload out without copying
    pub fn into_array(self) -> ValueResult<Array> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Move the object payload out without copying
    pub fn into_object(self) -> ValueResult<Object> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::string(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl From<ServerTimestamp> for Value {
    fn from(v: ServerTimestamp) -> Self {
        Self::ServerTimestamp(v)
    }
}

impl From<Blob> for Value {
    fn from(v: Blob) -> Self {
        Self::Blob(v)
    }
}

impl From<GeoPoint> for Value {
    fn from(v: GeoPoint) -> Self {
        Self::GeoPoint(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v.into())
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}
