//! Value size limits
//!
//! Configurable bounds checked before values built from untrusted input are
//! handed to the index layer.

use crate::core::value::Value;
use crate::error::{ValueError, ValueResult};

/// Largest string or blob payload a single stored field can carry
/// (1 MiB less the per-field overhead).
const MAX_FIELD_PAYLOAD_BYTES: usize = 1_048_487;

/// Configurable limits for values
///
/// The default preset mirrors the limits the document store enforces on
/// stored fields, so a value that passes `validate` can be written.
///
/// # Example
///
/// ```
/// use nebula_field::ValueLimits;
///
/// let limits = ValueLimits::default();
/// assert_eq!(limits.max_nesting_depth, 20);
///
/// let strict = ValueLimits::strict();
/// assert_eq!(strict.max_array_length, 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValueLimits {
    /// Maximum number of elements in an array
    pub max_array_length: usize,

    /// Maximum number of keys in an object
    pub max_object_keys: usize,

    /// Maximum string length in bytes
    pub max_string_bytes: usize,

    /// Maximum blob length in bytes
    pub max_blob_bytes: usize,

    /// Maximum depth of nested arrays/objects; a scalar has depth 0
    pub max_nesting_depth: usize,
}

impl Default for ValueLimits {
    fn default() -> Self {
        Self {
            max_array_length: 20_000,
            max_object_keys: 20_000,
            max_string_bytes: MAX_FIELD_PAYLOAD_BYTES,
            max_blob_bytes: MAX_FIELD_PAYLOAD_BYTES,
            max_nesting_depth: 20,
        }
    }
}

impl ValueLimits {
    /// Limits for values that never reach storage, e.g. query parameters
    /// built in process
    pub fn permissive() -> Self {
        Self {
            max_array_length: 1_000_000,
            max_object_keys: 1_000_000,
            max_string_bytes: 16 * 1024 * 1024,
            max_blob_bytes: 64 * 1024 * 1024,
            max_nesting_depth: 100,
        }
    }

    /// Limits for untrusted client input
    pub fn strict() -> Self {
        Self {
            max_array_length: 1_000,
            max_object_keys: 1_000,
            max_string_bytes: 64 * 1024,
            max_blob_bytes: 64 * 1024,
            max_nesting_depth: 10,
        }
    }

    /// No limits (use with caution!)
    pub const fn unlimited() -> Self {
        Self {
            max_array_length: usize::MAX,
            max_object_keys: usize::MAX,
            max_string_bytes: usize::MAX,
            max_blob_bytes: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }

    #[inline]
    fn check(limit: &'static str, max: usize, actual: usize) -> ValueResult<()> {
        if actual > max {
            tracing::debug!(limit, max, actual, "value limit rejected");
            Err(ValueError::limit_exceeded(limit, max, actual))
        } else {
            Ok(())
        }
    }

    /// Validate array length
    #[inline]
    pub fn check_array_length(&self, len: usize) -> ValueResult<()> {
        Self::check("max_array_length", self.max_array_length, len)
    }

    /// Validate object key count
    #[inline]
    pub fn check_object_keys(&self, count: usize) -> ValueResult<()> {
        Self::check("max_object_keys", self.max_object_keys, count)
    }

    /// Validate string byte length
    #[inline]
    pub fn check_string_bytes(&self, bytes: usize) -> ValueResult<()> {
        Self::check("max_string_bytes", self.max_string_bytes, bytes)
    }

    /// Validate blob length
    #[inline]
    pub fn check_blob_bytes(&self, len: usize) -> ValueResult<()> {
        Self::check("max_blob_bytes", self.max_blob_bytes, len)
    }

    /// Validate nesting depth
    #[inline]
    pub fn check_nesting_depth(&self, depth: usize) -> ValueResult<()> {
        Self::check("max_nesting_depth", self.max_nesting_depth, depth)
    }

    /// Walk `value` and check every bound; object keys count towards
    /// `max_string_bytes` like string payloads.
    pub fn validate(&self, value: &Value) -> ValueResult<()> {
        self.validate_at(value, 0)
    }

    fn validate_at(&self, value: &Value, depth: usize) -> ValueResult<()> {
        match value {
            Value::String(s) => self.check_string_bytes(s.len()),
            Value::Blob(b) => self.check_blob_bytes(b.len()),
            Value::Array(array) => {
                self.check_nesting_depth(depth + 1)?;
                self.check_array_length(array.len())?;
                array
                    .iter()
                    .try_for_each(|item| self.validate_at(item, depth + 1))
            }
            Value::Object(object) => {
                self.check_nesting_depth(depth + 1)?;
                self.check_object_keys(object.len())?;
                object.iter().try_for_each(|(key, item)| {
                    self.check_string_bytes(key.len())?;
                    self.validate_at(item, depth + 1)
                })
            }
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Double(_)
            | Value::Timestamp(_)
            | Value::ServerTimestamp(_)
            | Value::GeoPoint(_) => Ok(()),
        }
    }
}
