//! Binary data (Blob) type
//!
//! - Reference-counted storage via the `bytes` crate
//! - The empty blob performs no allocation
//! - Lexicographic byte ordering
//! - Base64 encoding/decoding

use core::fmt;

use base64::Engine;
use bytes::Bytes;

use crate::error::{ValueError, ValueResult};

/// Immutable binary payload.
///
/// Clones share the underlying buffer; since the buffer is never mutated in
/// place, copies behave as independent values.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Blob {
    inner: Bytes,
}

impl Blob {
    /// Empty blob, no allocation
    pub const fn empty() -> Self {
        Self {
            inner: Bytes::new(),
        }
    }

    /// Create a blob taking ownership of `data`
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Bytes::from(data),
        }
    }

    /// Create from a byte slice (allocates)
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            inner: Bytes::copy_from_slice(data),
        }
    }

    /// Create from a static byte slice without copying
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            inner: Bytes::from_static(data),
        }
    }

    /// Create from base64 encoded string
    pub fn from_base64(encoded: &str) -> ValueResult<Self> {
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map(Self::new)
            .map_err(|e| ValueError::parse("base64", e.to_string()))
    }

    /// Encode to base64 string
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.inner)
    }

    /// Get the byte slice
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Get the length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copy out into an owned vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.inner.to_vec()
    }

    /// Get underlying buffer for zero-copy hand-off
    pub fn into_inner(self) -> Bytes {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for Blob {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<Bytes> for Blob {
    fn from(inner: Bytes) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({} bytes)", self.len())
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob({})", self.to_base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_blob() {
        let blob = Blob::empty();
        assert!(blob.is_empty());
        assert_eq!(blob, Blob::default());
        assert_eq!(blob.as_slice(), &[] as &[u8]);
    }

    #[test]
    fn test_lexicographic_order() {
        let a = Blob::from_static(&[1, 2]);
        let b = Blob::from_static(&[1, 2, 0]);
        let c = Blob::from_static(&[1, 3]);
        assert!(Blob::empty() < a);
        assert!(a < b);
        assert!(b < c);
        assert!(Blob::from_static(&[0xff]) > Blob::from_static(&[0x00, 0xff]));
    }

    #[test]
    fn test_base64_round_trip() {
        let blob = Blob::from_slice(b"hello");
        assert_eq!(blob.to_base64(), "aGVsbG8=");
        assert_eq!(Blob::from_base64("aGVsbG8=").unwrap(), blob);
    }

    #[test]
    fn test_invalid_base64() {
        let err = Blob::from_base64("not base64!").unwrap_err();
        assert_eq!(err.code(), "VALUE_PARSE_ERROR");
    }

    #[test]
    fn test_display() {
        assert_eq!(Blob::from_slice(b"hi").to_string(), "Blob(aGk=)");
        assert_eq!(format!("{:?}", Blob::from_slice(b"hi")), "Blob(2 bytes)");
    }
}
