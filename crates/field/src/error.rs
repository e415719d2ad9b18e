//! Value error types
//!
//! Recoverable failures (bad timestamp ranges, kind mismatches on checked
//! accessors, limit violations) are reported through [`ValueError`].
//! Broken internal invariants are not errors: they abort through
//! [`invariant_violation`].

use thiserror::Error;

use crate::core::kind::ValueKind;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Field value errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// A checked accessor was called while a different kind is active
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A persisted discriminant does not name any kind
    #[error("Unknown value kind discriminant: {code}")]
    UnknownKind { code: u8 },

    /// Timestamp outside 0001-01-01..=9999-12-31 or with invalid nanos
    #[error("Invalid timestamp: seconds={seconds}, nanos={nanos}: {reason}")]
    InvalidTimestamp {
        seconds: i64,
        nanos: i32,
        reason: &'static str,
    },

    /// Latitude or longitude outside its valid range
    #[error("Invalid geo point ({latitude}, {longitude}): {reason}")]
    InvalidGeoPoint {
        latitude: f64,
        longitude: f64,
        reason: &'static str,
    },

    /// Value limit exceeded
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: &'static str,
        max: usize,
        actual: usize,
    },

    /// Parse error for a textual encoding of a payload
    #[error("Invalid {format_type} input: {message}")]
    Parse {
        format_type: &'static str,
        message: String,
    },
}

/// Result alias used throughout the crate
pub type ValueResult<T> = Result<T, ValueError>;

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValueError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Create an unknown kind error
    pub fn unknown_kind(code: u8) -> Self {
        Self::UnknownKind { code }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(seconds: i64, nanos: i32, reason: &'static str) -> Self {
        Self::InvalidTimestamp {
            seconds,
            nanos,
            reason,
        }
    }

    /// Create an invalid geo point error
    pub fn invalid_geo_point(latitude: f64, longitude: f64, reason: &'static str) -> Self {
        Self::InvalidGeoPoint {
            latitude,
            longitude,
            reason,
        }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(limit: &'static str, max: usize, actual: usize) -> Self {
        Self::LimitExceeded { limit, max, actual }
    }

    /// Create a parse error
    pub fn parse(format_type: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format_type,
            message: message.into(),
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl ValueError {
    /// Get error code for monitoring
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "VALUE_TYPE_MISMATCH",
            Self::UnknownKind { .. } => "VALUE_UNKNOWN_KIND",
            Self::InvalidTimestamp { .. } => "VALUE_INVALID_TIMESTAMP",
            Self::InvalidGeoPoint { .. } => "VALUE_INVALID_GEO_POINT",
            Self::LimitExceeded { .. } => "VALUE_LIMIT_EXCEEDED",
            Self::Parse { .. } => "VALUE_PARSE_ERROR",
        }
    }

    /// Whether the error was caused by caller-supplied input
    ///
    /// `TypeMismatch` and `UnknownKind` point at a bug in the calling code or
    /// at corrupted persisted data rather than at user input.
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTimestamp { .. }
                | Self::InvalidGeoPoint { .. }
                | Self::LimitExceeded { .. }
                | Self::Parse { .. }
        )
    }
}

// ============================================================================
// FATAL INVARIANTS
// ============================================================================

/// Abort on a broken internal invariant.
///
/// Every dispatch site that can observe a kind it has no case for funnels
/// through here, so the diagnostic is uniform and never degrades into a
/// silent "equal".
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn invariant_violation(site: &'static str, detail: core::fmt::Arguments<'_>) -> ! {
    tracing::error!(site, %detail, "value invariant violated");
    panic!("{site}: unsupported value kind ({detail})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ValueError::type_mismatch(ValueKind::String, ValueKind::Integer);
        assert_eq!(err.to_string(), "Type mismatch: expected string, got integer");

        let err = ValueError::limit_exceeded("max_array_length", 10, 11);
        assert_eq!(err.to_string(), "max_array_length exceeded: 11 > 10");

        let err = ValueError::unknown_kind(42);
        assert_eq!(err.to_string(), "Unknown value kind discriminant: 42");
    }

    #[test]
    fn test_classification() {
        assert!(ValueError::invalid_timestamp(0, -1, "nanos out of range").is_client_error());
        assert!(!ValueError::unknown_kind(99).is_client_error());
        assert_eq!(
            ValueError::parse("base64", "bad padding").code(),
            "VALUE_PARSE_ERROR"
        );
    }

    #[test]
    #[should_panic(expected = "unsupported value kind")]
    fn test_invariant_violation_panics() {
        invariant_violation("test", format_args!("code {}", 200));
    }
}
