//! Temporal value types
//!
//! Opaque, totally ordered instants consumed by [`Value`](crate::Value).
//! Time arithmetic is out of scope; chrono interop is behind the
//! `temporal` feature.

pub mod timestamp;

pub use timestamp::{ServerTimestamp, Timestamp};
