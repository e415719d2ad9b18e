//! Scalar payload types and numeric comparison

pub mod blob;
pub mod geo_point;
pub mod number;

pub use blob::Blob;
pub use geo_point::GeoPoint;
