use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{ValueError, ValueResult};
use crate::scalar::number::compare_doubles;

/// Geographic location as latitude/longitude in degrees.
///
/// Ordered by latitude, then longitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a validated point.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> ValueResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValueError::invalid_geo_point(
                latitude,
                longitude,
                "latitude must be within [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValueError::invalid_geo_point(
                latitude,
                longitude,
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// `(0, 0)`
    pub const fn origin() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Ord for GeoPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_doubles(self.latitude, other.latitude)
            .then_with(|| compare_doubles(self.longitude, other.longitude))
    }
}

impl PartialOrd for GeoPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 normalizes -0.0, which compares equal.
        (self.latitude + 0.0).to_bits().hash(state);
        (self.longitude + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.latitude, self.longitude)
    }
}
