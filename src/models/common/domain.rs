#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::utils::compare_floats;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Represents a geographic position in degrees.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Coordinates {
    /// Latitude, in [-90, 90].
    pub lat: f64,
    /// Longitude, in (-180, 180].
    pub lng: f64,
}

impl Coordinates {
    /// Creates a new instance of `Coordinates`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks whether latitude and longitude are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90. ..=90.).contains(&self.lat)
            && self.lng > -180.
            && self.lng <= 180.
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        compare_floats(self.lat, other.lat) == Ordering::Equal
            && compare_floats(self.lng, other.lng) == Ordering::Equal
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let lat = self.lat.to_bits() as i64;
        let lng = self.lng.to_bits() as i64;

        lat.hash(state);
        lng.hash(state);
    }
}
