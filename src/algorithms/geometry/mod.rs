//! Great-circle geometry over geographic coordinates.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/great_circle_test.rs"]
mod great_circle_test;

use crate::models::common::{Coordinates, Distance};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.;

/// Gets distance between two coordinates in kilometers using the haversine formula.
pub fn great_circle_distance(from: &Coordinates, to: &Coordinates) -> Distance {
    let d_lat = degree_rad(to.lat - from.lat);
    let d_lng = degree_rad(to.lng - from.lng);

    let lat1 = degree_rad(from.lat);
    let lat2 = degree_rad(to.lat);

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + (d_lng / 2.).sin() * (d_lng / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}
