//! Great-circle distance between two points.
//!
//! Used as the length metric for polyline traversal and as the
//! Euclidean-order fallback when no prior route geometry is available.

use crate::types::LatLng;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two (lat, lng) points, in meters.
///
/// Symmetric, zero for coincident points, monotonic in angular
/// separation.
pub fn distance_meters(from: LatLng, to: LatLng) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}
