//! Core data model for tour route computation.
//!
//! Coordinate order conventions: the crate works in (latitude, longitude)
//! internally and converts to (longitude, latitude) at API boundaries,
//! where directions providers expect lng-first pairs.

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair. Internal processing order.
pub type LatLng = (f64, f64);

/// A (longitude, latitude) pair. Directions-API boundary order.
pub type LngLat = (f64, f64);

/// A fixed, ordered point on the tour route.
///
/// Stops carry names, media and trigger radii in the wider application;
/// route computation only needs the coordinate and the sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    /// Sort key. Unique increasing integer assigned by the tour editor.
    pub order: u32,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    pub fn new(id: impl Into<String>, order: u32, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            order,
            lat,
            lng,
        }
    }

    pub fn location(&self) -> LatLng {
        (self.lat, self.lng)
    }
}

/// A user-placed annotation shaping the route between two stops.
///
/// `segment_index` names the directed segment between stop[i] and
/// stop[i+1] of the order-sorted stop sequence at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub segment_index: usize,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64, segment_index: usize) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            segment_index,
        }
    }

    pub fn location(&self) -> LatLng {
        (self.lat, self.lng)
    }

    /// Whether the coordinate is finite and inside WGS84 bounds.
    ///
    /// Malformed waypoints are filtered before grouping; a single bad
    /// waypoint must not abort the whole route calculation.
    pub fn has_valid_location(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_location() {
        let wp = Waypoint::new("a", 48.85, 2.35, 0);
        assert!(wp.has_valid_location());
    }

    #[test]
    fn test_nan_location_rejected() {
        let wp = Waypoint::new("a", f64::NAN, 2.35, 0);
        assert!(!wp.has_valid_location());
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let wp = Waypoint::new("a", 91.0, 0.0, 0);
        assert!(!wp.has_valid_location());
    }

    #[test]
    fn test_out_of_range_longitude_rejected() {
        let wp = Waypoint::new("a", 0.0, -180.5, 0);
        assert!(!wp.has_valid_location());
    }

    #[test]
    fn test_stop_location() {
        let stop = Stop::new("s", 0, 48.85, 2.35);
        assert_eq!(stop.location(), (48.85, 2.35));
    }
}
