//! Test fixtures for route-composer.
//!
//! Provides realistic test data including:
//! - Real Monaco locations (from OpenStreetMap)
//! - Builders for stops and waypoints

pub mod monaco_locations;

#[allow(unused_imports)]
pub use monaco_locations::*;

use route_composer::types::{Stop, Waypoint};

/// Builds stops from (lat, lng) pairs, ordered as given.
#[allow(dead_code)]
pub fn stops_from(coords: &[(f64, f64)]) -> Vec<Stop> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(lat, lng))| Stop::new(format!("stop-{}", i), i as u32, lat, lng))
        .collect()
}

/// Builds stops from named locations, ordered as given.
#[allow(dead_code)]
pub fn stops_from_locations(locations: &[monaco_locations::Location]) -> Vec<Stop> {
    locations
        .iter()
        .enumerate()
        .map(|(i, loc)| Stop::new(loc.name, i as u32, loc.lat, loc.lng))
        .collect()
}

/// Builds `count` waypoints on one segment, evenly spread between two
/// points with a small alternating perpendicular offset.
#[allow(dead_code)]
pub fn waypoints_between(
    start: (f64, f64),
    end: (f64, f64),
    count: usize,
    segment_index: usize,
) -> Vec<Waypoint> {
    (0..count)
        .map(|i| {
            let t = (i + 1) as f64 / (count + 1) as f64;
            let lat = start.0 + t * (end.0 - start.0);
            let lng = start.1 + t * (end.1 - start.1);
            let offset = if i % 2 == 0 { 0.0005 } else { -0.0005 };
            Waypoint::new(
                format!("wp-{}-{}", segment_index, i),
                lat + offset,
                lng,
                segment_index,
            )
        })
        .collect()
}
