//! Route coordinate assembly (the single entry point).
//!
//! Turns ordered stops plus free-form waypoints into one coordinate list
//! bounded by the directions provider's per-request limit. Pure and
//! stateless: safe to call inline on an interactive path or to hand to a
//! background dispatcher unchanged.

use tracing::{debug, trace, warn};

use crate::haversine;
use crate::polyline::Polyline;
use crate::simplify;
use crate::types::{LngLat, Stop, Waypoint};

/// Default coordinate ceiling, matching common directions-API request
/// limits. Provider-defined, so always overridable via [`BuildOptions`].
pub const DEFAULT_MAX_COORDINATES: usize = 25;

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum number of coordinates the downstream provider accepts.
    pub max_coordinates: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_coordinates: DEFAULT_MAX_COORDINATES,
        }
    }
}

/// The assembled coordinate sequence for a directions request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCoordinates {
    /// Ordered (lng, lat) pairs, starting and ending with a stop.
    /// Empty when fewer than 2 stops were supplied.
    pub coordinates: Vec<LngLat>,
    /// True when waypoints were reduced to fit the ceiling; the caller
    /// should surface a fidelity advisory, not an error.
    pub was_simplified: bool,
}

/// Builds the coordinate sequence for a tour route.
///
/// Stops are sorted by `order` (stable; duplicate orders are logged and
/// kept in input order). Waypoints with non-finite or out-of-range
/// coordinates, or segment indices past the last segment, are dropped
/// with a warning. Per segment, waypoints are ordered along the prior
/// route geometry when one is supplied and slicing it succeeds, else by
/// straight-line distance from the segment's start stop. If the
/// interleaved list exceeds the ceiling, waypoints are reduced
/// proportionally per segment.
///
/// Never fails: every degenerate input degrades to a documented
/// fallback. Inputs are not mutated.
pub fn build(
    stops: &[Stop],
    waypoints: &[Waypoint],
    prior_geometry: Option<&Polyline>,
    options: &BuildOptions,
) -> RouteCoordinates {
    let sorted = sort_stops(stops);

    if sorted.len() < 2 {
        trace!(stop_count = sorted.len(), "fewer than 2 stops, no route");
        return RouteCoordinates {
            coordinates: Vec::new(),
            was_simplified: false,
        };
    }

    let segment_count = sorted.len() - 1;
    let mut by_segment = group_waypoints(waypoints, segment_count);

    for (index, segment) in by_segment.iter_mut().enumerate() {
        order_segment(segment, &sorted, index, prior_geometry);
    }

    let total: usize = by_segment.iter().map(Vec::len).sum();
    let mut was_simplified = false;

    if sorted.len() + total > options.max_coordinates {
        let allocation = simplify::allocate(by_segment, sorted.len(), options.max_coordinates);
        by_segment = allocation.by_segment;
        was_simplified = allocation.was_simplified;
    }

    let coordinates = interleave(&sorted, &by_segment);
    debug!(
        stops = sorted.len(),
        waypoints = total,
        coordinates = coordinates.len(),
        was_simplified,
        "route coordinates assembled"
    );

    RouteCoordinates {
        coordinates,
        was_simplified,
    }
}

/// Stable sort by `order`. Duplicate orders are an upstream data bug;
/// they are warned about and left in input order rather than rejected.
fn sort_stops(stops: &[Stop]) -> Vec<Stop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by_key(|stop| stop.order);

    for pair in sorted.windows(2) {
        if pair[0].order == pair[1].order {
            warn!(
                order = pair[0].order,
                first = %pair[0].id,
                second = %pair[1].id,
                "duplicate stop order, keeping input order"
            );
        }
    }

    sorted
}

/// Buckets valid waypoints by segment. Invalid ones are dropped here so
/// a single bad waypoint cannot abort the whole calculation.
fn group_waypoints(waypoints: &[Waypoint], segment_count: usize) -> Vec<Vec<Waypoint>> {
    let mut by_segment: Vec<Vec<Waypoint>> = vec![Vec::new(); segment_count];

    for waypoint in waypoints {
        if !waypoint.has_valid_location() {
            warn!(id = %waypoint.id, "dropping waypoint with invalid coordinates");
            continue;
        }
        if waypoint.segment_index >= segment_count {
            warn!(
                id = %waypoint.id,
                segment_index = waypoint.segment_index,
                segment_count,
                "dropping waypoint referencing nonexistent segment"
            );
            continue;
        }
        by_segment[waypoint.segment_index].push(waypoint.clone());
    }

    by_segment
}

/// Orders a segment's waypoints to match travel direction: along the
/// prior route geometry when a usable slice exists, else by straight-line
/// distance from the segment's start stop.
fn order_segment(
    segment: &mut [Waypoint],
    sorted_stops: &[Stop],
    index: usize,
    prior_geometry: Option<&Polyline>,
) {
    if segment.len() < 2 {
        return;
    }

    let start = sorted_stops[index].location();
    let end = sorted_stops[index + 1].location();

    if let Some(geometry) = prior_geometry {
        let slice = geometry.extract_between(start, end);
        if slice.len() >= 2 {
            segment.sort_by(|a, b| {
                slice
                    .distance_along(a.location())
                    .total_cmp(&slice.distance_along(b.location()))
            });
            return;
        }
        trace!(segment = index, "sub-polyline extraction failed, Euclidean fallback");
    }

    segment.sort_by(|a, b| {
        haversine::distance_meters(start, a.location())
            .total_cmp(&haversine::distance_meters(start, b.location()))
    });
}

/// Interleaves stops with their segments' waypoints, converting to the
/// lng-first boundary order.
fn interleave(sorted_stops: &[Stop], by_segment: &[Vec<Waypoint>]) -> Vec<LngLat> {
    let mut coordinates = Vec::new();

    for (index, stop) in sorted_stops.iter().enumerate() {
        coordinates.push((stop.lng, stop.lat));
        if let Some(segment) = by_segment.get(index) {
            coordinates.extend(segment.iter().map(|wp| (wp.lng, wp.lat)));
        }
    }

    coordinates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_than_two_stops_is_empty() {
        let stops = vec![Stop::new("only", 0, 48.85, 2.35)];
        let result = build(&stops, &[], None, &BuildOptions::default());
        assert!(result.coordinates.is_empty());
        assert!(!result.was_simplified);
    }

    #[test]
    fn test_stops_sorted_by_order() {
        let stops = vec![
            Stop::new("second", 5, 1.0, 1.0),
            Stop::new("first", 2, 0.0, 0.0),
        ];
        let result = build(&stops, &[], None, &BuildOptions::default());
        assert_eq!(result.coordinates, vec![(0.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_malformed_waypoints_filtered() {
        let stops = vec![Stop::new("a", 0, 0.0, 0.0), Stop::new("b", 1, 0.0, 2.0)];
        let waypoints = vec![
            Waypoint::new("nan", f64::NAN, 1.0, 0),
            Waypoint::new("dangling", 0.0, 1.0, 7),
            Waypoint::new("good", 0.0, 1.0, 0),
        ];
        let result = build(&stops, &waypoints, None, &BuildOptions::default());
        assert_eq!(result.coordinates.len(), 3);
        assert_eq!(result.coordinates[1], (1.0, 0.0));
    }
}
