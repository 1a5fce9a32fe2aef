//! Polyline representation for route geometries.
//!
//! Stores decoded (lat, lng) points for internal processing; conversion
//! to and from the lng-first pairs used by directions providers happens
//! at API boundaries, not inside the computation core.
//!
//! Beyond plain storage, a polyline knows how to slice itself between
//! two endpoints and how far along itself a nearby point lies. Both are
//! heuristics over a previously computed route and degrade to "no
//! answer" rather than failing.

use serde::{Deserialize, Serialize};

use crate::haversine;
use crate::projection::project_onto_segment;
use crate::types::{LatLng, LngLat};

/// A route geometry as a decoded coordinate sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<LatLng>,
}

impl Polyline {
    /// Creates a polyline from (lat, lng) points.
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Creates a polyline from boundary-order (lng, lat) pairs, as
    /// returned by directions providers.
    pub fn from_lng_lat(pairs: &[LngLat]) -> Self {
        Self {
            points: pairs.iter().map(|&(lng, lat)| (lat, lng)).collect(),
        }
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn into_points(self) -> Vec<LatLng> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the vertex nearest to `point`, by great-circle distance.
    /// Brute-force scan; polylines here are a few hundred vertices at
    /// most. `None` on an empty polyline.
    pub fn nearest_vertex(&self, point: LatLng) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &vertex) in self.points.iter().enumerate() {
            let dist = haversine::distance_meters(point, vertex);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Extracts the inclusive vertex slice lying between the vertices
    /// nearest to `start` and `end`, swapping if they come out reversed.
    ///
    /// A result with fewer than 2 points means extraction failed and the
    /// caller should fall back to Euclidean ordering.
    pub fn extract_between(&self, start: LatLng, end: LatLng) -> Polyline {
        if self.points.len() < 2 {
            return Polyline::new(Vec::new());
        }

        let start_idx = match self.nearest_vertex(start) {
            Some(i) => i,
            None => return Polyline::new(Vec::new()),
        };
        let end_idx = match self.nearest_vertex(end) {
            Some(i) => i,
            None => return Polyline::new(Vec::new()),
        };

        let (lo, hi) = if start_idx <= end_idx {
            (start_idx, end_idx)
        } else {
            (end_idx, start_idx)
        };

        Polyline::new(self.points[lo..=hi].to_vec())
    }

    /// Cumulative distance in meters from the polyline start to the
    /// nearest projection of `point` onto any of its segments.
    ///
    /// Walks every consecutive vertex pair, projecting `point` onto each
    /// (planar approximation, fine for short segments) while tracking
    /// traversed length. Ties go to the first-encountered minimum, which
    /// keeps the resulting 1-D ordering key stable. Returns 0 for a
    /// polyline with fewer than 2 points.
    pub fn distance_along(&self, point: LatLng) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }

        let mut traversed = 0.0;
        let mut best_distance = f64::INFINITY;
        let mut best_along = 0.0;

        for pair in self.points.windows(2) {
            let (seg_start, seg_end) = (pair[0], pair[1]);
            let seg_length = haversine::distance_meters(seg_start, seg_end);
            let proj = project_onto_segment(point, seg_start, seg_end);

            if proj.distance < best_distance {
                best_distance = proj.distance;
                best_along = traversed + proj.t * seg_length;
            }

            traversed += seg_length;
        }

        best_along
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line() -> Polyline {
        // Due east along the equator, one vertex per 0.01 degrees.
        Polyline::new((0..=10).map(|i| (0.0, i as f64 * 0.01)).collect())
    }

    #[test]
    fn test_new_and_points() {
        let points = vec![(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.points(), &points[..]);
    }

    #[test]
    fn test_from_lng_lat_swaps_order() {
        let polyline = Polyline::from_lng_lat(&[(2.35, 48.85), (2.29, 48.86)]);
        assert_eq!(polyline.points(), &[(48.85, 2.35), (48.86, 2.29)]);
    }

    #[test]
    fn test_nearest_vertex() {
        let polyline = straight_line();
        assert_eq!(polyline.nearest_vertex((0.001, 0.031)), Some(3));
        assert_eq!(polyline.nearest_vertex((0.0, -5.0)), Some(0));
    }

    #[test]
    fn test_nearest_vertex_empty() {
        let polyline = Polyline::new(vec![]);
        assert_eq!(polyline.nearest_vertex((0.0, 0.0)), None);
    }

    #[test]
    fn test_extract_between() {
        let polyline = straight_line();
        let slice = polyline.extract_between((0.0, 0.02), (0.0, 0.06));
        assert_eq!(slice.len(), 5);
        assert_eq!(slice.points()[0], (0.0, 0.02));
        assert_eq!(slice.points()[4], (0.0, 0.06));
    }

    #[test]
    fn test_extract_between_reversed_endpoints() {
        let polyline = straight_line();
        let slice = polyline.extract_between((0.0, 0.06), (0.0, 0.02));
        assert_eq!(slice.len(), 5);
        assert_eq!(slice.points()[0], (0.0, 0.02));
    }

    #[test]
    fn test_extract_between_coincident_endpoints_is_degenerate() {
        let polyline = straight_line();
        let slice = polyline.extract_between((0.0, 0.03), (0.0, 0.03));
        assert!(slice.len() < 2);
    }

    #[test]
    fn test_extract_between_short_polyline() {
        let polyline = Polyline::new(vec![(0.0, 0.0)]);
        assert!(polyline.extract_between((0.0, 0.0), (1.0, 1.0)).is_empty());
    }

    #[test]
    fn test_distance_along_orders_points() {
        let polyline = straight_line();
        let early = polyline.distance_along((0.001, 0.015));
        let late = polyline.distance_along((0.001, 0.085));
        assert!(early < late);
    }

    #[test]
    fn test_distance_along_at_start_is_zero() {
        let polyline = straight_line();
        let along = polyline.distance_along((0.0, 0.0));
        assert!(along < 1e-6);
    }

    #[test]
    fn test_distance_along_short_polyline_is_zero() {
        let polyline = Polyline::new(vec![(0.0, 0.0)]);
        assert_eq!(polyline.distance_along((1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_distance_along_roughly_matches_arc_length() {
        let polyline = straight_line();
        // Halfway along a 0.1-degree equatorial line, ~5,560 m in.
        let along = polyline.distance_along((0.0, 0.05));
        assert!((along - 5_560.0).abs() < 100.0, "got {}", along);
    }
}
