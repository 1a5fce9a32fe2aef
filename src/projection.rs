//! Point-to-segment projection in planar degree space.
//!
//! Lat/lng pairs are treated as planar coordinates. The approximation is
//! acceptable because projections are only used over short segments, and
//! only to compare distances or pick a nearest segment, never as a
//! ground-truth length.

use crate::types::LatLng;

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Planar (degree-space) distance from the point to `point`.
    pub distance: f64,
    /// The projected point, clamped to the segment.
    pub point: LatLng,
    /// Interpolation parameter along the segment, clamped to [0, 1].
    pub t: f64,
}

/// Projects `point` onto the segment from `start` to `end`.
///
/// When the perpendicular foot falls outside the segment, the projection
/// snaps to the nearer endpoint. A degenerate segment (start == end)
/// yields the point-to-point distance with `t = 0`.
pub fn project_onto_segment(point: LatLng, start: LatLng, end: LatLng) -> Projection {
    let (px, py) = (point.0, point.1);
    let (ax, ay) = (start.0, start.1);
    let (bx, by) = (end.0, end.1);

    let seg_x = bx - ax;
    let seg_y = by - ay;
    let length_sq = seg_x * seg_x + seg_y * seg_y;

    let t = if length_sq > 0.0 {
        let dot = (px - ax) * seg_x + (py - ay) * seg_y;
        (dot / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let projected = (ax + t * seg_x, ay + t * seg_y);
    let dx = px - projected.0;
    let dy = py - projected.1;

    Projection {
        distance: (dx * dx + dy * dy).sqrt(),
        point: projected,
        t,
    }
}
