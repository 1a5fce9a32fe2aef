//! Waypoint reduction under a coordinate-count ceiling.
//!
//! Two layers: a per-segment simplifier that keeps the most geometrically
//! significant points, and an allocator that splits a global coordinate
//! budget across segments in proportion to their waypoint counts.
//!
//! The simplifier is a single-pass cousin of Douglas-Peucker: every
//! interior point is ranked against the one first–last baseline instead
//! of recursively re-splitting on the highest-distance point. That
//! one-pass behavior is deliberate and load-bearing; downstream expects
//! exactly it.

use rayon::prelude::*;
use tracing::debug;

use crate::projection::project_onto_segment;
use crate::types::Waypoint;

/// Result of distributing the coordinate budget across segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Retained waypoints, indexed by segment, relative order preserved.
    pub by_segment: Vec<Vec<Waypoint>>,
    /// Whether any reduction occurred. Callers surface this to the user
    /// as an advisory, not an error.
    pub was_simplified: bool,
}

/// Reduces `waypoints` to at most `target` points, preserving the most
/// significant ones.
///
/// The first and last points anchor the segment and are always retained
/// when the target allows two or more points. Interior points are ranked
/// by perpendicular distance to the first–last baseline (planar, not
/// geodesic: a point colinear with its neighbors is least significant)
/// and the top `target - 2` survive, restored to input order.
///
/// The result always has exactly `min(waypoints.len(), target)` points,
/// including for targets of 0 or 1, so budget arithmetic upstream stays
/// exact.
pub fn simplify(waypoints: &[Waypoint], target: usize) -> Vec<Waypoint> {
    if waypoints.len() <= target {
        return waypoints.to_vec();
    }
    if target == 0 {
        return Vec::new();
    }
    if target == 1 {
        return vec![waypoints[0].clone()];
    }

    let first = &waypoints[0];
    let last = &waypoints[waypoints.len() - 1];

    // Rank interior points by distance to the first-last baseline,
    // descending. Equal distances keep input order.
    let mut ranked: Vec<(usize, f64)> = waypoints[1..waypoints.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, wp)| {
            let proj = project_onto_segment(wp.location(), first.location(), last.location());
            (i + 1, proj.distance)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut keep: Vec<usize> = ranked.iter().take(target - 2).map(|&(i, _)| i).collect();
    keep.push(0);
    keep.push(waypoints.len() - 1);
    keep.sort_unstable();

    keep.into_iter().map(|i| waypoints[i].clone()).collect()
}

/// Splits `max_coordinates` across segments and simplifies each to fit.
///
/// Stops are mandatory, so the budget available to waypoints is whatever
/// the ceiling leaves after the stop count; a ceiling at or below the
/// stop count degrades to stops-only. Each segment gets a floor share
/// proportional to its waypoint count, and the remainder is handed out
/// one unit at a time to segments in descending original-count order
/// (ties by segment index), skipping segments already kept whole. Fully
/// deterministic for identical inputs.
pub fn allocate(
    by_segment: Vec<Vec<Waypoint>>,
    stop_count: usize,
    max_coordinates: usize,
) -> Allocation {
    let total: usize = by_segment.iter().map(Vec::len).sum();

    if stop_count + total <= max_coordinates {
        return Allocation {
            by_segment,
            was_simplified: false,
        };
    }

    let available = max_coordinates.saturating_sub(stop_count);
    debug!(
        stop_count,
        total_waypoints = total,
        max_coordinates,
        available,
        "coordinate ceiling exceeded, reducing waypoints"
    );

    if available == 0 {
        return Allocation {
            by_segment: vec![Vec::new(); by_segment.len()],
            was_simplified: true,
        };
    }

    let counts: Vec<usize> = by_segment.iter().map(Vec::len).collect();
    let mut allocations: Vec<usize> = counts
        .iter()
        .map(|&count| available * count / total)
        .collect();

    // Hand out the rounding remainder, largest segments first.
    let mut remainder = available - allocations.iter().sum::<usize>();
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));

    while remainder > 0 {
        let mut progressed = false;
        for &i in &order {
            if remainder == 0 {
                break;
            }
            if allocations[i] < counts[i] {
                allocations[i] += 1;
                remainder -= 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    let by_segment: Vec<Vec<Waypoint>> = by_segment
        .into_par_iter()
        .zip(allocations.into_par_iter())
        .map(|(segment, allocation)| {
            if allocation >= segment.len() {
                segment
            } else if allocation > 0 {
                simplify(&segment, allocation)
            } else {
                Vec::new()
            }
        })
        .collect();

    Allocation {
        by_segment,
        was_simplified: true,
    }
}
