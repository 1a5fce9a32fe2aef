//! Directions-provider seam.
//!
//! The computation core only produces the coordinate list; fetching
//! turn-by-turn directions is an external collaborator behind this
//! trait. The per-request coordinate limit belongs to the provider,
//! which is why [`crate::builder::BuildOptions`] keeps it configurable.

use crate::polyline::Polyline;
use crate::types::LngLat;

/// Travel profile for a directions request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Walking,
    Driving,
}

/// A computed turn-by-turn route.
#[derive(Debug, Clone, PartialEq)]
pub struct Directions {
    pub geometry: Polyline,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Fetches directions for an ordered coordinate sequence.
///
/// `coordinates` are (lng, lat) pairs as produced by
/// [`crate::builder::build`]. `None` means the provider could not route
/// the request; callers fall back to drawing straight lines.
pub trait DirectionsProvider {
    fn directions(&self, coordinates: &[LngLat], profile: Profile) -> Option<Directions>;
}
