//! Real Monaco locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Monaco is tiny, densely
//! mapped, and routable on foot, which makes it the cheapest realistic
//! dataset for walking-tour tests against OSRM.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Tour stops (landmarks, roughly west to east)
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Musee Oceanographique", 43.7307, 7.4255),
    Location::new("Cathedrale de Monaco", 43.7303, 7.4226),
    Location::new("Palais Princier", 43.7314, 7.4206),
    Location::new("Place d'Armes", 43.7329, 7.4202),
    Location::new("Port Hercule", 43.7352, 7.4259),
    Location::new("Casino de Monte-Carlo", 43.7392, 7.4277),
    Location::new("Jardin Japonais", 43.7418, 7.4305),
    Location::new("Grimaldi Forum", 43.7430, 7.4317),
];

// ============================================================================
// Street-level points along the harbor (waypoint material)
// ============================================================================

pub const HARBOR_PATH: &[Location] = &[
    Location::new("Quai Antoine 1er", 43.7336, 7.4240),
    Location::new("Quai des Etats-Unis", 43.7360, 7.4273),
    Location::new("Boulevard Albert 1er", 43.7345, 7.4232),
    Location::new("Route de la Piscine", 43.7367, 7.4283),
    Location::new("Avenue d'Ostende", 43.7378, 7.4270),
];
