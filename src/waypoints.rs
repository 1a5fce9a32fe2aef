//! Waypoint collection bound to map gestures.
//!
//! A flat list keyed by opaque id; the computation core groups it by
//! segment on each build. Insertion order is preserved, which is what
//! makes repeated builds deterministic.

use serde::{Deserialize, Serialize};

use crate::types::Waypoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointSet {
    waypoints: Vec<Waypoint>,
}

impl WaypointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a waypoint. An existing waypoint with the same id is
    /// replaced in place, keeping its position in the list.
    pub fn add(&mut self, waypoint: Waypoint) {
        match self.waypoints.iter_mut().find(|wp| wp.id == waypoint.id) {
            Some(existing) => *existing = waypoint,
            None => self.waypoints.push(waypoint),
        }
    }

    /// Moves a waypoint to a new coordinate. Returns false when the id
    /// is unknown.
    pub fn update_position(&mut self, id: &str, lat: f64, lng: f64) -> bool {
        match self.waypoints.iter_mut().find(|wp| wp.id == id) {
            Some(waypoint) => {
                waypoint.lat = lat;
                waypoint.lng = lng;
                true
            }
            None => false,
        }
    }

    /// Removes a waypoint by id. Returns false when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|wp| wp.id != id);
        self.waypoints.len() != before
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
