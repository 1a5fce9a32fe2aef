//! OSRM HTTP adapter for turn-by-turn directions.

use serde::Deserialize;
use tracing::warn;

use crate::directions::{Directions, DirectionsProvider, Profile};
use crate::polyline::Polyline;
use crate::types::LngLat;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

/// OSRM profile path segment for a travel profile.
fn profile_path(profile: Profile) -> &'static str {
    match profile {
        Profile::Walking => "foot",
        Profile::Driving => "car",
    }
}

impl DirectionsProvider for OsrmClient {
    fn directions(&self, coordinates: &[LngLat], profile: Profile) -> Option<Directions> {
        if coordinates.len() < 2 {
            return None;
        }

        let coords = coordinates
            .iter()
            .map(|(lng, lat)| format!("{:.6},{:.6}", lng, lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url,
            profile_path(profile),
            coords
        );

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>());

        let body = match response {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "OSRM directions request failed");
                return None;
            }
        };

        let route = body.routes.into_iter().next()?;

        Some(Directions {
            geometry: Polyline::from_lng_lat(&route.geometry.coordinates),
            distance_meters: route.distance,
            duration_seconds: route.duration,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<(f64, f64)>,
}
