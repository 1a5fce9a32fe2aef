//! route-composer core
//!
//! Route geometry computation for multi-stop tours: ordered stops plus
//! user-placed waypoints in, a bounded ordered coordinate list for a
//! directions provider out.

pub mod types;
pub mod haversine;
pub mod projection;
pub mod polyline;
pub mod simplify;
pub mod builder;
pub mod waypoints;
pub mod dispatch;
pub mod directions;
pub mod osrm;
pub mod osrm_data;
