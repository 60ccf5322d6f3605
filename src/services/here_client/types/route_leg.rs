use serde::{Deserialize, Serialize};

use super::geo_point::GeoPoint;

/// One maneuver point of a computed route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Numeric part of the maneuver id (`M12` -> 12).
    pub index: u32,
    pub position: GeoPoint,
    /// Seconds, as reported by the routing service.
    pub travel_time: f64,
    /// Meters.
    pub length: f64,
}

/// The reduced `(position, travel time)` form handed back by
/// [`crate::services::here_client::here_service::HereService::get_route`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub position: GeoPoint,
    pub travel_time: f64,
}

impl From<&RouteLeg> for RouteStop {
    fn from(leg: &RouteLeg) -> Self {
        RouteStop {
            position: leg.position,
            travel_time: leg.travel_time,
        }
    }
}
