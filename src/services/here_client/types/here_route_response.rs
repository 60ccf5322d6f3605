#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct HereRouteResponsePosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Serialize)]
pub struct HereRouteResponseManeuver {
    /// Prefixed index such as `M3`.
    pub id: String,
    pub position: HereRouteResponsePosition,
    pub travelTime: f64,
    pub length: f64,
}

#[derive(Deserialize, Serialize)]
pub struct HereRouteResponseLeg {
    #[serde(default)]
    pub maneuver: Vec<HereRouteResponseManeuver>,
}

#[derive(Deserialize, Serialize)]
pub struct HereRouteResponseSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trafficTime: Option<f64>,
}

#[derive(Deserialize, Serialize)]
pub struct HereRouteResponseRoute {
    #[serde(default)]
    pub leg: Vec<HereRouteResponseLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<HereRouteResponseSummary>,
}

/// Body of a `calculateroute.json` call once the optional `response`
/// envelope has been removed. Absent arrays decode as empty so that they are
/// reported as not found.
#[derive(Deserialize, Serialize)]
pub struct HereRouteResponse {
    #[serde(default)]
    pub route: Vec<HereRouteResponseRoute>,
}
