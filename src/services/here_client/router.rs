use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{
    here_service::{HereService, HereServiceConfig},
    types::{
        geo_point::{format_query_float, GeoPoint},
        here_route_response::{HereRouteResponse, HereRouteResponseSummary},
        here_service_error::HereServiceError,
        route_leg::{RouteLeg, RouteStop},
        vehicle_profile::VehicleProfile,
    },
};

/// `waypoint0=geo!LAT,LON&waypoint1=geo!LAT,LON...`, shared with the map
/// routing image endpoint.
pub(crate) fn format_waypoints(points: &[GeoPoint]) -> Result<String, HereServiceError> {
    if points.is_empty() {
        return Err(HereServiceError::NoWaypoints);
    }

    Ok(points
        .iter()
        .enumerate()
        .map(|(i, point)| format!("waypoint{}=geo!{}", i, point))
        .collect::<Vec<String>>()
        .join("&"))
}

/// Builds a `calculateroute.json` request. Parameters are always emitted in the
/// order waypoints, mode, vehicletype, avoidlinks.
pub fn format_route_request(
    config: &HereServiceConfig,
    points: &[GeoPoint],
    vehicle: &VehicleProfile,
    avoid_links: &[String],
) -> Result<String, HereServiceError> {
    let mut url = format!(
        "{}&{}&mode=fastest;{};traffic:enabled&vehicletype={},{}",
        config.authenticated_url(&config.routing_url),
        format_waypoints(points)?,
        vehicle.vehicle_type,
        vehicle.engine_gas,
        format_query_float(vehicle.engine_consumption)
    );

    if !avoid_links.is_empty() {
        url.push_str("&avoidlinks=");
        url.push_str(&avoid_links.join(";"));
    }

    Ok(url)
}

/// Strips the optional `response` envelope.
pub fn unwrap_route_response(mut body: Value) -> Value {
    match body.get_mut("response") {
        Some(inner) => inner.take(),
        None => body,
    }
}

fn parse_maneuver_index(id: &str) -> Result<u32, HereServiceError> {
    let mut chars = id.chars();
    chars.next();

    chars
        .as_str()
        .parse()
        .map_err(|_| HereServiceError::MalformedManeuverId(id.to_string()))
}

/// Collects every maneuver of the first route, ordered by the numeric part of
/// its id. When two maneuvers share an id the last one wins. A route without
/// any maneuver is not found.
pub fn get_route_legs(response: &HereRouteResponse) -> Result<Vec<RouteLeg>, HereServiceError> {
    let route = response
        .route
        .first()
        .ok_or_else(|| HereServiceError::NotFound("no route in response".to_string()))?;

    if route.leg.is_empty() {
        return Err(HereServiceError::NotFound("route has no legs".to_string()));
    }

    let mut legs = BTreeMap::new();
    for maneuver in route.leg.iter().flat_map(|leg| &leg.maneuver) {
        let index = parse_maneuver_index(&maneuver.id)?;
        legs.insert(
            index,
            RouteLeg {
                index,
                position: GeoPoint::new(maneuver.position.latitude, maneuver.position.longitude),
                travel_time: maneuver.travelTime,
                length: maneuver.length,
            },
        );
    }

    if legs.is_empty() {
        return Err(HereServiceError::NotFound("route has no maneuvers".to_string()));
    }

    Ok(legs.into_values().collect())
}

/// Traffic-aware travel time of the first route, in hours.
pub fn retrieve_eta(response: &Value) -> Result<f64, HereServiceError> {
    let summary = response
        .get("route")
        .and_then(|routes| routes.get(0))
        .and_then(|route| route.get("summary"))
        .ok_or_else(|| HereServiceError::NotFound("no route summary in response".to_string()))?;

    let traffic_time = HereRouteResponseSummary::deserialize(summary)?
        .trafficTime
        .ok_or_else(|| HereServiceError::NotFound("no traffic time in route summary".to_string()))?;

    Ok(traffic_time / 3600.0)
}

impl HereService {
    /// Computes a route through `points` and returns the unwrapped raw body
    /// together with the maneuver positions and travel times.
    pub async fn get_route(
        &self,
        points: &[GeoPoint],
        vehicle: &VehicleProfile,
        avoid_links: &[String],
    ) -> Result<(Value, Vec<RouteStop>), HereServiceError> {
        let url = format_route_request(self.config(), points, vehicle, avoid_links)?;
        info!(
            "Requesting {} route through {} waypoints",
            vehicle.vehicle_type,
            points.len()
        );

        let body = unwrap_route_response(self.run_request::<Value>(&url).await?);
        let response = HereRouteResponse::deserialize(&body)?;
        let legs = get_route_legs(&response)?;

        info!("Route has {} maneuvers", legs.len());

        Ok((body, legs.iter().map(RouteStop::from).collect()))
    }
}
