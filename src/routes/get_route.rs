use crate::{
    services::here_client::{
        map_view::format_map_route_url,
        router::retrieve_eta,
        types::{
            geo_point::GeoPoint,
            vehicle_profile::{EngineGas, VehicleProfile, VehicleType},
        },
    },
    types::{
        app_state::AppState,
        waypoint_list::{parse_link_list, parse_waypoint_list},
    },
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetRoutePayload {
    /// `LAT,LON;LAT,LON;...`
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub waypoints: String,

    pub vehicle_type: VehicleType,

    pub engine_gas: EngineGas,

    #[validate(range(min = 0.0, message = "Must not be negative"))]
    pub engine_consumption: f64,

    /// `ID;ID;...`
    pub avoid_links: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteResponseDataStop {
    pub latitude: f64,
    pub longitude: f64,
    pub travel_time: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteResponseData {
    pub stops: Vec<GetRouteResponseDataStop>,
    pub eta_hours: Option<f64>,
    pub estimated_arrival: Option<String>,
    pub map_url: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetRouteResponse {
    pub data: GetRouteResponseData,
}

/// `now + hours` as RFC 3339, or `None` when the travel time does not fit a
/// timestamp.
fn estimate_arrival(now: DateTime<Utc>, hours: f64) -> Option<String> {
    let seconds = (hours * 3600.0).round();
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return None;
    }

    Duration::try_seconds(seconds as i64)
        .and_then(|travel| now.checked_add_signed(travel))
        .map(|arrival| arrival.to_rfc3339())
}

#[cfg_attr(test, debug_handler)]
pub async fn get_route(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetRoutePayload>,
) -> Result<Response, AppError> {
    let points = parse_waypoint_list(&payload.waypoints)
        .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, &format!("Invalid query: {}", e)))?;
    let vehicle = VehicleProfile {
        vehicle_type: payload.vehicle_type,
        engine_gas: payload.engine_gas,
        engine_consumption: payload.engine_consumption,
    };
    let avoid_links = parse_link_list(payload.avoid_links.as_deref());

    let (raw, stops) = state
        .here_service
        .get_route(&points, &vehicle, &avoid_links)
        .await
        .map_err(|e| {
            error!("Failed to fetch route: {}", e);
            AppError::from(e)
        })?;

    // Not every routing response carries a summary; the stops are still useful.
    let eta_hours = retrieve_eta(&raw).ok();
    let estimated_arrival = eta_hours.and_then(|hours| estimate_arrival(Utc::now(), hours));

    let positions = stops.iter().map(|s| s.position).collect::<Vec<GeoPoint>>();
    let map_url = format_map_route_url(state.here_service.config(), &positions)
        .map_err(AppError::from)?;

    Ok((
        StatusCode::OK,
        Json(GetRouteResponse {
            data: GetRouteResponseData {
                stops: stops
                    .into_iter()
                    .map(|s| GetRouteResponseDataStop {
                        latitude: s.position.latitude,
                        longitude: s.position.longitude,
                        travel_time: s.travel_time,
                    })
                    .collect(),
                eta_hours,
                estimated_arrival,
                map_url,
            },
        }),
    )
        .into_response())
}
