use crate::{
    services::here_client::map_view::format_map_point_url,
    types::app_state::AppState,
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
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetGeocodePayload {
    /// `house number, street, postal code, city, country`
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub address: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetGeocodeResponseData {
    pub latitude: f64,
    pub longitude: f64,
    pub map_url: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetGeocodeResponse {
    pub data: GetGeocodeResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_geocode(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetGeocodePayload>,
) -> Result<Response, AppError> {
    let point = state
        .here_service
        .get_gps_from_address(&payload.address)
        .await
        .map_err(|e| {
            error!("Failed to geocode address: {}", e);
            AppError::from(e)
        })?;

    Ok((
        StatusCode::OK,
        Json(GetGeocodeResponse {
            data: GetGeocodeResponseData {
                latitude: point.latitude,
                longitude: point.longitude,
                map_url: format_map_point_url(state.here_service.config(), &point),
            },
        }),
    )
        .into_response())
}
