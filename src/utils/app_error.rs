use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::here_client::types::here_service_error::HereServiceError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<HereServiceError> for AppError {
    fn from(e: HereServiceError) -> Self {
        match e {
            HereServiceError::MalformedAddress { .. } | HereServiceError::NoWaypoints => {
                AppError::new(StatusCode::BAD_REQUEST, &e.to_string())
            }
            HereServiceError::NotFound(_) => AppError::new(StatusCode::NOT_FOUND, &e.to_string()),
            // Transport errors carry the request URL, and with it the credentials.
            HereServiceError::Request(_)
            | HereServiceError::Decode(_)
            | HereServiceError::MalformedManeuverId(_) => {
                AppError::new(StatusCode::BAD_GATEWAY, "Upstream HERE API request failed")
            }
            HereServiceError::Browser(_) | HereServiceError::Config(_) => {
                AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ResponseJson {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
