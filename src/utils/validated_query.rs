use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::app_error::AppError;

/// Query string extractor that runs `validator` rules before the handler sees
/// the payload. Both decode and validation failures become a 400.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request(req, state).await.map_err(|e| {
            let message = match e.source() {
                Some(source) => format!("Invalid query: {}", source),
                None => e.body_text(),
            };
            debug!("Rejected query: {}", message);
            AppError::new(StatusCode::BAD_REQUEST, &message)
        })?;

        data.validate().map_err(|e| {
            debug!("Query failed validation: {}", e);
            AppError::new(StatusCode::BAD_REQUEST, &format!("Invalid query: {}", e))
        })?;

        Ok(ValidatedQuery(data))
    }
}
