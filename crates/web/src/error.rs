use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use storage::error::StoreError;

/// A failed route. Every failure collapses to a 500 whose body is the raw
/// error message; external pollers rely on this flat contract, so no JSON
/// envelope is ever produced.
pub struct ApiError(eyre::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError(err.into())
    }
}
