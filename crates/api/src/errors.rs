use crate::dto::ErrorBody;
use crate::response::json_response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rrda_domain::DomainError;
use tracing::{debug, warn};

/// Error response: compact `{"code":..,"message":..}` plus a newline, never
/// wrapped in a callback.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            DomainError::ServerUnreachable(detail) => {
                warn!(detail = %detail, "DNS server could not be reached");
            }
            err => debug!(code = err.code(), error = %err, "Lookup failed"),
        }

        let mut body = serde_json::to_vec(&ErrorBody::from_error(&self.0)).unwrap_or_default();
        body.push(b'\n');

        json_response(self.status(), body)
    }
}
