use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    response::Response,
};
use rrda_domain::DomainError;
use tracing::{debug, instrument};

use super::CallbackParams;
use crate::{dto::MessageResponse, errors::ApiError, response::render, state::AppState};

/// `GET /{server}/x/{ip}`
#[instrument(skip_all)]
pub async fn reverse_lookup(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Path((server, ip)) = path.map_err(|_| DomainError::InvalidIpAddress)?;
    let callback = params.ok().and_then(|Query(params)| params.callback);

    debug!(server = %server, ip = %ip, "Reverse lookup");

    let message = state.lookup.reverse_lookup(&server, &ip).await?;

    Ok(render(
        &MessageResponse::from_message(&message),
        callback.as_deref(),
    ))
}
