use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    response::Response,
};
use rrda_domain::DomainError;
use tracing::{debug, instrument};

use super::CallbackParams;
use crate::{dto::MessageResponse, errors::ApiError, response::render, state::AppState};

/// `GET /{server}/{domain}/{querytype}`
///
/// A path that cannot be percent-decoded into UTF-8 counts as unparsable.
#[instrument(skip_all)]
pub async fn lookup(
    State(state): State<AppState>,
    path: Result<Path<(String, String, String)>, PathRejection>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Path((server, domain, query_type)) = path.map_err(|_| DomainError::UnparsableInput)?;
    let callback = params.ok().and_then(|Query(params)| params.callback);

    debug!(server = %server, domain = %domain, query_type = %query_type, "Forward lookup");

    let message = state.lookup.lookup(&server, &domain, &query_type).await?;

    Ok(render(
        &MessageResponse::from_message(&message),
        callback.as_deref(),
    ))
}
