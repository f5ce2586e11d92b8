use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// The static `x` segment takes precedence over `{domain}`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/{server}/x/{ip}", get(handlers::reverse_lookup))
        .route("/{server}/{domain}/{querytype}", get(handlers::lookup))
        .with_state(state)
}
