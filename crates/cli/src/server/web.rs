use axum::Router;
use rrda_api::{create_api_routes, AppState};
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    info!(
        bind_address = %listener.local_addr()?,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    create_api_routes(state).layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
