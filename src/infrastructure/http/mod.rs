pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, pages, synthesis::SynthesisController};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(synthesis_controller: Arc<SynthesisController>) -> Router {
    let synthesis_routes = Router::new()
        .route("/api/synthesize", post(SynthesisController::synthesize))
        .with_state(synthesis_controller);

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(synthesis_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    synthesis_controller: Arc<SynthesisController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(synthesis_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
