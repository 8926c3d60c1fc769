pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::GatewayClient, pipeline::Pipeline};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the application router. The permissive CORS layer mirrors the
/// dashboard frontend's expectations (any origin, any headers) and answers
/// OPTIONS preflight requests with an empty body.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-schedule", post(handlers::generate_schedule))
        .route("/generate-quiz", post(handlers::generate_quiz))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = GatewayClient::new(config.llm.clone())?;
    let pipeline = Pipeline::new(Arc::new(client));

    let app = router(AppState {
        pipeline: Arc::new(pipeline),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
