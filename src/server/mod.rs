pub mod handlers;
pub mod templates;

use crate::{Result, config::Config, pipeline::HttpPipeline};
use axum::{Router, routing::get};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use templates::Templates;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/predictdata",
            get(handlers::predict_form).post(handlers::predict_datapoint),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize pipeline client
    let pipeline = HttpPipeline::new(config.pipeline.clone())?;
    info!("Using prediction pipeline at {}", pipeline.endpoint());

    let app_state = AppState {
        pipeline: Arc::new(pipeline),
        templates: Arc::new(Templates::new()?),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
