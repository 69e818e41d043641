use std::net::SocketAddr;

use axum::{response::Html, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use solar_sizing_calc::api_docs::ApiDoc;
use solar_sizing_calc::config::Config;
use solar_sizing_calc::routes::sizing_routes::api_routes;
use solar_sizing_calc::shared_state::SharedState;

#[tokio::main]
async fn main() {
    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load configuration
    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to load config.json: {}", e);
            return;
        }
    };
    tracing::info!(
        port = config.server.port,
        system_loss_derate = config.assumptions.system_loss_derate,
        panel_rated_w = config.assumptions.panel_rated_w,
        battery_depth_of_discharge = config.assumptions.battery_depth_of_discharge,
        "Configuration loaded"
    );

    // 3. Shared state: config plus start instant; evaluations themselves
    //    are stateless
    let shared = SharedState::new(config.clone());

    // 4. Axum HTTP server: JSON API, Scalar docs, static sizing form
    let app = Router::new()
        .nest("/api", api_routes(shared))
        .route(
            "/scalar",
            get(|| async { Html(Scalar::new(ApiDoc::openapi()).to_html()) }),
        )
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);
    tracing::info!("Sizing form: http://{}/", addr);

    if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}
