use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    Json,
};
use futures_util::{SinkExt, StreamExt};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::sizing::{HealthStatus, InputBounds, SizingInputs, SizingResponse};
use crate::services::sizing;
use crate::shared_state::SharedState;

fn evaluate(inputs: SizingInputs, config: &Config) -> Result<SizingResponse, ApiError> {
    inputs.validate()?;
    let recommendation = sizing::size_system(&inputs, &config.assumptions);
    tracing::info!(
        peak_load_w = inputs.peak_load_w,
        autonomy_days = inputs.autonomy_days,
        panel_count = recommendation.panel_count,
        battery_capacity_kwh = recommendation.battery_capacity_kwh,
        "sizing evaluated"
    );
    Ok(SizingResponse {
        evaluation_id: uuid::Uuid::new_v4(),
        timestamp: chrono::Utc::now(),
        inputs,
        recommendation,
    })
}

/// POST /api/sizing
/// Evaluate a sizing request
///
/// Validates the supplied inputs against the documented bounds, then returns
/// the derived array and battery recommendation. Stateless: the same inputs
/// always produce the same recommendation.
#[utoipa::path(
    post,
    path = "/api/sizing",
    request_body = SizingInputs,
    responses(
        (status = 200, description = "Sizing recommendation", body = SizingResponse),
        (status = 400, description = "Input outside its documented bounds")
    )
)]
pub async fn evaluate_sizing(
    State(config): State<Config>,
    Json(inputs): Json<SizingInputs>,
) -> Result<Json<SizingResponse>, ApiError> {
    evaluate(inputs, &config).map(Json)
}

/// GET /api/sizing/defaults
/// Get the configured default inputs
///
/// Returns the initial values the sizing form starts from.
#[utoipa::path(
    get,
    path = "/api/sizing/defaults",
    responses(
        (status = 200, description = "Default sizing inputs", body = SizingInputs)
    )
)]
pub async fn get_defaults(State(config): State<Config>) -> impl IntoResponse {
    Json(config.defaults).into_response()
}

/// GET /api/sizing/bounds
/// Get the documented input bounds
///
/// Returns the inclusive min/max for every input field, so clients can build
/// widgets that clamp at the source.
#[utoipa::path(
    get,
    path = "/api/sizing/bounds",
    responses(
        (status = 200, description = "Inclusive bounds per input field", body = InputBounds)
    )
)]
pub async fn get_bounds() -> impl IntoResponse {
    Json(InputBounds::documented()).into_response()
}

/// GET /api/sizing/assumptions
/// Get the active engineering assumptions
///
/// Returns the derate factor, panel rating and depth of discharge behind
/// every recommendation.
#[utoipa::path(
    get,
    path = "/api/sizing/assumptions",
    responses(
        (status = 200, description = "Active engineering assumptions",
         body = crate::models::sizing::SizingAssumptions)
    )
)]
pub async fn get_assumptions(State(config): State<Config>) -> impl IntoResponse {
    Json(config.assumptions).into_response()
}

/// GET /api/health
/// Service health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health", body = HealthStatus)
    )
)]
pub async fn get_health(State(shared): State<SharedState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: shared.uptime_seconds(),
    })
    .into_response()
}

/// GET /api/sizing/live
/// Live evaluation channel (WebSocket)
///
/// Each text frame carries a `SizingInputs` JSON document; the reply frame
/// carries the matching `SizingResponse`, or an error object when the inputs
/// are malformed or outside the documented bounds. One evaluation per frame,
/// so an interactive form gets a recalculation per input change.
pub async fn sizing_live(ws: WebSocketUpgrade, State(config): State<Config>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_live_socket(socket, config))
}

async fn handle_live_socket(socket: WebSocket, config: Config) {
    let (mut sender, mut receiver) = socket.split();
    tracing::debug!("live sizing channel opened");

    while let Some(Ok(msg)) = receiver.next().await {
        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let reply = match serde_json::from_str::<SizingInputs>(text.as_str()) {
            Ok(inputs) => match evaluate(inputs, &config) {
                Ok(response) => serde_json::to_string(&response).unwrap_or_default(),
                Err(e) => serde_json::json!({
                    "error": e.error_type(),
                    "message": e.to_string(),
                })
                .to_string(),
            },
            Err(e) => serde_json::json!({
                "error": "MalformedInput",
                "message": e.to_string(),
            })
            .to_string(),
        };

        if sender.send(Message::Text(reply.into())).await.is_err() {
            break;
        }
    }

    tracing::debug!("live sizing channel closed");
}
