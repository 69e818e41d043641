use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::sizing_controller::{
    evaluate_sizing, get_assumptions, get_bounds, get_defaults, get_health, sizing_live,
};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
/// Handlers extract `State<SharedState>` and/or `State<Config>` via
/// `FromRef<SharedState>`; a single `.with_state(shared)` covers both.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/sizing",             post(evaluate_sizing))
        .route("/sizing/live",        get(sizing_live))
        .route("/sizing/defaults",    get(get_defaults))
        .route("/sizing/bounds",      get(get_bounds))
        .route("/sizing/assumptions", get(get_assumptions))
        .route("/health",             get(get_health))
        .with_state(shared)
}
