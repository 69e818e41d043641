use utoipa::OpenApi;

use crate::controllers::sizing_controller;
use crate::models::sizing;

#[derive(OpenApi)]
#[openapi(
    paths(
        sizing_controller::evaluate_sizing,
        sizing_controller::get_defaults,
        sizing_controller::get_bounds,
        sizing_controller::get_assumptions,
        sizing_controller::get_health
    ),
    components(
        schemas(
            sizing::SizingInputs,
            sizing::SizingAssumptions,
            sizing::SizingRecommendation,
            sizing::SizingResponse,
            sizing::InputBounds,
            sizing::FieldBounds,
            sizing::HealthStatus
        )
    ),
    tags(
        (name = "solar-sizing-calc", description = "Solar PV & Battery Sizing API")
    )
)]
pub struct ApiDoc;
