use crate::api::{ApiError, FleetAppState};
use crate::fleet::FleetSummary;
use axum::{extract::State, response::Json, routing::get, Router};

/// Create fleet overview router
pub fn create_fleet_router(state: FleetAppState) -> Router {
    Router::new()
        .route("/api/fleet/summary", get(get_summary))
        .with_state(state)
}

/// GET /api/fleet/summary - Status/category counts, utilization, monthly totals
async fn get_summary(State(state): State<FleetAppState>) -> Result<Json<FleetSummary>, ApiError> {
    Ok(Json(state.fleet.summary().await?))
}
