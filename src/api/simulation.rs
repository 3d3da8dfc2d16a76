use crate::api::{ApiError, FleetAppState};
use crate::fleet::SimulationStatus;
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::info;

/// Body for PUT /api/simulation
#[derive(Deserialize)]
pub struct SimulationUpdate {
    pub running: bool,
}

/// Create simulation control router
pub fn create_simulation_router(state: FleetAppState) -> Router {
    Router::new()
        .route("/api/simulation", get(get_simulation).put(put_simulation))
        .route("/api/simulation/step", post(step_simulation))
        .with_state(state)
}

/// GET /api/simulation - Running flag and tick counter
async fn get_simulation(
    State(state): State<FleetAppState>,
) -> Result<Json<SimulationStatus>, ApiError> {
    Ok(Json(state.fleet.simulation().await?))
}

/// PUT /api/simulation - Start or stop the tick timer
async fn put_simulation(
    State(state): State<FleetAppState>,
    Json(update): Json<SimulationUpdate>,
) -> Result<Json<SimulationStatus>, ApiError> {
    info!(running = update.running, "Simulation toggle requested");
    Ok(Json(state.fleet.set_running(update.running).await?))
}

/// POST /api/simulation/step - Advance a single tick now
async fn step_simulation(
    State(state): State<FleetAppState>,
) -> Result<Json<SimulationStatus>, ApiError> {
    Ok(Json(state.fleet.step().await?))
}
