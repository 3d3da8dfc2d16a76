// HTTP and WebSocket APIs

pub mod assets;
mod error;
pub mod fleet;
pub mod notifications;
pub mod simulation;
pub mod websocket;

pub use assets::create_asset_router;
pub use error::ApiError;
pub use fleet::create_fleet_router;
pub use notifications::create_notification_router;
pub use simulation::create_simulation_router;
pub use websocket::{create_ws_router, ws_handler};

use crate::fleet::FleetHandle;
use axum::Router;
use tower_http::cors::CorsLayer;

/// Shared application state for all routers
#[derive(Clone)]
pub struct FleetAppState {
    pub fleet: FleetHandle,
}

/// Full API: assets, fleet summary, notifications, simulation control and WebSocket
pub fn create_app(fleet: FleetHandle) -> Router {
    let state = FleetAppState { fleet };

    Router::new()
        .merge(create_asset_router(state.clone()))
        .merge(create_fleet_router(state.clone()))
        .merge(create_notification_router(state.clone()))
        .merge(create_simulation_router(state.clone()))
        .merge(create_ws_router(state))
        .layer(CorsLayer::permissive())
}
