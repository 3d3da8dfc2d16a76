use crate::api::FleetAppState;
use crate::subscription::manager::send_json;
use crate::subscription::{AssetUpdateMessage, ConnectionManager};
use axum::{
    extract::{
        ws::{WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use tracing::{info, warn};

/// GET /api/ws - WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<FleetAppState>) -> Response {
    info!("WebSocket upgrade request received");
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Create WebSocket router
pub fn create_ws_router(state: FleetAppState) -> Router {
    Router::new()
        .route("/api/ws", get(ws_handler))
        .with_state(state)
}

/// Handle WebSocket connection
async fn handle_socket(mut socket: WebSocket, state: FleetAppState) {
    // Subscribe before reading the snapshot so no tick falls in between
    let event_rx = state.fleet.subscribe();

    // Initial snapshot so the client can draw markers immediately
    let snapshot = state
        .fleet
        .snapshot()
        .await
        .map(|snapshot| AssetUpdateMessage::new(snapshot.tick, snapshot.assets));

    match snapshot {
        Ok(msg) => {
            if let Err(e) = send_json(&mut socket, &msg).await {
                warn!(error = %e, "Failed to send initial snapshot");
                return;
            }
        }
        Err(e) => {
            warn!(error = %e, "Fleet service unavailable, closing WebSocket");
            return;
        }
    }

    ConnectionManager::new().handle(socket, event_rx).await;
}
