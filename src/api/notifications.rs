use crate::api::{ApiError, FleetAppState};
use crate::fleet::NotificationSummary;
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

/// Create notification API router
pub fn create_notification_router(state: FleetAppState) -> Router {
    Router::new()
        .route(
            "/api/notifications",
            get(list_notifications).delete(clear_notifications),
        )
        .route("/api/notifications/read", post(mark_all_read))
        .with_state(state)
}

/// GET /api/notifications - Log (most recent first) and unread count
async fn list_notifications(
    State(state): State<FleetAppState>,
) -> Result<Json<NotificationSummary>, ApiError> {
    Ok(Json(state.fleet.notifications().await?))
}

/// POST /api/notifications/read - Mark every entry read
async fn mark_all_read(
    State(state): State<FleetAppState>,
) -> Result<Json<NotificationSummary>, ApiError> {
    Ok(Json(state.fleet.mark_all_read().await?))
}

/// DELETE /api/notifications - Empty the log
async fn clear_notifications(
    State(state): State<FleetAppState>,
) -> Result<Json<NotificationSummary>, ApiError> {
    Ok(Json(state.fleet.clear_notifications().await?))
}
