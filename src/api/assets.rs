use crate::api::{ApiError, FleetAppState};
use crate::asset::{Asset, AssetCategory, AssetStatus};
use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

/// Query parameters for asset listing
#[derive(Deserialize)]
pub struct AssetQueryParams {
    /// Filter by status (e.g., ?status=moving)
    pub status: Option<String>,
    /// Filter by category (e.g., ?category=shuttle or ?category=heavy-transport)
    pub category: Option<String>,
}

/// Create asset API router
pub fn create_asset_router(state: FleetAppState) -> Router {
    Router::new()
        .route("/api/assets", get(list_assets))
        .route("/api/assets/:id", get(get_asset).put(update_asset))
        .with_state(state)
}

/// GET /api/assets - Current asset collection
///
/// Query parameters:
/// - `status`: only assets in this status (case-insensitive)
/// - `category`: only assets of this category (case-insensitive)
async fn list_assets(
    State(state): State<FleetAppState>,
    Query(params): Query<AssetQueryParams>,
) -> Result<Json<Vec<Asset>>, ApiError> {
    let status = match params.status.as_deref() {
        Some(s) => Some(
            AssetStatus::parse(s)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown status '{}'", s)))?,
        ),
        None => None,
    };
    let category = match params.category.as_deref() {
        Some(c) => Some(
            AssetCategory::parse(c)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown category '{}'", c)))?,
        ),
        None => None,
    };

    let assets = state
        .fleet
        .assets()
        .await?
        .into_iter()
        .filter(|asset| status.map_or(true, |s| asset.status == s))
        .filter(|asset| category.map_or(true, |c| asset.category == c))
        .collect();

    Ok(Json(assets))
}

/// GET /api/assets/:id - Get specific asset
async fn get_asset(
    State(state): State<FleetAppState>,
    Path(id): Path<String>,
) -> Result<Json<Asset>, ApiError> {
    let asset = state
        .fleet
        .asset(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("asset '{}' not found", id)))?;

    Ok(Json(asset))
}

/// PUT /api/assets/:id - Replace an asset (operator edit)
async fn update_asset(
    State(state): State<FleetAppState>,
    Path(id): Path<String>,
    Json(asset): Json<Asset>,
) -> Result<Json<Asset>, ApiError> {
    let updated = state.fleet.apply_edit(&id, asset).await?;
    Ok(Json(updated))
}
