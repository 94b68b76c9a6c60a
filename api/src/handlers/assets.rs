use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{AssetResponse, PaginatedResponse, PaginationParams};
use crate::services::asset_service;

#[derive(Debug, Deserialize)]
pub struct FindAssetQuery {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ListAssetsQuery {
    pub search: Option<String>,
}

/// GET /assets/find?id= - Asset by identifier
pub async fn find_asset(
    State(state): State<AppState>,
    Query(params): Query<FindAssetQuery>,
) -> ApiResult<Json<AssetResponse>> {
    Ok(Json(asset_service::find_asset(&state, &params.id).await?))
}

/// GET /assets - Newest assets first, optionally filtered by name
pub async fn get_assets(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(params): Query<ListAssetsQuery>,
) -> ApiResult<Json<PaginatedResponse<Vec<AssetResponse>>>> {
    let response =
        asset_service::list_assets(&state, params.search.as_deref(), &pagination).await?;
    Ok(Json(response))
}
