use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{AssetDescriptionResponse, PaginatedResponse, PaginationParams};
use crate::services::asset_description_service;

#[derive(Debug, Deserialize)]
pub struct ListAssetDescriptionsQuery {
    /// Asset identifier
    pub asset: String,
}

/// GET /asset_descriptions?asset= - Mints and burns of one asset, newest first
pub async fn get_asset_descriptions(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(params): Query<ListAssetDescriptionsQuery>,
) -> ApiResult<Json<PaginatedResponse<Vec<AssetDescriptionResponse>>>> {
    let response =
        asset_description_service::list_for_asset(&state, &params.asset, &pagination).await?;
    Ok(Json(response))
}
