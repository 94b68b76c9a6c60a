// Handlers for block ingest and block lookups

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{BlockResponse, PaginatedResponse, PaginationParams, UpsertBlocksRequest};
use crate::services::block_service;

#[derive(Debug, Deserialize)]
pub struct FindBlockQuery {
    pub hash: Option<String>,
    pub sequence: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ListBlocksQuery {
    #[serde(default)]
    pub main_only: bool,
}

/// Handler for POST /blocks - Stores reported blocks and queues their transactions
pub async fn upsert_blocks(
    State(state): State<AppState>,
    Json(request): Json<UpsertBlocksRequest>,
) -> ApiResult<Json<Vec<BlockResponse>>> {
    let blocks = block_service::upsert_blocks(&state, &request).await?;
    Ok(Json(blocks))
}

/// Handler for GET /blocks/head
pub async fn get_head(State(state): State<AppState>) -> ApiResult<Json<BlockResponse>> {
    Ok(Json(block_service::get_head(&state).await?))
}

/// Handler for GET /blocks/find?hash=|sequence=
pub async fn find_block(
    State(state): State<AppState>,
    Query(params): Query<FindBlockQuery>,
) -> ApiResult<Json<BlockResponse>> {
    let block =
        block_service::find_block(&state, params.hash.as_deref(), params.sequence).await?;
    Ok(Json(block))
}

/// Handler for GET /blocks
pub async fn get_blocks(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(params): Query<ListBlocksQuery>,
) -> ApiResult<Json<PaginatedResponse<Vec<BlockResponse>>>> {
    let response = block_service::list_blocks(&state, params.main_only, &pagination).await?;
    Ok(Json(response))
}
