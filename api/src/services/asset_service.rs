// Asset service: asset lookups with their creating transaction

use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{AssetResponse, PaginatedResponse, PaginationParams};

/// Map transaction ids to hashes with a single query
pub(crate) async fn transaction_hashes(
    state: &AppState,
    ids: Vec<i32>,
) -> ApiResult<HashMap<i32, String>> {
    let transactions = state.repositories.transaction.find_by_ids(ids).await?;
    Ok(transactions.into_iter().map(|t| (t.id, t.hash)).collect())
}

pub async fn find_asset(state: &AppState, identifier: &str) -> ApiResult<AssetResponse> {
    let asset = state
        .repositories
        .asset
        .find_by_identifier(identifier)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Asset {} not found", identifier)))?;

    let mut hashes = transaction_hashes(state, vec![asset.created_transaction_id]).await?;
    let created_transaction_hash = hashes.remove(&asset.created_transaction_id);

    Ok(AssetResponse::from_model(asset, created_transaction_hash))
}

pub async fn list_assets(
    state: &AppState,
    search: Option<&str>,
    pagination: &PaginationParams,
) -> ApiResult<PaginatedResponse<Vec<AssetResponse>>> {
    let (assets, total) = state
        .repositories
        .asset
        .find_paginated(search, pagination)
        .await?;

    let mut ids: Vec<i32> = assets.iter().map(|a| a.created_transaction_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let hashes = transaction_hashes(state, ids).await?;

    let data = assets
        .into_iter()
        .map(|asset| {
            let hash = hashes.get(&asset.created_transaction_id).cloned();
            AssetResponse::from_model(asset, hash)
        })
        .collect();

    Ok(PaginatedResponse::new(data, total, pagination))
}
