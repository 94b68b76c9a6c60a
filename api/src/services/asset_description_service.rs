// Asset description service: mint and burn history of an asset

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{AssetDescriptionResponse, PaginatedResponse, PaginationParams};
use crate::services::asset_service::transaction_hashes;

pub async fn list_for_asset(
    state: &AppState,
    identifier: &str,
    pagination: &PaginationParams,
) -> ApiResult<PaginatedResponse<Vec<AssetDescriptionResponse>>> {
    let asset = state
        .repositories
        .asset
        .find_by_identifier(identifier)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Asset {} not found", identifier)))?;

    let (descriptions, total) = state
        .repositories
        .asset_description
        .find_by_asset_paginated(asset.id, pagination)
        .await?;

    let mut ids: Vec<i32> = descriptions.iter().map(|d| d.transaction_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let hashes = transaction_hashes(state, ids).await?;

    let data = descriptions
        .into_iter()
        .map(|description| {
            let hash = hashes.get(&description.transaction_id).cloned();
            AssetDescriptionResponse::from_model(description, hash)
        })
        .collect();

    Ok(PaginatedResponse::new(data, total, pagination))
}
