// Transaction service: lookups with their asset descriptions

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    AssetDescriptionResponse, PaginatedResponse, PaginationParams, TransactionResponse,
};

/// Single transaction with the mints and burns currently recorded for it
pub async fn find_transaction(state: &AppState, hash: &str) -> ApiResult<TransactionResponse> {
    let transaction = state
        .repositories
        .transaction
        .find_by_hash(hash)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Transaction {} not found", hash)))?;

    let descriptions = state
        .repositories
        .asset_description
        .find_by_transaction(transaction.id)
        .await?;

    let asset_descriptions = descriptions
        .into_iter()
        .map(|d| AssetDescriptionResponse::from_model(d, Some(transaction.hash.clone())))
        .collect();

    let mut response = TransactionResponse::from(transaction);
    response.asset_descriptions = Some(asset_descriptions);
    Ok(response)
}

/// Transactions of one block in block order, or every transaction newest first
pub async fn list_transactions(
    state: &AppState,
    block_hash: Option<&str>,
    pagination: &PaginationParams,
) -> ApiResult<PaginatedResponse<Vec<TransactionResponse>>> {
    let Some(block_hash) = block_hash.filter(|h| !h.is_empty()) else {
        let (transactions, total) = state
            .repositories
            .transaction
            .find_paginated(pagination)
            .await?;
        let data = transactions.into_iter().map(TransactionResponse::from).collect();
        return Ok(PaginatedResponse::new(data, total, pagination));
    };

    let block = state
        .repositories
        .block
        .find_by_hash(block_hash)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Block {} not found", block_hash)))?;

    let transactions = state.repositories.transaction.find_by_block(block.id).await?;
    let total = transactions.len() as u64;

    let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(pagination.limit).unwrap_or(usize::MAX);
    let data = transactions
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(TransactionResponse::from)
        .collect();

    Ok(PaginatedResponse::new(data, total, pagination))
}
