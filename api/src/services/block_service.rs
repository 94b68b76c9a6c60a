// Block service: ingest of reported blocks and block lookups

use sea_orm::TransactionTrait;

use crate::db::repositories::block_repository::{self, NewBlock};
use crate::db::repositories::transaction_repository;
use crate::db::DbError;
use crate::entity::blocks;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{
    BlockResponse, PaginatedResponse, PaginationParams, TransactionResponse, UpsertBlockDto,
    UpsertBlocksRequest,
};
use crate::queue::AssetLoadJob;

/// Persist every block of an upload, then queue its transactions for the asset loader.
///
/// Each block is written in its own database transaction. Jobs for a block are queued
/// only after that block committed, so the loader always finds the transaction rows.
pub async fn upsert_blocks(
    state: &AppState,
    request: &UpsertBlocksRequest,
) -> ApiResult<Vec<BlockResponse>> {
    request.validate().map_err(ApiError::InvalidRequest)?;

    // Convert everything up front so a bad block rejects the upload before any write
    let prepared = request
        .blocks
        .iter()
        .map(|block| block.to_new_block().map(|new_block| (block, new_block)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(ApiError::InvalidRequest)?;

    let mut responses = Vec::with_capacity(prepared.len());
    let mut queued = 0usize;

    for (block, new_block) in prepared {
        let stored = upsert_block(state, block, &new_block).await?;

        for transaction in &block.transactions {
            state
                .asset_loader_queue
                .enqueue(AssetLoadJob::new(stored.main, transaction.clone()))?;
            queued += 1;
        }

        responses.push(BlockResponse::from(stored));
    }

    tracing::info!(
        "Upserted {} blocks, queued {} asset loader jobs",
        responses.len(),
        queued
    );

    Ok(responses)
}

async fn upsert_block(
    state: &AppState,
    block: &UpsertBlockDto,
    new_block: &NewBlock,
) -> ApiResult<blocks::Model> {
    let txn = state
        .repositories
        .conn
        .begin()
        .await
        .map_err(DbError::from)?;

    let stored = block_repository::upsert(&txn, new_block).await?;

    for (index, transaction) in block.transactions.iter().enumerate() {
        let stored_transaction =
            transaction_repository::upsert(&txn, &transaction.to_new_transaction()).await?;
        block_repository::link_transaction(&txn, stored.id, stored_transaction.id, index as i32)
            .await?;
    }

    txn.commit().await.map_err(DbError::from)?;

    tracing::debug!(
        "Block {} ({}) stored with {} transactions (main: {})",
        stored.sequence,
        stored.hash,
        block.transactions.len(),
        stored.main
    );

    Ok(stored)
}

pub async fn get_head(state: &AppState) -> ApiResult<BlockResponse> {
    state
        .repositories
        .block
        .head()
        .await?
        .map(BlockResponse::from)
        .ok_or_else(|| ApiError::NotFound("No main chain block found".to_string()))
}

/// Look a block up by hash or by sequence, with its transactions
pub async fn find_block(
    state: &AppState,
    hash: Option<&str>,
    sequence: Option<i32>,
) -> ApiResult<BlockResponse> {
    let block = match (hash, sequence) {
        (Some(hash), _) => state.repositories.block.find_by_hash(hash).await?,
        (None, Some(sequence)) => state.repositories.block.find_by_sequence(sequence).await?,
        (None, None) => {
            return Err(ApiError::InvalidRequest(
                "Either hash or sequence is required".to_string(),
            ))
        }
    };

    let block = block.ok_or_else(|| match hash {
        Some(hash) => ApiError::NotFound(format!("Block {} not found", hash)),
        None => ApiError::NotFound(format!(
            "Block at sequence {} not found",
            sequence.unwrap_or_default()
        )),
    })?;

    let transactions = state.repositories.transaction.find_by_block(block.id).await?;

    let mut response = BlockResponse::from(block);
    response.transactions = Some(
        transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    );
    Ok(response)
}

pub async fn list_blocks(
    state: &AppState,
    main_only: bool,
    pagination: &PaginationParams,
) -> ApiResult<PaginatedResponse<Vec<BlockResponse>>> {
    let (blocks, total) = state
        .repositories
        .block
        .find_paginated(main_only, pagination)
        .await?;

    let data = blocks.into_iter().map(BlockResponse::from).collect();
    Ok(PaginatedResponse::new(data, total, pagination))
}
