// Handlers for transaction-related API endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{PaginatedResponse, PaginationParams, TransactionResponse};
use crate::services::transaction_service;

#[derive(Debug, Deserialize)]
pub struct FindTransactionQuery {
    pub hash: String,
}

#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    pub block_hash: Option<String>,
}

/// Handler for GET /transactions/find?hash= - Returns a transaction with its asset descriptions
pub async fn find_transaction(
    State(state): State<AppState>,
    Query(params): Query<FindTransactionQuery>,
) -> ApiResult<Json<TransactionResponse>> {
    let transaction = transaction_service::find_transaction(&state, &params.hash).await?;
    Ok(Json(transaction))
}

/// Handler for GET /transactions - Returns transactions with pagination
pub async fn get_transactions(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(params): Query<ListTransactionsQuery>,
) -> ApiResult<Json<PaginatedResponse<Vec<TransactionResponse>>>> {
    let response =
        transaction_service::list_transactions(&state, params.block_hash.as_deref(), &pagination)
            .await?;
    Ok(Json(response))
}
