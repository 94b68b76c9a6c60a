// Transaction responses

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::transactions;
use crate::models::asset::AssetDescriptionResponse;

/// Transaction as served by the API
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub object: &'static str,
    pub id: i32,
    pub hash: String,
    pub fee: i64,
    pub size: i32,
    pub notes: serde_json::Value,
    pub spends: serde_json::Value,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_descriptions: Option<Vec<AssetDescriptionResponse>>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(transaction: transactions::Model) -> Self {
        Self {
            object: "transaction",
            id: transaction.id,
            hash: transaction.hash,
            fee: transaction.fee,
            size: transaction.size,
            notes: transaction.notes,
            spends: transaction.spends,
            created_at: transaction.created_at,
            asset_descriptions: None,
        }
    }
}
