// Transaction database operations

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::db::error::DbError;
use crate::entity::{blocks_transactions, transactions};
use crate::models::PaginationParams;

/// Transaction fields reported by a node
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub hash: String,
    pub fee: i64,
    pub size: i32,
    pub notes: serde_json::Value,
    pub spends: serde_json::Value,
}

/// Find a transaction by hash
pub async fn find_by_hash<C: ConnectionTrait>(
    db: &C,
    hash: &str,
) -> Result<Option<transactions::Model>, DbError> {
    transactions::Entity::find()
        .filter(transactions::Column::Hash.eq(hash))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Insert the transaction or refresh the reported fields of an existing row
pub async fn upsert<C: ConnectionTrait>(
    db: &C,
    transaction: &NewTransaction,
) -> Result<transactions::Model, DbError> {
    let now = Utc::now();

    match find_by_hash(db, &transaction.hash).await? {
        Some(existing) => {
            let mut active: transactions::ActiveModel = existing.into();
            active.fee = Set(transaction.fee);
            active.size = Set(transaction.size);
            active.notes = Set(transaction.notes.clone());
            active.spends = Set(transaction.spends.clone());
            active.updated_at = Set(now);
            Ok(active.update(db).await?)
        }
        None => {
            let active = transactions::ActiveModel {
                id: NotSet,
                hash: Set(transaction.hash.clone()),
                fee: Set(transaction.fee),
                size: Set(transaction.size),
                notes: Set(transaction.notes.clone()),
                spends: Set(transaction.spends.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            };
            Ok(active.insert(db).await?)
        }
    }
}

/// Repository for transaction reads served by the API
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    conn: Arc<DatabaseConnection>,
}

impl TransactionRepository {
    /// Creates a new transaction repository with database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        TransactionRepository { conn }
    }

    /// Retrieves a transaction by hash
    pub async fn find_by_hash(&self, hash: &str) -> Result<Option<transactions::Model>, DbError> {
        find_by_hash(&*self.conn, hash).await
    }

    /// Retrieves several transactions by primary key in one query
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<transactions::Model>, DbError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        transactions::Entity::find()
            .filter(transactions::Column::Id.is_in(ids))
            .all(&*self.conn)
            .await
            .map_err(Into::into)
    }

    /// Transactions of one block, in block order
    pub async fn find_by_block(&self, block_id: i32) -> Result<Vec<transactions::Model>, DbError> {
        transactions::Entity::find()
            .inner_join(blocks_transactions::Entity)
            .filter(blocks_transactions::Column::BlockId.eq(block_id))
            .order_by_asc(blocks_transactions::Column::Index)
            .all(&*self.conn)
            .await
            .map_err(Into::into)
    }

    /// All transactions, newest first
    pub async fn find_paginated(
        &self,
        pagination: &PaginationParams,
    ) -> Result<(Vec<transactions::Model>, u64), DbError> {
        let total = transactions::Entity::find().count(&*self.conn).await?;

        let txs = transactions::Entity::find()
            .order_by_desc(transactions::Column::Id)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(&*self.conn)
            .await?;

        Ok((txs, total))
    }
}
