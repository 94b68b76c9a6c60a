// Block database operations

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::db::error::DbError;
use crate::entity::{blocks, blocks_transactions};
use crate::models::PaginationParams;

/// Block fields reported by a node
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlock {
    pub hash: String,
    pub sequence: i32,
    pub previous_block_hash: String,
    pub main: bool,
    pub difficulty: Decimal,
    pub work: Decimal,
    pub timestamp: DateTime<Utc>,
    pub graffiti: String,
    pub size: i32,
    pub transactions_count: i32,
}

/// Find a block by hash
pub async fn find_by_hash<C: ConnectionTrait>(
    db: &C,
    hash: &str,
) -> Result<Option<blocks::Model>, DbError> {
    blocks::Entity::find()
        .filter(blocks::Column::Hash.eq(hash))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Insert the block or overwrite the reported fields of an existing row.
/// A disconnected block keeps its row with `main = false`.
pub async fn upsert<C: ConnectionTrait>(db: &C, block: &NewBlock) -> Result<blocks::Model, DbError> {
    let now = Utc::now();

    match find_by_hash(db, &block.hash).await? {
        Some(existing) => {
            let mut active: blocks::ActiveModel = existing.into();
            active.sequence = Set(block.sequence);
            active.previous_block_hash = Set(block.previous_block_hash.clone());
            active.main = Set(block.main);
            active.difficulty = Set(block.difficulty);
            active.work = Set(block.work);
            active.timestamp = Set(block.timestamp);
            active.graffiti = Set(block.graffiti.clone());
            active.size = Set(block.size);
            active.transactions_count = Set(block.transactions_count);
            active.updated_at = Set(now);
            Ok(active.update(db).await?)
        }
        None => {
            let active = blocks::ActiveModel {
                id: NotSet,
                hash: Set(block.hash.clone()),
                sequence: Set(block.sequence),
                previous_block_hash: Set(block.previous_block_hash.clone()),
                main: Set(block.main),
                difficulty: Set(block.difficulty),
                work: Set(block.work),
                timestamp: Set(block.timestamp),
                graffiti: Set(block.graffiti.clone()),
                size: Set(block.size),
                transactions_count: Set(block.transactions_count),
                created_at: Set(now),
                updated_at: Set(now),
            };
            Ok(active.insert(db).await?)
        }
    }
}

/// Record that a transaction sits at `index` inside a block. Re-linking moves the index.
pub async fn link_transaction<C: ConnectionTrait>(
    db: &C,
    block_id: i32,
    transaction_id: i32,
    index: i32,
) -> Result<(), DbError> {
    let link = blocks_transactions::ActiveModel {
        block_id: Set(block_id),
        transaction_id: Set(transaction_id),
        index: Set(index),
    };

    blocks_transactions::Entity::insert(link)
        .on_conflict(
            OnConflict::columns([
                blocks_transactions::Column::BlockId,
                blocks_transactions::Column::TransactionId,
            ])
            .update_column(blocks_transactions::Column::Index)
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Repository for block reads served by the API
#[derive(Debug, Clone)]
pub struct BlockRepository {
    conn: Arc<DatabaseConnection>,
}

impl BlockRepository {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        BlockRepository { conn }
    }

    /// Highest main-chain block
    pub async fn head(&self) -> Result<Option<blocks::Model>, DbError> {
        blocks::Entity::find()
            .filter(blocks::Column::Main.eq(true))
            .order_by_desc(blocks::Column::Sequence)
            .one(&*self.conn)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_hash(&self, hash: &str) -> Result<Option<blocks::Model>, DbError> {
        find_by_hash(&*self.conn, hash).await
    }

    /// Block at a height, preferring the main-chain one over forks
    pub async fn find_by_sequence(&self, sequence: i32) -> Result<Option<blocks::Model>, DbError> {
        blocks::Entity::find()
            .filter(blocks::Column::Sequence.eq(sequence))
            .order_by_desc(blocks::Column::Main)
            .order_by_desc(blocks::Column::Id)
            .one(&*self.conn)
            .await
            .map_err(Into::into)
    }

    /// Blocks by descending sequence
    pub async fn find_paginated(
        &self,
        main_only: bool,
        pagination: &PaginationParams,
    ) -> Result<(Vec<blocks::Model>, u64), DbError> {
        let mut query = blocks::Entity::find();
        if main_only {
            query = query.filter(blocks::Column::Main.eq(true));
        }

        let total = query.clone().count(&*self.conn).await?;

        let blocks = query
            .order_by_desc(blocks::Column::Sequence)
            .order_by_desc(blocks::Column::Id)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(&*self.conn)
            .await?;

        Ok((blocks, total))
    }
}
