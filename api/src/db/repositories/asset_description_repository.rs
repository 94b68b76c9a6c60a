// Asset description database operations

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::db::error::DbError;
use crate::entity::asset_descriptions::{self, AssetDescriptionType};
use crate::models::PaginationParams;

/// Record one mint or burn of `asset_id` made by `transaction_id`
pub async fn create<C: ConnectionTrait>(
    db: &C,
    kind: AssetDescriptionType,
    value: Decimal,
    asset_id: i32,
    transaction_id: i32,
) -> Result<asset_descriptions::Model, DbError> {
    let active = asset_descriptions::ActiveModel {
        id: NotSet,
        r#type: Set(kind),
        value: Set(value),
        asset_id: Set(asset_id),
        transaction_id: Set(transaction_id),
        created_at: Set(Utc::now()),
    };

    Ok(active.insert(db).await?)
}

/// All descriptions attached to a transaction, in insertion order
pub async fn find_by_transaction<C: ConnectionTrait>(
    db: &C,
    transaction_id: i32,
) -> Result<Vec<asset_descriptions::Model>, DbError> {
    asset_descriptions::Entity::find()
        .filter(asset_descriptions::Column::TransactionId.eq(transaction_id))
        .order_by_asc(asset_descriptions::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

pub async fn delete_by_transaction<C: ConnectionTrait>(
    db: &C,
    transaction_id: i32,
) -> Result<u64, DbError> {
    let result = asset_descriptions::Entity::delete_many()
        .filter(asset_descriptions::Column::TransactionId.eq(transaction_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Repository for asset description reads served by the API
#[derive(Debug, Clone)]
pub struct AssetDescriptionRepository {
    conn: Arc<DatabaseConnection>,
}

impl AssetDescriptionRepository {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }

    pub async fn find_by_transaction(
        &self,
        transaction_id: i32,
    ) -> Result<Vec<asset_descriptions::Model>, DbError> {
        find_by_transaction(&*self.conn, transaction_id).await
    }

    /// Descriptions of one asset, newest first
    pub async fn find_by_asset_paginated(
        &self,
        asset_id: i32,
        pagination: &PaginationParams,
    ) -> Result<(Vec<asset_descriptions::Model>, u64), DbError> {
        let query = asset_descriptions::Entity::find()
            .filter(asset_descriptions::Column::AssetId.eq(asset_id));

        let total = query.clone().count(&*self.conn).await?;

        let descriptions = query
            .order_by_desc(asset_descriptions::Column::Id)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(&*self.conn)
            .await?;

        Ok((descriptions, total))
    }
}
