//! Asset repository module

mod query;
pub mod save;
pub mod supply;

pub use query::{find_by_id, find_by_identifier};
pub use save::{upsert, NewAsset};
pub use supply::update_supply;

use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::db::error::DbError;
use crate::entity::assets::{Column, Model};
use crate::entity::prelude::Assets;
use crate::models::PaginationParams;

/// Repository for asset reads served by the API
#[derive(Debug, Clone)]
pub struct AssetRepository {
    conn: Arc<DatabaseConnection>,
}

impl AssetRepository {
    /// Create a new AssetRepository
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }

    /// Find asset by its content-derived identifier
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Model>, DbError> {
        query::find_by_identifier(&*self.conn, identifier).await
    }

    /// Newest assets first, optionally filtered by a name fragment
    pub async fn find_paginated(
        &self,
        search: Option<&str>,
        pagination: &PaginationParams,
    ) -> Result<(Vec<Model>, u64), DbError> {
        let mut query = Assets::find();

        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query = query.filter(Column::Name.contains(search));
        }

        let total = query.clone().count(&*self.conn).await?;

        let assets = query
            .order_by_desc(Column::Id)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(&*self.conn)
            .await?;

        Ok((assets, total))
    }
}
