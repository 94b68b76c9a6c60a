//! Unit of work used by the asset loader.
//!
//! Every operation of one reconcile call runs against the same
//! [`LedgerUnit`]. Nothing becomes visible until [`LedgerUnit::commit`];
//! dropping a unit without committing rolls all of it back.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::db::error::DbError;
use crate::db::repositories::{asset, asset_description_repository, transaction_repository};
use crate::entity::asset_descriptions::{self, AssetDescriptionType};
use crate::entity::{assets, transactions};

pub use crate::db::repositories::asset::NewAsset;

/// Opens units of work against the asset ledger
#[async_trait]
pub trait LedgerStore: Send + Sync {
    type Unit: LedgerUnit;

    async fn begin(&self) -> Result<Self::Unit, DbError>;
}

/// Operations available inside one atomic unit of work
#[async_trait]
pub trait LedgerUnit: Send {
    async fn find_transaction_by_hash(
        &mut self,
        hash: &str,
    ) -> Result<Option<transactions::Model>, DbError>;

    /// Insert-if-absent by identifier; an existing asset is returned unchanged
    async fn upsert_asset(
        &mut self,
        asset: &NewAsset,
        transaction: &transactions::Model,
    ) -> Result<assets::Model, DbError>;

    async fn find_asset_by_identifier(
        &mut self,
        identifier: &str,
    ) -> Result<Option<assets::Model>, DbError>;

    async fn find_asset_by_id(&mut self, id: i32) -> Result<Option<assets::Model>, DbError>;

    /// Adds a signed delta to the stored supply
    async fn update_supply(&mut self, asset: &assets::Model, delta: Decimal)
        -> Result<(), DbError>;

    async fn create_description(
        &mut self,
        kind: AssetDescriptionType,
        value: Decimal,
        asset: &assets::Model,
        transaction: &transactions::Model,
    ) -> Result<asset_descriptions::Model, DbError>;

    async fn find_descriptions_by_transaction(
        &mut self,
        transaction: &transactions::Model,
    ) -> Result<Vec<asset_descriptions::Model>, DbError>;

    async fn delete_descriptions_by_transaction(
        &mut self,
        transaction: &transactions::Model,
    ) -> Result<(), DbError>;

    async fn commit(self) -> Result<(), DbError>;
}

/// Ledger backed by the relational database
#[derive(Debug, Clone)]
pub struct SeaOrmLedger {
    conn: Arc<DatabaseConnection>,
}

impl SeaOrmLedger {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl LedgerStore for SeaOrmLedger {
    type Unit = SeaOrmLedgerUnit;

    async fn begin(&self) -> Result<Self::Unit, DbError> {
        let txn = self.conn.begin().await?;
        Ok(SeaOrmLedgerUnit { txn })
    }
}

/// One database transaction; rolled back by sea-orm when dropped uncommitted
pub struct SeaOrmLedgerUnit {
    txn: DatabaseTransaction,
}

#[async_trait]
impl LedgerUnit for SeaOrmLedgerUnit {
    async fn find_transaction_by_hash(
        &mut self,
        hash: &str,
    ) -> Result<Option<transactions::Model>, DbError> {
        transaction_repository::find_by_hash(&self.txn, hash).await
    }

    async fn upsert_asset(
        &mut self,
        new_asset: &NewAsset,
        transaction: &transactions::Model,
    ) -> Result<assets::Model, DbError> {
        asset::upsert(&self.txn, new_asset, transaction.id).await
    }

    async fn find_asset_by_identifier(
        &mut self,
        identifier: &str,
    ) -> Result<Option<assets::Model>, DbError> {
        asset::find_by_identifier(&self.txn, identifier).await
    }

    async fn find_asset_by_id(&mut self, id: i32) -> Result<Option<assets::Model>, DbError> {
        asset::find_by_id(&self.txn, id).await
    }

    async fn update_supply(
        &mut self,
        target: &assets::Model,
        delta: Decimal,
    ) -> Result<(), DbError> {
        asset::update_supply(&self.txn, target.id, delta).await
    }

    async fn create_description(
        &mut self,
        kind: AssetDescriptionType,
        value: Decimal,
        target: &assets::Model,
        transaction: &transactions::Model,
    ) -> Result<asset_descriptions::Model, DbError> {
        asset_description_repository::create(&self.txn, kind, value, target.id, transaction.id)
            .await
    }

    async fn find_descriptions_by_transaction(
        &mut self,
        transaction: &transactions::Model,
    ) -> Result<Vec<asset_descriptions::Model>, DbError> {
        asset_description_repository::find_by_transaction(&self.txn, transaction.id).await
    }

    async fn delete_descriptions_by_transaction(
        &mut self,
        transaction: &transactions::Model,
    ) -> Result<(), DbError> {
        asset_description_repository::delete_by_transaction(&self.txn, transaction.id).await?;
        Ok(())
    }

    async fn commit(self) -> Result<(), DbError> {
        self.txn.commit().await?;
        Ok(())
    }
}
