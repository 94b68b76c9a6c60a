#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use ironfish_api::db::{DbError, LedgerStore, LedgerUnit, NewAsset};
use ironfish_api::entity::asset_descriptions::{self, AssetDescriptionType};
use ironfish_api::entity::{assets, transactions};
use ironfish_api::models::{BurnDto, MintDto, TransactionDto};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    pub transactions: Vec<transactions::Model>,
    pub assets: Vec<assets::Model>,
    pub descriptions: Vec<asset_descriptions::Model>,
    next_id: i32,
}

impl LedgerState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Ledger kept in memory. A unit works on a copy and publishes it on commit.
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    state: Arc<Mutex<LedgerState>>,
    failing_begins: Arc<AtomicU32>,
    begin_calls: Arc<AtomicU32>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(&self, hash: &str) -> transactions::Model {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let model = transactions::Model {
            id: state.next_id(),
            hash: hash.to_string(),
            fee: 1,
            size: 100,
            notes: serde_json::json!([]),
            spends: serde_json::json!([]),
            created_at: now,
            updated_at: now,
        };
        state.transactions.push(model.clone());
        model
    }

    /// Make the next `count` calls to `begin` fail
    pub fn fail_next_begins(&self, count: u32) {
        self.failing_begins.store(count, Ordering::SeqCst);
    }

    pub fn begin_calls(&self) -> u32 {
        self.begin_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> LedgerState {
        self.state.lock().unwrap().clone()
    }

    pub fn asset(&self, identifier: &str) -> Option<assets::Model> {
        self.snapshot()
            .assets
            .into_iter()
            .find(|a| a.identifier == identifier)
    }

    pub fn supply(&self, identifier: &str) -> Option<Decimal> {
        self.asset(identifier).map(|a| a.supply)
    }

    /// (type, value, asset identifier) of every description of a transaction, in creation order
    pub fn descriptions_of(&self, hash: &str) -> Vec<(AssetDescriptionType, Decimal, String)> {
        let state = self.snapshot();
        let Some(transaction) = state.transactions.iter().find(|t| t.hash == hash) else {
            return vec![];
        };
        state
            .descriptions
            .iter()
            .filter(|d| d.transaction_id == transaction.id)
            .map(|d| {
                let identifier = state
                    .assets
                    .iter()
                    .find(|a| a.id == d.asset_id)
                    .map(|a| a.identifier.clone())
                    .unwrap_or_default();
                (d.r#type, d.value, identifier)
            })
            .collect()
    }
}

pub struct InMemoryUnit {
    shared: Arc<Mutex<LedgerState>>,
    working: LedgerState,
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    type Unit = InMemoryUnit;

    async fn begin(&self) -> Result<Self::Unit, DbError> {
        self.begin_calls.fetch_add(1, Ordering::SeqCst);

        let remaining = self.failing_begins.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_begins.store(remaining - 1, Ordering::SeqCst);
            return Err(DbError::ConnectionError("connection refused".to_string()));
        }

        Ok(InMemoryUnit {
            shared: self.state.clone(),
            working: self.snapshot(),
        })
    }
}

#[async_trait]
impl LedgerUnit for InMemoryUnit {
    async fn find_transaction_by_hash(
        &mut self,
        hash: &str,
    ) -> Result<Option<transactions::Model>, DbError> {
        Ok(self
            .working
            .transactions
            .iter()
            .find(|t| t.hash == hash)
            .cloned())
    }

    async fn upsert_asset(
        &mut self,
        asset: &NewAsset,
        transaction: &transactions::Model,
    ) -> Result<assets::Model, DbError> {
        if let Some(existing) = self
            .working
            .assets
            .iter()
            .find(|a| a.identifier == asset.identifier)
        {
            return Ok(existing.clone());
        }

        let now = Utc::now();
        let model = assets::Model {
            id: self.working.next_id(),
            identifier: asset.identifier.clone(),
            name: asset.name.clone(),
            metadata: asset.metadata.clone(),
            owner: asset.owner.clone(),
            supply: Decimal::ZERO,
            created_transaction_id: transaction.id,
            created_at: now,
            updated_at: now,
        };
        self.working.assets.push(model.clone());
        Ok(model)
    }

    async fn find_asset_by_identifier(
        &mut self,
        identifier: &str,
    ) -> Result<Option<assets::Model>, DbError> {
        Ok(self
            .working
            .assets
            .iter()
            .find(|a| a.identifier == identifier)
            .cloned())
    }

    async fn find_asset_by_id(&mut self, id: i32) -> Result<Option<assets::Model>, DbError> {
        Ok(self.working.assets.iter().find(|a| a.id == id).cloned())
    }

    async fn update_supply(
        &mut self,
        asset: &assets::Model,
        delta: Decimal,
    ) -> Result<(), DbError> {
        let stored = self
            .working
            .assets
            .iter_mut()
            .find(|a| a.id == asset.id)
            .ok_or_else(|| DbError::Inconsistent(format!("asset {} missing", asset.id)))?;
        stored.supply += delta;
        Ok(())
    }

    async fn create_description(
        &mut self,
        kind: AssetDescriptionType,
        value: Decimal,
        asset: &assets::Model,
        transaction: &transactions::Model,
    ) -> Result<asset_descriptions::Model, DbError> {
        let model = asset_descriptions::Model {
            id: self.working.next_id(),
            r#type: kind,
            value,
            asset_id: asset.id,
            transaction_id: transaction.id,
            created_at: Utc::now(),
        };
        self.working.descriptions.push(model.clone());
        Ok(model)
    }

    async fn find_descriptions_by_transaction(
        &mut self,
        transaction: &transactions::Model,
    ) -> Result<Vec<asset_descriptions::Model>, DbError> {
        Ok(self
            .working
            .descriptions
            .iter()
            .filter(|d| d.transaction_id == transaction.id)
            .cloned()
            .collect())
    }

    async fn delete_descriptions_by_transaction(
        &mut self,
        transaction: &transactions::Model,
    ) -> Result<(), DbError> {
        self.working
            .descriptions
            .retain(|d| d.transaction_id != transaction.id);
        Ok(())
    }

    async fn commit(self) -> Result<(), DbError> {
        *self.shared.lock().unwrap() = self.working;
        Ok(())
    }
}

pub fn mint(id: &str, value: &str) -> MintDto {
    MintDto {
        id: id.to_string(),
        metadata: format!("{} metadata", id),
        name: format!("{} coin", id),
        owner: "owner".to_string(),
        value: value.to_string(),
    }
}

pub fn burn(id: &str, value: &str) -> BurnDto {
    BurnDto {
        id: id.to_string(),
        value: value.to_string(),
    }
}

pub fn transaction(hash: &str, mints: Vec<MintDto>, burns: Vec<BurnDto>) -> TransactionDto {
    TransactionDto {
        hash: hash.to_string(),
        fee: 1,
        size: 100,
        notes: vec![],
        spends: vec![],
        mints,
        burns,
    }
}
