//! Mint/burn reconciliation for a single transaction.
//!
//! A call first retracts whatever the transaction contributed before (its
//! stored descriptions and their supply deltas), then, when the transaction
//! sits on the main chain, records its mints and burns again. Both passes
//! share one [`LedgerUnit`], so a failure anywhere leaves the ledger as it was.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::db::{DbError, LedgerStore, LedgerUnit, NewAsset};
use crate::entity::asset_descriptions::AssetDescriptionType;
use crate::entity::transactions;
use crate::models::{BurnDto, MintDto, TransactionDto};

/// Values above this are treated as corrupt reports and skipped
pub const SUPPLY_VALUE_CEILING: u64 = 100_000_000_000_000_000;

#[derive(Error, Debug)]
pub enum AssetLoaderError {
    #[error("Transaction {0} not found")]
    TransactionNotFound(String),
    #[error("Asset {0} not found")]
    AssetNotFound(String),
    #[error("Invalid value '{0}'")]
    InvalidValue(String),
    #[error(transparent)]
    Database(#[from] DbError),
}

#[derive(Debug, PartialEq, Eq)]
enum ParsedValue {
    Accepted(Decimal),
    OverCeiling,
}

fn parse_value(raw: &str) -> Result<ParsedValue, AssetLoaderError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AssetLoaderError::InvalidValue(raw.to_string()));
    }

    let digits = raw.trim_start_matches('0');
    // Anything longer than the ceiling's 18 digits is above it
    if digits.len() > 18 {
        return Ok(ParsedValue::OverCeiling);
    }

    let value: u64 = if digits.is_empty() {
        0
    } else {
        digits
            .parse()
            .map_err(|_| AssetLoaderError::InvalidValue(raw.to_string()))?
    };

    if value > SUPPLY_VALUE_CEILING {
        Ok(ParsedValue::OverCeiling)
    } else {
        Ok(ParsedValue::Accepted(Decimal::from(value)))
    }
}

/// Keeps asset supplies in step with main-chain mints and burns
#[derive(Debug, Clone)]
pub struct AssetLoader<S> {
    store: S,
}

impl<S: LedgerStore> AssetLoader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reconcile the stored descriptions of `transaction` with its current chain status.
    ///
    /// Calling this twice with the same input leaves the same state as calling it once.
    /// With `is_main_chain == false` every previous effect of the transaction is undone.
    pub async fn load_descriptions(
        &self,
        is_main_chain: bool,
        transaction: &TransactionDto,
    ) -> Result<(), AssetLoaderError> {
        let mut unit = self.store.begin().await?;

        let record = unit
            .find_transaction_by_hash(&transaction.hash)
            .await?
            .ok_or_else(|| AssetLoaderError::TransactionNotFound(transaction.hash.clone()))?;

        undo_descriptions(&mut unit, &record).await?;

        if is_main_chain {
            for mint in &transaction.mints {
                apply_mint(&mut unit, &record, mint).await?;
            }
            for burn in &transaction.burns {
                apply_burn(&mut unit, &record, burn).await?;
            }
        }

        unit.commit().await?;

        tracing::debug!(
            "Reconciled transaction {} (main_chain: {}, mints: {}, burns: {})",
            transaction.hash,
            is_main_chain,
            transaction.mints.len(),
            transaction.burns.len()
        );

        Ok(())
    }
}

async fn undo_descriptions<U: LedgerUnit>(
    unit: &mut U,
    record: &transactions::Model,
) -> Result<(), AssetLoaderError> {
    let descriptions = unit.find_descriptions_by_transaction(record).await?;
    if descriptions.is_empty() {
        return Ok(());
    }

    for description in &descriptions {
        let asset = unit
            .find_asset_by_id(description.asset_id)
            .await?
            .ok_or_else(|| {
                DbError::Inconsistent(format!(
                    "asset {} referenced by description {} is missing",
                    description.asset_id, description.id
                ))
            })?;

        unit.update_supply(&asset, description.r#type.reversing_delta(description.value))
            .await?;
    }

    unit.delete_descriptions_by_transaction(record).await?;
    Ok(())
}

async fn apply_mint<U: LedgerUnit>(
    unit: &mut U,
    record: &transactions::Model,
    mint: &MintDto,
) -> Result<(), AssetLoaderError> {
    let new_asset = NewAsset {
        identifier: mint.id.clone(),
        name: mint.name.clone(),
        metadata: mint.metadata.clone(),
        owner: mint.owner.clone(),
    };
    let asset = unit.upsert_asset(&new_asset, record).await?;

    let value = match parse_value(&mint.value)? {
        ParsedValue::Accepted(value) => value,
        ParsedValue::OverCeiling => {
            tracing::warn!(
                "Skipping mint of {} for asset {} in transaction {}: value above ceiling",
                mint.value,
                mint.id,
                record.hash
            );
            return Ok(());
        }
    };

    let kind = AssetDescriptionType::Mint;
    unit.create_description(kind, value, &asset, record).await?;
    unit.update_supply(&asset, kind.applied_delta(value)).await?;
    Ok(())
}

async fn apply_burn<U: LedgerUnit>(
    unit: &mut U,
    record: &transactions::Model,
    burn: &BurnDto,
) -> Result<(), AssetLoaderError> {
    let asset = unit
        .find_asset_by_identifier(&burn.id)
        .await?
        .ok_or_else(|| AssetLoaderError::AssetNotFound(burn.id.clone()))?;

    let value = match parse_value(&burn.value)? {
        ParsedValue::Accepted(value) => value,
        ParsedValue::OverCeiling => {
            tracing::warn!(
                "Skipping burn of {} for asset {} in transaction {}: value above ceiling",
                burn.value,
                burn.id,
                record.hash
            );
            return Ok(());
        }
    };

    let kind = AssetDescriptionType::Burn;
    unit.create_description(kind, value, &asset, record).await?;
    unit.update_supply(&asset, kind.applied_delta(value)).await?;
    Ok(())
}
