// Block upload payloads and block responses

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::db::repositories::block_repository::NewBlock;
use crate::db::repositories::transaction_repository::NewTransaction;
use crate::entity::blocks;
use crate::models::transaction::TransactionResponse;

/// Maximum number of blocks accepted by one upload
pub const MAX_BLOCKS_PER_UPLOAD: usize = 3000;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

/// Accept big integers either as JSON strings or plain numbers
fn deserialize_integer_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

fn deserialize_optional_integer_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

/// True for a non-empty run of ASCII digits
pub fn is_integer_string(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// How the reporting node changed its chain with this block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockOperation {
    Connected,
    Disconnected,
    Fork,
}

impl BlockOperation {
    /// Only connected blocks are on the main chain
    pub fn is_main_chain(self) -> bool {
        matches!(self, BlockOperation::Connected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDto {
    pub commitment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendDto {
    pub nullifier: String,
}

/// A mint inside a reported transaction. `id` is the asset identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintDto {
    pub id: String,
    #[serde(default)]
    pub metadata: String,
    pub name: String,
    pub owner: String,
    #[serde(deserialize_with = "deserialize_integer_string")]
    pub value: String,
}

/// A burn inside a reported transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnDto {
    pub id: String,
    #[serde(deserialize_with = "deserialize_integer_string")]
    pub value: String,
}

/// Transaction descriptor as reported inside a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub hash: String,
    pub fee: i64,
    pub size: i32,
    #[serde(default)]
    pub notes: Vec<NoteDto>,
    #[serde(default)]
    pub spends: Vec<SpendDto>,
    #[serde(default)]
    pub mints: Vec<MintDto>,
    #[serde(default)]
    pub burns: Vec<BurnDto>,
}

impl TransactionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.hash.trim().is_empty() {
            return Err("transaction hash must not be empty".to_string());
        }
        if self.fee < 0 {
            return Err(format!("transaction {} has a negative fee", self.hash));
        }
        if self.size < 0 {
            return Err(format!("transaction {} has a negative size", self.hash));
        }

        for mint in &self.mints {
            if mint.id.trim().is_empty() {
                return Err(format!("transaction {} mints an empty asset id", self.hash));
            }
            if !is_integer_string(&mint.value) {
                return Err(format!(
                    "transaction {} mints a non-integer value '{}'",
                    self.hash, mint.value
                ));
            }
        }

        for burn in &self.burns {
            if burn.id.trim().is_empty() {
                return Err(format!("transaction {} burns an empty asset id", self.hash));
            }
            if !is_integer_string(&burn.value) {
                return Err(format!(
                    "transaction {} burns a non-integer value '{}'",
                    self.hash, burn.value
                ));
            }
        }

        Ok(())
    }

    pub fn to_new_transaction(&self) -> NewTransaction {
        NewTransaction {
            hash: self.hash.clone(),
            fee: self.fee,
            size: self.size,
            notes: serde_json::to_value(&self.notes).unwrap_or_default(),
            spends: serde_json::to_value(&self.spends).unwrap_or_default(),
        }
    }
}

/// One block of an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertBlockDto {
    pub hash: String,
    pub sequence: i32,
    pub previous_block_hash: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(deserialize_with = "deserialize_integer_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "deserialize_optional_integer_string")]
    pub work: Option<String>,
    #[serde(default)]
    pub graffiti: String,
    #[serde(default)]
    pub size: i32,
    #[serde(rename = "type")]
    pub operation: BlockOperation,
    #[serde(default)]
    pub transactions: Vec<TransactionDto>,
}

impl UpsertBlockDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.hash.trim().is_empty() {
            return Err("block hash must not be empty".to_string());
        }
        if self.sequence < 0 {
            return Err(format!("block {} has a negative sequence", self.hash));
        }
        if self.size < 0 {
            return Err(format!("block {} has a negative size", self.hash));
        }
        if !is_integer_string(&self.difficulty) {
            return Err(format!("block {} has a non-integer difficulty", self.hash));
        }
        if Decimal::from_str(&self.difficulty).is_err() {
            return Err(format!("block {} difficulty is out of range", self.hash));
        }
        if let Some(work) = &self.work {
            if !is_integer_string(work) {
                return Err(format!("block {} has a non-integer work", self.hash));
            }
            if Decimal::from_str(work).is_err() {
                return Err(format!("block {} work is out of range", self.hash));
            }
        }
        if Utc.timestamp_millis_opt(self.timestamp).single().is_none() {
            return Err(format!("block {} has an invalid timestamp", self.hash));
        }

        for transaction in &self.transactions {
            transaction.validate()?;
        }

        Ok(())
    }

    /// Convert to repository input. Call after [`Self::validate`].
    pub fn to_new_block(&self) -> Result<NewBlock, String> {
        let difficulty = Decimal::from_str(&self.difficulty)
            .map_err(|e| format!("block {} difficulty: {}", self.hash, e))?;
        let work = match &self.work {
            Some(work) => {
                Decimal::from_str(work).map_err(|e| format!("block {} work: {}", self.hash, e))?
            }
            None => Decimal::ZERO,
        };
        let timestamp: DateTime<Utc> = Utc
            .timestamp_millis_opt(self.timestamp)
            .single()
            .ok_or_else(|| format!("block {} has an invalid timestamp", self.hash))?;

        Ok(NewBlock {
            hash: self.hash.clone(),
            sequence: self.sequence,
            previous_block_hash: self.previous_block_hash.clone(),
            main: self.operation.is_main_chain(),
            difficulty,
            work,
            timestamp,
            graffiti: self.graffiti.clone(),
            size: self.size,
            transactions_count: self.transactions.len() as i32,
        })
    }
}

/// Request body for POST /blocks
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertBlocksRequest {
    pub blocks: Vec<UpsertBlockDto>,
}

impl UpsertBlocksRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.blocks.is_empty() {
            return Err("blocks must not be empty".to_string());
        }
        if self.blocks.len() > MAX_BLOCKS_PER_UPLOAD {
            return Err(format!(
                "at most {} blocks may be uploaded at once",
                MAX_BLOCKS_PER_UPLOAD
            ));
        }

        for block in &self.blocks {
            block.validate()?;
        }

        Ok(())
    }
}

/// Block as served by the API
#[derive(Debug, Clone, Serialize)]
pub struct BlockResponse {
    pub object: &'static str,
    pub id: i32,
    pub hash: String,
    pub sequence: i32,
    pub previous_block_hash: String,
    pub main: bool,
    pub difficulty: String,
    pub work: String,
    pub timestamp: DateTime<Utc>,
    pub graffiti: String,
    pub size: i32,
    pub transactions_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<TransactionResponse>>,
}

impl From<blocks::Model> for BlockResponse {
    fn from(block: blocks::Model) -> Self {
        Self {
            object: "block",
            id: block.id,
            hash: block.hash,
            sequence: block.sequence,
            previous_block_hash: block.previous_block_hash,
            main: block.main,
            difficulty: block.difficulty.normalize().to_string(),
            work: block.work.normalize().to_string(),
            timestamp: block.timestamp,
            graffiti: block.graffiti,
            size: block.size,
            transactions_count: block.transactions_count,
            transactions: None,
        }
    }
}
