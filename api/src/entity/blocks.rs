use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blocks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub hash: String,
    pub sequence: i32,
    pub previous_block_hash: String,
    /// Whether the block is on the canonical chain
    pub main: bool,
    pub difficulty: Decimal,
    pub work: Decimal,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub graffiti: String,
    pub size: i32,
    pub transactions_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blocks_transactions::Entity")]
    BlocksTransactions,
}

impl Related<super::blocks_transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlocksTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
