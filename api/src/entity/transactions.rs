use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub hash: String,
    pub fee: i64,
    pub size: i32,
    pub notes: Json,
    pub spends: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asset_descriptions::Entity")]
    AssetDescriptions,
    #[sea_orm(has_many = "super::blocks_transactions::Entity")]
    BlocksTransactions,
}

impl Related<super::asset_descriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetDescriptions.def()
    }
}

impl Related<super::blocks_transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlocksTransactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
