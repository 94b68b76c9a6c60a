use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub identifier: String,
    pub name: String,
    pub metadata: String,
    pub owner: String,
    /// Sum of active mints minus active burns
    pub supply: Decimal,
    pub created_transaction_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asset_descriptions::Entity")]
    AssetDescriptions,
    #[sea_orm(
        belongs_to = "super::transactions::Entity",
        from = "Column::CreatedTransactionId",
        to = "super::transactions::Column::Id"
    )]
    CreatedTransaction,
}

impl Related<super::asset_descriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetDescriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
