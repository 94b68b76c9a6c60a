use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether a description added to or removed from an asset's supply
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(8))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetDescriptionType {
    #[sea_orm(string_value = "MINT")]
    Mint,
    #[sea_orm(string_value = "BURN")]
    Burn,
}

impl AssetDescriptionType {
    /// Signed supply change this description applied
    pub fn applied_delta(self, value: Decimal) -> Decimal {
        match self {
            AssetDescriptionType::Mint => value,
            AssetDescriptionType::Burn => -value,
        }
    }

    /// Signed supply change that cancels this description
    pub fn reversing_delta(self, value: Decimal) -> Decimal {
        -self.applied_delta(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_descriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub r#type: AssetDescriptionType,
    pub value: Decimal,
    pub asset_id: i32,
    pub transaction_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assets::Entity",
        from = "Column::AssetId",
        to = "super::assets::Column::Id"
    )]
    Assets,
    #[sea_orm(
        belongs_to = "super::transactions::Entity",
        from = "Column::TransactionId",
        to = "super::transactions::Column::Id"
    )]
    Transactions,
}

impl Related<super::assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assets.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversing_delta_cancels_applied_delta() {
        let value = Decimal::from(42);

        assert_eq!(AssetDescriptionType::Mint.applied_delta(value), Decimal::from(42));
        assert_eq!(AssetDescriptionType::Mint.reversing_delta(value), Decimal::from(-42));
        assert_eq!(AssetDescriptionType::Burn.applied_delta(value), Decimal::from(-42));
        assert_eq!(AssetDescriptionType::Burn.reversing_delta(value), Decimal::from(42));
    }

    #[test]
    fn serializes_type_in_upper_case() {
        assert_eq!(
            serde_json::to_string(&AssetDescriptionType::Mint).unwrap(),
            "\"MINT\""
        );
        assert_eq!(
            serde_json::to_string(&AssetDescriptionType::Burn).unwrap(),
            "\"BURN\""
        );
    }
}
