// Asset and asset description responses

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::asset_descriptions::{self, AssetDescriptionType};
use crate::entity::assets;

/// Asset as served by the API. Supply is a decimal string.
#[derive(Debug, Clone, Serialize)]
pub struct AssetResponse {
    pub object: &'static str,
    pub id: i32,
    pub identifier: String,
    pub name: String,
    pub metadata: String,
    pub owner: String,
    pub supply: String,
    pub created_transaction_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AssetResponse {
    pub fn from_model(asset: assets::Model, created_transaction_hash: Option<String>) -> Self {
        Self {
            object: "asset",
            id: asset.id,
            identifier: asset.identifier,
            name: asset.name,
            metadata: asset.metadata,
            owner: asset.owner,
            supply: asset.supply.normalize().to_string(),
            created_transaction_hash,
            created_at: asset.created_at,
        }
    }
}

/// One mint or burn as served by the API
#[derive(Debug, Clone, Serialize)]
pub struct AssetDescriptionResponse {
    pub object: &'static str,
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: AssetDescriptionType,
    pub value: String,
    pub asset_id: i32,
    pub transaction_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AssetDescriptionResponse {
    pub fn from_model(
        description: asset_descriptions::Model,
        transaction_hash: Option<String>,
    ) -> Self {
        Self {
            object: "asset_description",
            id: description.id,
            kind: description.r#type,
            value: description.value.normalize().to_string(),
            asset_id: description.asset_id,
            transaction_hash,
            created_at: description.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn serializes_asset_with_string_supply() {
        let now = Utc::now();
        let asset = assets::Model {
            id: 7,
            identifier: "abc".to_string(),
            name: "Coin".to_string(),
            metadata: "".to_string(),
            owner: "owner".to_string(),
            supply: Decimal::new(120000, 4),
            created_transaction_id: 3,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(AssetResponse::from_model(asset, Some("t1".into()))).unwrap();

        assert_eq!(value["object"], json!("asset"));
        assert_eq!(value["supply"], json!("12"));
        assert_eq!(value["created_transaction_hash"], json!("t1"));
    }

    #[test]
    fn serializes_description_type_under_type_key() {
        let description = asset_descriptions::Model {
            id: 1,
            r#type: AssetDescriptionType::Burn,
            value: Decimal::from(5),
            asset_id: 7,
            transaction_id: 3,
            created_at: Utc::now(),
        };

        let value =
            serde_json::to_value(AssetDescriptionResponse::from_model(description, None)).unwrap();

        assert_eq!(value["type"], json!("BURN"));
        assert_eq!(value["value"], json!("5"));
        assert_eq!(value["transaction_hash"], json!(null));
    }
}
