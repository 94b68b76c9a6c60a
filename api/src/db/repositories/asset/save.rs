//! Save operations for asset repository

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait, NotSet, Set};

use super::query;
use crate::db::error::DbError;
use crate::entity::{assets, prelude::*};

/// Fields taken from the first mint seen for an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub identifier: String,
    pub name: String,
    pub metadata: String,
    pub owner: String,
}

/// Insert the asset if its identifier is unknown, otherwise leave the row untouched.
///
/// The first mint wins: name, metadata, owner and the creating transaction are
/// never overwritten by later mints. Supply starts at zero and is only moved by
/// [`super::update_supply`].
pub async fn upsert<C: ConnectionTrait>(
    db: &C,
    asset: &NewAsset,
    created_transaction_id: i32,
) -> Result<assets::Model, DbError> {
    let now = Utc::now();

    let active_model = assets::ActiveModel {
        id: NotSet,
        identifier: Set(asset.identifier.clone()),
        name: Set(asset.name.clone()),
        metadata: Set(asset.metadata.clone()),
        owner: Set(asset.owner.clone()),
        supply: Set(Decimal::ZERO),
        created_transaction_id: Set(created_transaction_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Assets::insert(active_model)
        .on_conflict(
            OnConflict::column(assets::Column::Identifier)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    query::find_by_identifier(db, &asset.identifier)
        .await?
        .ok_or_else(|| {
            DbError::Inconsistent(format!(
                "asset {} missing after upsert",
                asset.identifier
            ))
        })
}
