//! Supply management operations for assets

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::db::error::DbError;
use crate::entity::{assets, prelude::*};

/// Add a signed delta to an asset's supply.
///
/// Issued as `supply = supply + delta` so the read-modify-write happens under
/// the row lock of the surrounding transaction. Negative results are stored as-is.
pub async fn update_supply<C: ConnectionTrait>(
    db: &C,
    asset_id: i32,
    delta: Decimal,
) -> Result<(), DbError> {
    if delta.is_zero() {
        return Ok(());
    }

    let result = Assets::update_many()
        .col_expr(
            assets::Column::Supply,
            Expr::col(assets::Column::Supply).add(delta),
        )
        .col_expr(assets::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(assets::Column::Id.eq(asset_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(DbError::Inconsistent(format!(
            "asset {} vanished while updating supply",
            asset_id
        )));
    }

    Ok(())
}
