//! Query operations for asset repository

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::db::error::DbError;
use crate::entity::{assets, prelude::*};

/// Find asset by identifier
pub async fn find_by_identifier<C: ConnectionTrait>(
    db: &C,
    identifier: &str,
) -> Result<Option<assets::Model>, DbError> {
    let asset = Assets::find()
        .filter(assets::Column::Identifier.eq(identifier))
        .one(db)
        .await?;

    Ok(asset)
}

/// Find asset by primary key
pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<Option<assets::Model>, DbError> {
    Ok(Assets::find_by_id(id).one(db).await?)
}
