//! Entity module for database models

pub mod asset_descriptions;
pub mod assets;
pub mod blocks;
pub mod blocks_transactions;
pub mod prelude;
pub mod transactions;
