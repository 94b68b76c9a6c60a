// Handlers Module
// This module contains the API endpoint handlers

pub mod asset_descriptions;
pub mod assets;
pub mod blocks;
pub mod health;
pub mod transactions;

use std::sync::Arc;

use crate::db::Repositories;
use crate::queue::AssetLoaderQueue;

/// Shared state of every handler
pub struct ApiState {
    pub repositories: Repositories,
    pub asset_loader_queue: AssetLoaderQueue,
}

// Type alias for the application state
pub type AppState = Arc<ApiState>;

pub use asset_descriptions::get_asset_descriptions;
pub use assets::{find_asset, get_assets};
pub use blocks::{find_block, get_blocks, get_head, upsert_blocks};
pub use health::health_check;
pub use transactions::{find_transaction, get_transactions};
