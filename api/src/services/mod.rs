// Business logic service implementations

pub mod asset_description_service;
pub mod asset_loader;
pub mod asset_service;
pub mod block_service;
pub mod health;
pub mod transaction_service;
