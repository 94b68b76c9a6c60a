//! Prelude module for convenient imports

pub use super::asset_descriptions::Entity as AssetDescriptions;
pub use super::assets::Entity as Assets;
pub use super::blocks::Entity as Blocks;
pub use super::blocks_transactions::Entity as BlocksTransactions;
pub use super::transactions::Entity as Transactions;
