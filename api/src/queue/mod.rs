//! In-process job queue feeding transactions to the asset loader

pub mod asset_loader_queue;
pub mod asset_loader_worker;

pub use asset_loader_queue::{AssetLoadJob, AssetLoaderQueue, QueueError, QueueMetrics, QueueStats};
pub use asset_loader_worker::AssetLoaderWorker;
