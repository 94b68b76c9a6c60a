//! Background worker draining the asset loader queue

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::config::AssetLoaderConfig;
use crate::db::LedgerStore;
use crate::queue::asset_loader_queue::{AssetLoadJob, QueueError, QueueStats};
use crate::services::asset_loader::AssetLoader;

/// Runs queued jobs one at a time, in order, retrying failures
pub struct AssetLoaderWorker<S> {
    loader: AssetLoader<S>,
    stats: QueueStats,
    config: AssetLoaderConfig,
    receiver: Option<mpsc::UnboundedReceiver<AssetLoadJob>>,
}

impl<S: LedgerStore> AssetLoaderWorker<S> {
    pub fn new(
        loader: AssetLoader<S>,
        stats: QueueStats,
        receiver: mpsc::UnboundedReceiver<AssetLoadJob>,
        config: AssetLoaderConfig,
    ) -> Self {
        Self {
            loader,
            stats,
            config,
            receiver: Some(receiver),
        }
    }

    /// Process jobs until every queue handle is dropped
    pub async fn start(mut self) -> Result<(), QueueError> {
        let mut receiver = self.receiver.take().ok_or(QueueError::ChannelClosed)?;

        tracing::info!(
            "Asset loader worker started (max_retries: {}, retry_delay: {:?})",
            self.config.max_retries,
            self.config.retry_delay
        );

        while let Some(job) = receiver.recv().await {
            self.process_job(&job).await;
        }

        let metrics = self.stats.metrics();
        tracing::info!(
            "Asset loader queue closed after {} jobs ({} failed), shutting down",
            metrics.total_processed,
            metrics.processing_errors
        );

        Ok(())
    }

    async fn process_job(&self, job: &AssetLoadJob) {
        let start_time = Instant::now();
        let max_attempts = self.config.max_retries + 1;
        let mut attempts = 0;

        loop {
            attempts += 1;

            match self
                .loader
                .load_descriptions(job.is_main_chain, &job.transaction)
                .await
            {
                Ok(()) => {
                    self.stats.mark_processed();
                    tracing::debug!(
                        "Job {} for transaction {} done in {:?} (attempt {})",
                        job.id,
                        job.transaction.hash,
                        start_time.elapsed(),
                        attempts
                    );
                    return;
                }
                Err(e) if attempts < max_attempts => {
                    tracing::warn!(
                        "Job {} for transaction {} failed (attempt {}/{}): {}",
                        job.id,
                        job.transaction.hash,
                        attempts,
                        max_attempts,
                        e
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                }
                Err(e) => {
                    self.stats.mark_error();
                    tracing::error!(
                        "Job {} for transaction {} failed after {} attempts, dropping it: {}",
                        job.id,
                        job.transaction.hash,
                        attempts,
                        e
                    );
                    return;
                }
            }
        }
    }
}
