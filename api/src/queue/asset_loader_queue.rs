//! Queue of asset load jobs
//!
//! Jobs are delivered in enqueue order to a single [`AssetLoaderWorker`].
//! The queue handle is cheap to clone; the worker stops once every handle
//! has been dropped and the remaining jobs are drained.
//!
//! [`AssetLoaderWorker`]: super::AssetLoaderWorker

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::models::TransactionDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueueError {
    #[error("Asset loader queue channel is closed")]
    ChannelClosed,
}

/// Reconcile one transaction against its chain status
#[derive(Debug, Clone)]
pub struct AssetLoadJob {
    pub id: Uuid,
    pub is_main_chain: bool,
    pub transaction: TransactionDto,
}

impl AssetLoadJob {
    pub fn new(is_main_chain: bool, transaction: TransactionDto) -> Self {
        Self {
            id: Uuid::new_v4(),
            is_main_chain,
            transaction,
        }
    }
}

/// Snapshot of queue counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueMetrics {
    pub total_enqueued: u64,
    pub total_processed: u64,
    pub processing_errors: u64,
    pub current_queue_size: u64,
}

#[derive(Debug, Default)]
struct Counters {
    enqueued: AtomicU64,
    processed: AtomicU64,
    errors: AtomicU64,
}

/// Counter handle shared by the queue and its worker. Holds no sender, so the
/// worker keeping one does not keep the channel open.
#[derive(Debug, Clone, Default)]
pub struct QueueStats {
    counters: Arc<Counters>,
}

impl QueueStats {
    pub(crate) fn mark_enqueued(&self) {
        self.counters.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn mark_processed(&self) {
        self.counters.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// A job that exhausted its retries still counts as processed
    pub(crate) fn mark_error(&self) {
        self.counters.errors.fetch_add(1, Ordering::Relaxed);
        self.counters.processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn metrics(&self) -> QueueMetrics {
        let total_enqueued = self.counters.enqueued.load(Ordering::Relaxed);
        let total_processed = self.counters.processed.load(Ordering::Relaxed);
        QueueMetrics {
            total_enqueued,
            total_processed,
            processing_errors: self.counters.errors.load(Ordering::Relaxed),
            current_queue_size: total_enqueued.saturating_sub(total_processed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetLoaderQueue {
    sender: mpsc::UnboundedSender<AssetLoadJob>,
    stats: QueueStats,
}

impl AssetLoaderQueue {
    /// Create the queue together with the receiving end for the worker
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AssetLoadJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let queue = Self {
            sender,
            stats: QueueStats::default(),
        };
        (queue, receiver)
    }

    pub fn enqueue(&self, job: AssetLoadJob) -> Result<Uuid, QueueError> {
        let id = job.id;
        self.sender.send(job).map_err(|_| QueueError::ChannelClosed)?;
        self.stats.mark_enqueued();
        Ok(id)
    }

    /// False once the worker has stopped receiving
    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }

    pub fn stats(&self) -> QueueStats {
        self.stats.clone()
    }

    pub fn metrics(&self) -> QueueMetrics {
        self.stats.metrics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(hash: &str) -> TransactionDto {
        TransactionDto {
            hash: hash.to_string(),
            fee: 1,
            size: 10,
            notes: vec![],
            spends: vec![],
            mints: vec![],
            burns: vec![],
        }
    }

    #[tokio::test]
    async fn delivers_jobs_in_enqueue_order() {
        let (queue, mut receiver) = AssetLoaderQueue::new();

        let first = queue.enqueue(AssetLoadJob::new(true, transaction("a"))).unwrap();
        let second = queue.enqueue(AssetLoadJob::new(false, transaction("b"))).unwrap();

        let job = receiver.recv().await.unwrap();
        assert_eq!(job.id, first);
        assert!(job.is_main_chain);
        let job = receiver.recv().await.unwrap();
        assert_eq!(job.id, second);
        assert_eq!(job.transaction.hash, "b");

        assert_eq!(queue.metrics().total_enqueued, 2);
        assert_eq!(queue.metrics().current_queue_size, 2);
    }

    #[tokio::test]
    async fn enqueue_fails_once_receiver_is_gone() {
        let (queue, receiver) = AssetLoaderQueue::new();
        drop(receiver);

        let result = queue.enqueue(AssetLoadJob::new(true, transaction("a")));

        assert_eq!(result, Err(QueueError::ChannelClosed));
        assert!(!queue.is_open());
        assert_eq!(queue.metrics().total_enqueued, 0);
    }

    #[test]
    fn failed_jobs_leave_the_queue() {
        let (queue, _receiver) = AssetLoaderQueue::new();
        let stats = queue.stats();
        stats.mark_enqueued();
        stats.mark_enqueued();
        stats.mark_processed();
        stats.mark_error();

        let metrics = queue.metrics();
        assert_eq!(metrics.total_processed, 2);
        assert_eq!(metrics.processing_errors, 1);
        assert_eq!(metrics.current_queue_size, 0);
    }
}
