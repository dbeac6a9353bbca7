use brandwatch_domain::{DashboardEvent, StatusChange};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::ports::EventNotifier;

struct Pending {
    changes: Vec<StatusChange>,
    timer: Option<JoinHandle<()>>,
    generation: u64,
}

impl Pending {
    /// Takes the buffered changes and disarms the timer.
    fn drain(&mut self) -> Vec<StatusChange> {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        std::mem::take(&mut self.changes)
    }
}

/// Batches status-change notifications into `domains:bulk-nawala-updated` events.
///
/// A batch is flushed when `threshold` changes are pending, or once `window`
/// has passed without a new change (debounce). At most one flush timer is
/// armed at any time and every flush disarms it. Batches are published while
/// the pending lock is held, so the notifier sees them in drain order. The
/// timer runs on tokio's clock, so a paused runtime drives it deterministically.
pub struct BroadcastCoalescer {
    notifier: Arc<dyn EventNotifier>,
    threshold: usize,
    window: Duration,
    pending: Arc<Mutex<Pending>>,
}

impl BroadcastCoalescer {
    pub fn new(notifier: Arc<dyn EventNotifier>, threshold: usize, window: Duration) -> Self {
        Self {
            notifier,
            threshold: threshold.max(1),
            window,
            pending: Arc::new(Mutex::new(Pending {
                changes: Vec::new(),
                timer: None,
                generation: 0,
            })),
        }
    }

    /// Buffers one change. Must be called from within a tokio runtime.
    pub fn enqueue(&self, change: StatusChange) {
        let mut pending = lock(&self.pending);
        pending.changes.push(change);

        if pending.changes.len() >= self.threshold {
            let batch = pending.drain();
            debug!(count = batch.len(), "Flush threshold reached");
            emit(self.notifier.as_ref(), batch);
            return;
        }

        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }
        pending.generation = pending.generation.wrapping_add(1);
        let generation = pending.generation;

        let shared = Arc::clone(&self.pending);
        let notifier = Arc::clone(&self.notifier);
        let window = self.window;
        pending.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;

            let mut pending = lock(&shared);
            if pending.generation != generation {
                return;
            }
            pending.timer = None;
            let batch = std::mem::take(&mut pending.changes);
            debug!(count = batch.len(), "Flush window elapsed");
            emit(notifier.as_ref(), batch);
        }));
    }

    /// Emits whatever is pending right now and disarms the timer.
    pub fn flush(&self) {
        let mut pending = lock(&self.pending);
        let batch = pending.drain();
        emit(self.notifier.as_ref(), batch);
    }

    pub fn pending_len(&self) -> usize {
        lock(&self.pending).changes.len()
    }

    pub fn has_timer(&self) -> bool {
        lock(&self.pending).timer.is_some()
    }
}

impl Drop for BroadcastCoalescer {
    fn drop(&mut self) {
        if let Some(timer) = lock(&self.pending).timer.take() {
            timer.abort();
        }
    }
}

fn emit(notifier: &dyn EventNotifier, updates: Vec<StatusChange>) {
    if updates.is_empty() {
        return;
    }
    let count = updates.len();
    notifier.publish(DashboardEvent::BulkNawalaUpdated { updates, count });
}

fn lock(pending: &Mutex<Pending>) -> MutexGuard<'_, Pending> {
    pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
