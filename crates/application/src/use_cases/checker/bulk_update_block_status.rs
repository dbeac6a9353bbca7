use brandwatch_domain::{DashboardEvent, ScanObservation};
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::UpdateBlockStatusUseCase;
use crate::ports::EventNotifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdateRequest {
    pub id: i64,
    pub observation: ScanObservation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdateFailure {
    pub id: i64,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkStatusOutcome {
    pub success: usize,
    pub failed: Vec<StatusUpdateFailure>,
}

/// Applies many status observations in bounded concurrent groups.
///
/// Updates inside a chunk run concurrently; a chunk finishes completely
/// before the next one starts.
pub struct BulkUpdateBlockStatusUseCase {
    updater: Arc<UpdateBlockStatusUseCase>,
    notifier: Arc<dyn EventNotifier>,
    chunk_size: usize,
}

impl BulkUpdateBlockStatusUseCase {
    pub fn new(
        updater: Arc<UpdateBlockStatusUseCase>,
        notifier: Arc<dyn EventNotifier>,
        chunk_size: usize,
    ) -> Self {
        Self {
            updater,
            notifier,
            chunk_size: chunk_size.max(1),
        }
    }

    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub async fn execute(&self, requests: Vec<StatusUpdateRequest>) -> BulkStatusOutcome {
        let mut outcome = BulkStatusOutcome::default();

        for chunk in requests.chunks(self.chunk_size) {
            let results = join_all(chunk.iter().map(|req| {
                let updater = Arc::clone(&self.updater);
                let req = req.clone();
                async move { (req.id, updater.execute(req.id, req.observation).await) }
            }))
            .await;

            for (id, result) in results {
                match result {
                    Ok(_) => outcome.success += 1,
                    Err(e) => {
                        warn!(domain_id = id, error = %e, "Status update failed");
                        outcome.failed.push(StatusUpdateFailure {
                            id,
                            error: e.to_string(),
                        });
                    }
                }
            }
        }

        info!(
            success = outcome.success,
            failed = outcome.failed.len(),
            "Bulk status update completed"
        );

        self.notifier.publish(DashboardEvent::BulkCheckComplete {
            success: outcome.success,
            failed: outcome.failed.len(),
        });

        outcome
    }
}
