use brandwatch_domain::{
    normalize_row, Actor, DashboardEvent, DomainError, DomainRecord, ImportFailure, ImportReport,
    ImportRow, ImportSkip, ImportSuccess, LogAction, NewDomain, HEADER_ROW_OFFSET,
};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{BrandRepository, DomainLogRepository, DomainRepository, EventNotifier};
use crate::services::{BrandResolver, DedupIndex};

const MISSING_DOMAIN_LABEL: &str = "N/A";

/// A row that passed validation, brand resolution and dedup, waiting for insertion.
struct StagedRow {
    row: usize,
    brand_label: String,
    record: NewDomain,
}

/// Bulk domain ingestion with partial-failure recovery.
///
/// Every input row ends up in exactly one bucket of the returned report.
/// Runs are serialized within the process; across processes the storage
/// uniqueness constraint decides, and the losing row is reported as failed.
pub struct BulkImportDomainsUseCase {
    domain_repo: Arc<dyn DomainRepository>,
    brand_repo: Arc<dyn BrandRepository>,
    log_repo: Arc<dyn DomainLogRepository>,
    notifier: Arc<dyn EventNotifier>,
    chunk_size: usize,
    run_lock: Mutex<()>,
}

impl BulkImportDomainsUseCase {
    pub fn new(
        domain_repo: Arc<dyn DomainRepository>,
        brand_repo: Arc<dyn BrandRepository>,
        log_repo: Arc<dyn DomainLogRepository>,
        notifier: Arc<dyn EventNotifier>,
        chunk_size: usize,
    ) -> Self {
        Self {
            domain_repo,
            brand_repo,
            log_repo,
            notifier,
            chunk_size: chunk_size.max(1),
            run_lock: Mutex::new(()),
        }
    }

    #[instrument(skip(self, actor, rows), fields(actor = %actor.name, rows = rows.len()))]
    pub async fn execute(
        &self,
        actor: &Actor,
        rows: Vec<ImportRow>,
    ) -> Result<ImportReport, DomainError> {
        actor.require_editor()?;

        if rows.is_empty() {
            return Err(DomainError::InvalidInput("No domains provided".to_string()));
        }

        let _run = self.run_lock.lock().await;

        let brands = self.brand_repo.get_all(None).await?;
        let resolver = BrandResolver::new(&brands);
        let index = DedupIndex::new(self.domain_repo.all_keys().await?);

        debug!(
            brand_labels = resolver.len(),
            existing_keys = index.existing_len(),
            "Import snapshot loaded"
        );

        let mut report = ImportReport::default();
        let staged = self.stage_rows(&rows, &resolver, index, actor, &mut report);

        info!(
            staged = staged.len(),
            chunks = staged.len().div_ceil(self.chunk_size),
            "Starting chunked insert"
        );

        let mut inserted_keys = Vec::with_capacity(staged.len());
        for chunk in staged.chunks(self.chunk_size) {
            self.insert_chunk(chunk, &mut report, &mut inserted_keys)
                .await;
        }

        report.success.sort_by_key(|s| s.row);
        report.failed.sort_by_key(|f| f.row);

        if !inserted_keys.is_empty() {
            if let Err(e) = self
                .log_repo
                .append_many(&inserted_keys, LogAction::Add, &actor.name)
                .await
            {
                warn!(error = %e, count = inserted_keys.len(), "Failed to write import logs");
            }

            self.notifier.publish(DashboardEvent::BulkImported {
                count: report.success.len(),
            });
        }

        info!(
            added = report.success.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Bulk import completed"
        );

        Ok(report)
    }

    /// Validates, dedups and resolves every row in source order.
    fn stage_rows(
        &self,
        rows: &[ImportRow],
        resolver: &BrandResolver,
        mut index: DedupIndex,
        actor: &Actor,
        report: &mut ImportReport,
    ) -> Vec<StagedRow> {
        let mut staged = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let row_number = i + HEADER_ROW_OFFSET;

            let normalized = match normalize_row(row.domain.as_deref(), row.brand.as_deref()) {
                Ok(n) => n,
                Err(e) => {
                    report.failed.push(ImportFailure {
                        row: row_number,
                        domain: raw_domain(row),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            if let Err(reason) = index.check(&normalized.key) {
                report.skipped.push(ImportSkip {
                    row: row_number,
                    domain: normalized.key,
                    reason,
                });
                continue;
            }

            let brand_id = match resolver.resolve(&normalized.brand_label) {
                Ok(id) => id,
                Err(e) => {
                    report.failed.push(ImportFailure {
                        row: row_number,
                        domain: normalized.key,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            let note = row
                .note
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string);
            if let Err(e) = DomainRecord::validate_note(&note) {
                report.failed.push(ImportFailure {
                    row: row_number,
                    domain: normalized.key,
                    error: e,
                });
                continue;
            }

            index.stage(&normalized.key);
            staged.push(StagedRow {
                row: row_number,
                brand_label: normalized.brand_label,
                record: NewDomain {
                    domain: normalized.key,
                    brand_id,
                    note,
                    created_by: actor.name.to_string(),
                },
            });
        }

        staged
    }

    async fn insert_chunk(
        &self,
        chunk: &[StagedRow],
        report: &mut ImportReport,
        inserted_keys: &mut Vec<String>,
    ) {
        let records: Vec<NewDomain> = chunk.iter().map(|s| s.record.clone()).collect();

        match self.domain_repo.insert_many(&records).await {
            Ok(inserted) => {
                let confirmed: HashSet<&str> =
                    inserted.iter().map(|r| r.domain.as_ref()).collect();

                for item in chunk {
                    if confirmed.contains(item.record.domain.as_str()) {
                        record_success(item, report, inserted_keys);
                    } else {
                        debug!(
                            domain = %item.record.domain,
                            row = item.row,
                            "Row not confirmed by bulk insert, retrying individually"
                        );
                        self.insert_single(item, report, inserted_keys).await;
                    }
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    first_row = chunk.first().map(|s| s.row).unwrap_or_default(),
                    size = chunk.len(),
                    "Bulk insert failed, falling back to individual inserts"
                );
                for item in chunk {
                    self.insert_single(item, report, inserted_keys).await;
                }
            }
        }
    }

    async fn insert_single(
        &self,
        item: &StagedRow,
        report: &mut ImportReport,
        inserted_keys: &mut Vec<String>,
    ) {
        match self.domain_repo.create(item.record.clone()).await {
            Ok(_) => record_success(item, report, inserted_keys),
            Err(e) => {
                error!(
                    error = %e,
                    domain = %item.record.domain,
                    row = item.row,
                    "Failed to insert domain"
                );
                report.failed.push(ImportFailure {
                    row: item.row,
                    domain: item.record.domain.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
}

fn record_success(item: &StagedRow, report: &mut ImportReport, inserted_keys: &mut Vec<String>) {
    report.success.push(ImportSuccess {
        row: item.row,
        domain: item.record.domain.clone(),
        brand: item.brand_label.clone(),
    });
    inserted_keys.push(item.record.domain.clone());
}

fn raw_domain(row: &ImportRow) -> String {
    row.domain
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(MISSING_DOMAIN_LABEL)
        .to_string()
}
