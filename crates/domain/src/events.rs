use serde::Serialize;
use std::sync::Arc;

use crate::brand::BrandSummary;
use crate::domain_record::DomainRecord;
use crate::status::BlockFacet;

/// Block-status transition of one record, as pushed to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub domain_id: i64,
    pub domain: Arc<str>,
    pub nawala: BlockFacet,
    pub brand: Option<BrandSummary>,
}

impl StatusChange {
    pub fn from_record(record: &DomainRecord) -> Self {
        Self {
            domain_id: record.id,
            domain: record.domain.clone(),
            nawala: record.status.nawala.clone(),
            brand: record.brand.clone(),
        }
    }
}

/// Events pushed to every connected dashboard subscriber.
///
/// Serializes to the bare payload; the event name travels separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DashboardEvent {
    DomainCreated(DomainRecord),
    DomainUpdated(DomainRecord),
    DomainDeleted { id: i64 },
    NawalaUpdated(StatusChange),
    BulkNawalaUpdated { updates: Vec<StatusChange>, count: usize },
    BulkImported { count: usize },
    BulkDeleted { count: u64 },
    BulkCheckComplete { success: usize, failed: usize },
}

impl DashboardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardEvent::DomainCreated(_) => "domain:created",
            DashboardEvent::DomainUpdated(_) => "domain:updated",
            DashboardEvent::DomainDeleted { .. } => "domain:deleted",
            DashboardEvent::NawalaUpdated(_) => "domain:nawala-updated",
            DashboardEvent::BulkNawalaUpdated { .. } => "domains:bulk-nawala-updated",
            DashboardEvent::BulkImported { .. } => "domains:bulk-imported",
            DashboardEvent::BulkDeleted { .. } => "domains:bulk-deleted",
            DashboardEvent::BulkCheckComplete { .. } => "domains:bulk-check-complete",
        }
    }
}
