use brandwatch_domain::{
    BlockStatus, DomainError, DomainFilter, DomainRecord, DomainUpdate, EdgeCacheStatus,
    IndexStatus, StatusPatch, UptimeStatus,
};
use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: u32 = 50;
const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsQuery {
    pub brand: Option<i64>,
    /// Block status filter: `blocked`, `not_blocked` or `unknown`.
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl DomainsQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn to_filter(&self) -> Result<DomainFilter, DomainError> {
        let block_status = match self.status.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<BlockStatus>()
                    .map_err(DomainError::InvalidInput)?,
            ),
            None => None,
        };
        let limit = self.limit();

        Ok(DomainFilter {
            brand_id: self.brand,
            block_status,
            search: self.search.clone(),
            limit,
            offset: (self.page() - 1).saturating_mul(limit),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainRecord>,
    pub total: u64,
    pub total_blocked: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDomainRequest {
    pub domain: String,
    #[serde(alias = "brand")]
    pub brand_id: i64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDomainRequest {
    pub domain: Option<String>,
    #[serde(alias = "brand")]
    pub brand_id: Option<i64>,
    pub note: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateDomainRequest {
    pub fn into_update(self) -> DomainUpdate {
        DomainUpdate {
            domain: self.domain,
            brand_id: self.brand_id,
            note: self.note,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NawalaPatch {
    pub status: BlockStatus,
    pub blocked_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusPatchRequest {
    pub uptime: Option<UptimeStatus>,
    pub nawala: Option<NawalaPatch>,
    pub cloudflare: Option<EdgeCacheStatus>,
    pub google: Option<IndexStatus>,
}

impl StatusPatchRequest {
    pub fn into_patch(self) -> StatusPatch {
        StatusPatch {
            uptime: self.uptime,
            nawala: self.nawala.map(|n| (n.status, n.blocked_id)),
            cloudflare: self.cloudflare,
            google: self.google,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub message: String,
    pub count: u64,
}
