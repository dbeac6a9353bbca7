use brandwatch_domain::{
    BlockFacet, BrandSummary, DomainRecord, DomainStatus, StatusFacet,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(sqlx::FromRow)]
pub(crate) struct DomainRow {
    id: i64,
    domain: String,
    brand_id: i64,
    note: Option<String>,
    uptime_status: String,
    uptime_checked_at: Option<String>,
    nawala_status: String,
    nawala_blocked_id: Option<String>,
    nawala_checked_at: Option<String>,
    cloudflare_status: String,
    cloudflare_checked_at: Option<String>,
    google_status: String,
    google_checked_at: Option<String>,
    is_active: i64,
    created_by: Option<String>,
    updated_by: Option<String>,
    created_at: String,
    updated_at: String,
    brand_name: Option<String>,
    brand_code: Option<String>,
    brand_color: Option<String>,
}

pub(crate) const DOMAIN_SELECT: &str = "SELECT d.id, d.domain, d.brand_id, d.note,
            d.uptime_status, d.uptime_checked_at,
            d.nawala_status, d.nawala_blocked_id, d.nawala_checked_at,
            d.cloudflare_status, d.cloudflare_checked_at,
            d.google_status, d.google_checked_at,
            d.is_active, d.created_by, d.updated_by, d.created_at, d.updated_at,
            b.name AS brand_name, b.code AS brand_code, b.color AS brand_color
     FROM domains d
     LEFT JOIN brands b ON b.id = d.brand_id";

pub(crate) fn format_checked_at(at: &Option<DateTime<Utc>>) -> Option<String> {
    at.map(|t| t.to_rfc3339())
}

fn parse_checked_at(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|t| t.with_timezone(&Utc))
}

impl DomainRow {
    pub(crate) fn into_record(self) -> DomainRecord {
        let brand = match (self.brand_name, self.brand_code, self.brand_color) {
            (Some(name), Some(code), Some(color)) => Some(BrandSummary {
                id: self.brand_id,
                name: Arc::from(name.as_str()),
                code: Arc::from(code.as_str()),
                color: Arc::from(color.as_str()),
            }),
            _ => None,
        };

        let nawala_status = self.nawala_status.parse().unwrap_or_default();

        DomainRecord {
            id: self.id,
            domain: Arc::from(self.domain.as_str()),
            brand_id: self.brand_id,
            brand,
            note: self.note.map(|s| Arc::from(s.as_str())),
            status: DomainStatus {
                uptime: StatusFacet {
                    status: self.uptime_status.parse().unwrap_or_default(),
                    last_checked: parse_checked_at(self.uptime_checked_at),
                },
                nawala: BlockFacet {
                    status: nawala_status,
                    blocked_id: self.nawala_blocked_id,
                    last_checked: parse_checked_at(self.nawala_checked_at),
                },
                cloudflare: StatusFacet {
                    status: self.cloudflare_status.parse().unwrap_or_default(),
                    last_checked: parse_checked_at(self.cloudflare_checked_at),
                },
                google: StatusFacet {
                    status: self.google_status.parse().unwrap_or_default(),
                    last_checked: parse_checked_at(self.google_checked_at),
                },
            },
            is_active: self.is_active != 0,
            created_by: self.created_by.map(|s| Arc::from(s.as_str())),
            updated_by: self.updated_by.map(|s| Arc::from(s.as_str())),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}
