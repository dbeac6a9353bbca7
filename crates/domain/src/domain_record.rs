use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::brand::BrandSummary;
use crate::status::{BlockStatus, DomainStatus};

const MAX_NOTE_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: i64,
    /// Canonical domain key: lowercase host plus optional path.
    pub domain: Arc<str>,
    pub brand_id: i64,
    pub brand: Option<BrandSummary>,
    pub note: Option<Arc<str>>,
    pub status: DomainStatus,
    pub is_active: bool,
    pub created_by: Option<Arc<str>>,
    pub updated_by: Option<Arc<str>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl DomainRecord {
    pub fn validate_note(note: &Option<String>) -> Result<(), String> {
        if let Some(n) = note {
            if n.chars().count() > MAX_NOTE_LEN {
                return Err(format!("Note cannot exceed {} characters", MAX_NOTE_LEN));
            }
        }
        Ok(())
    }
}

/// A record staged for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDomain {
    pub domain: String,
    pub brand_id: i64,
    pub note: Option<String>,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainUpdate {
    pub domain: Option<String>,
    pub brand_id: Option<i64>,
    pub note: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFilter {
    pub brand_id: Option<i64>,
    pub block_status: Option<BlockStatus>,
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl Default for DomainFilter {
    fn default() -> Self {
        Self {
            brand_id: None,
            block_status: None,
            search: None,
            limit: 50,
            offset: 0,
        }
    }
}
