use brandwatch_application::use_cases::StatusUpdateRequest;
use brandwatch_domain::{DomainError, DomainRecord, ScanObservation, StatusChange};
use serde::{Deserialize, Serialize};

const MISSING_FIELDS: &str = "Missing required fields: id, scanResult.status";
const DEFAULT_CHECK_MODE: &str = "full";

/// A domain as listed for the checking system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerUrl {
    pub id: String,
    pub brand: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    pub noto: String,
}

impl CheckerUrl {
    pub fn from_record(record: &DomainRecord) -> Self {
        let brand = record
            .brand
            .as_ref()
            .map(|b| {
                if b.name.is_empty() {
                    b.code.to_string()
                } else {
                    b.name.to_string()
                }
            })
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            id: record.id.to_string(),
            brand,
            domain: record.domain.to_string(),
            noto: record
                .note
                .as_ref()
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }
}

/// The checker echoes ids back as strings; numbers are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    pub fn parse(&self) -> Result<i64, DomainError> {
        match self {
            RecordId::Number(n) => Ok(*n),
            RecordId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| DomainError::InvalidInput(format!("Invalid domain id '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanResult {
    pub status: Option<String>,
    #[serde(rename = "blockedId")]
    pub blocked_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateBody {
    pub id: Option<RecordId>,
    #[serde(rename = "scanResult")]
    pub scan_result: Option<ScanResult>,
}

impl StatusUpdateBody {
    pub fn into_request(self) -> Result<StatusUpdateRequest, DomainError> {
        let missing = || DomainError::InvalidInput(MISSING_FIELDS.to_string());

        let id = self.id.ok_or_else(missing)?.parse()?;
        let scan = self.scan_result.ok_or_else(missing)?;
        let status = scan
            .status
            .filter(|s| !s.is_empty())
            .ok_or_else(missing)?;

        Ok(StatusUpdateRequest {
            id,
            observation: ScanObservation::from_status(&status, scan.blocked_id),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub message: String,
    pub data: StatusChange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkStatusUpdateRequest {
    #[serde(default)]
    pub updates: Vec<StatusUpdateBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkCheckRequest {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    DEFAULT_CHECK_MODE.to_string()
}
