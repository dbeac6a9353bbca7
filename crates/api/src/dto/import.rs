use brandwatch_domain::{ImportReport, ImportRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct BulkImportRequest {
    #[serde(default)]
    pub domains: Vec<ImportRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkImportResponse {
    pub message: String,
    pub data: ImportReport,
}

impl BulkImportResponse {
    pub fn from_report(report: ImportReport) -> Self {
        Self {
            message: report.summary(),
            data: report,
        }
    }
}
