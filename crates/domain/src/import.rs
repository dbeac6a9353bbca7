use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing row number = zero-based index + this offset (1-based rows, one header row).
pub const HEADER_ROW_OFFSET: usize = 2;

/// One record of a bulk import batch, as parsed from the source CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ImportRow {
    pub fn new(domain: &str, brand: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            brand: Some(brand.to_string()),
            note: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    #[serde(rename = "already exists")]
    AlreadyExists,
    #[serde(rename = "duplicate in batch")]
    DuplicateInBatch,
}

impl SkipReason {
    pub fn to_str(&self) -> &'static str {
        match self {
            SkipReason::AlreadyExists => "already exists",
            SkipReason::DuplicateInBatch => "duplicate in batch",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSuccess {
    pub row: usize,
    pub domain: String,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub row: usize,
    pub domain: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSkip {
    pub row: usize,
    pub domain: String,
    pub reason: SkipReason,
}

/// Per-run outcome. Every input row lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub success: Vec<ImportSuccess>,
    pub failed: Vec<ImportFailure>,
    pub skipped: Vec<ImportSkip>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.success.len() + self.failed.len() + self.skipped.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Import completed: {} added, {} skipped, {} failed",
            self.success.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}
