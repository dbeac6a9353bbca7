use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_BRAND_COLOR: &str = "#3B82F6";

const MAX_NAME_LEN: usize = 50;
const MAX_CODE_LEN: usize = 20;
const MAX_DESCRIPTION_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub code: Arc<str>,
    pub description: Option<Arc<str>>,
    pub color: Arc<str>,
    pub is_active: bool,
    pub created_by: Option<Arc<str>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Brand {
    pub fn summary(&self) -> Option<BrandSummary> {
        Some(BrandSummary {
            id: self.id?,
            name: self.name.clone(),
            code: self.code.clone(),
            color: self.color.clone(),
        })
    }

    /// Brand names and codes are unique after trimming and uppercasing.
    pub fn canonical_label(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("Brand name is required".to_string());
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(format!(
                "Brand name cannot exceed {} characters",
                MAX_NAME_LEN
            ));
        }
        Ok(())
    }

    pub fn validate_code(code: &str) -> Result<(), String> {
        if code.is_empty() {
            return Err("Brand code is required".to_string());
        }
        if code.chars().count() > MAX_CODE_LEN {
            return Err(format!(
                "Brand code cannot exceed {} characters",
                MAX_CODE_LEN
            ));
        }
        Ok(())
    }

    pub fn validate_color(color: &str) -> Result<(), String> {
        let valid = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err("Please provide a valid hex color".to_string());
        }
        Ok(())
    }

    pub fn validate_description(description: &Option<String>) -> Result<(), String> {
        if let Some(d) = description {
            if d.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(format!(
                    "Description cannot exceed {} characters",
                    MAX_DESCRIPTION_LEN
                ));
            }
        }
        Ok(())
    }
}

/// Brand fields embedded in domain records and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSummary {
    pub id: i64,
    pub name: Arc<str>,
    pub code: Arc<str>,
    pub color: Arc<str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBrand {
    pub name: String,
    pub code: String,
    pub description: String,
    pub color: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}
