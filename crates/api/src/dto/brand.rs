use brandwatch_domain::{Brand, BrandUpdate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct BrandsQuery {
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateBrandRequest {
    pub fn into_update(self) -> BrandUpdate {
        BrandUpdate {
            name: self.name,
            code: self.code,
            description: self.description,
            color: self.color,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub color: String,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub domain_count: Option<u64>,
}

impl BrandResponse {
    pub fn from_brand(b: Brand) -> Self {
        Self {
            id: b.id.unwrap_or(0),
            name: b.name.to_string(),
            code: b.code.to_string(),
            description: b.description.as_ref().map(|s| s.to_string()),
            color: b.color.to_string(),
            is_active: b.is_active,
            created_by: b.created_by.as_ref().map(|s| s.to_string()),
            created_at: b.created_at,
            updated_at: b.updated_at,
            domain_count: None,
        }
    }

    pub fn with_domain_count(mut self, count: u64) -> Self {
        self.domain_count = Some(count);
        self
    }
}
