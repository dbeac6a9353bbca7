use async_trait::async_trait;
use brandwatch_application::ports::BrandRepository;
use brandwatch_domain::{Brand, BrandUpdate, DomainError, NewBrand};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::{is_unique_violation, now_timestamp};

type BrandRow = (
    i64,
    String,
    String,
    Option<String>,
    String,
    i64,
    Option<String>,
    String,
    String,
);

const BRAND_COLUMNS: &str =
    "id, name, code, description, color, is_active, created_by, created_at, updated_at";

pub struct SqliteBrandRepository {
    pool: SqlitePool,
}

impl SqliteBrandRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_brand(row: BrandRow) -> Brand {
        let (id, name, code, description, color, is_active, created_by, created_at, updated_at) =
            row;
        Brand {
            id: Some(id),
            name: Arc::from(name.as_str()),
            code: Arc::from(code.as_str()),
            description: description.map(|s| Arc::from(s.as_str())),
            color: Arc::from(color.as_str()),
            is_active: is_active != 0,
            created_by: created_by.map(|s| Arc::from(s.as_str())),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    fn map_write_error(e: sqlx::Error, name: &str, code: &str) -> DomainError {
        if is_unique_violation(&e) {
            DomainError::DuplicateKey(format!(
                "Brand with name '{}' or code '{}' already exists",
                name, code
            ))
        } else {
            error!(error = %e, "Failed to write brand");
            DomainError::PersistenceFault(e.to_string())
        }
    }
}

#[async_trait]
impl BrandRepository for SqliteBrandRepository {
    #[instrument(skip(self))]
    async fn create(&self, brand: NewBrand) -> Result<Brand, DomainError> {
        let now = now_timestamp();

        let row = sqlx::query_as::<_, BrandRow>(&format!(
            "INSERT INTO brands (name, code, description, color, is_active, created_by, created_at, updated_at)
             VALUES (?, ?, ?, ?, 1, ?, ?, ?)
             RETURNING {}",
            BRAND_COLUMNS
        ))
        .bind(&brand.name)
        .bind(&brand.code)
        .bind(&brand.description)
        .bind(&brand.color)
        .bind(&brand.created_by)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &brand.name, &brand.code))?;

        Ok(Self::row_to_brand(row))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Brand>, DomainError> {
        let row = sqlx::query_as::<_, BrandRow>(&format!(
            "SELECT {} FROM brands WHERE id = ?",
            BRAND_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query brand by id");
            DomainError::PersistenceFault(e.to_string())
        })?;

        Ok(row.map(Self::row_to_brand))
    }

    #[instrument(skip(self))]
    async fn get_all(&self, active: Option<bool>) -> Result<Vec<Brand>, DomainError> {
        let rows = match active {
            Some(active) => {
                sqlx::query_as::<_, BrandRow>(&format!(
                    "SELECT {} FROM brands WHERE is_active = ? ORDER BY name ASC",
                    BRAND_COLUMNS
                ))
                .bind(if active { 1i64 } else { 0i64 })
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, BrandRow>(&format!(
                    "SELECT {} FROM brands ORDER BY name ASC",
                    BRAND_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            error!(error = %e, "Failed to query brands");
            DomainError::PersistenceFault(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_brand).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, update: BrandUpdate) -> Result<Brand, DomainError> {
        let current = self
            .get_by_id(id)
            .await?
            .ok_or(DomainError::BrandNotFound(id))?;

        let name = update.name.unwrap_or_else(|| current.name.to_string());
        let code = update.code.unwrap_or_else(|| current.code.to_string());
        let description: Option<String> = update
            .description
            .or_else(|| current.description.as_ref().map(|s| s.to_string()));
        let color = update.color.unwrap_or_else(|| current.color.to_string());
        let is_active = update.is_active.unwrap_or(current.is_active);

        let row = sqlx::query_as::<_, BrandRow>(&format!(
            "UPDATE brands
             SET name = ?, code = ?, description = ?, color = ?, is_active = ?, updated_at = ?
             WHERE id = ?
             RETURNING {}",
            BRAND_COLUMNS
        ))
        .bind(&name)
        .bind(&code)
        .bind(&description)
        .bind(&color)
        .bind(if is_active { 1i64 } else { 0i64 })
        .bind(now_timestamp())
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &name, &code))?;

        Ok(Self::row_to_brand(row))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete brand");
                DomainError::PersistenceFault(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BrandNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_domains(&self, id: i64) -> Result<u64, DomainError> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM domains WHERE brand_id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count brand domains");
                DomainError::PersistenceFault(e.to_string())
            })?;

        Ok(count as u64)
    }
}
