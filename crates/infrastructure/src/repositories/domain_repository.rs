use async_trait::async_trait;
use brandwatch_application::ports::DomainRepository;
use brandwatch_domain::{
    BlockStatus, DomainError, DomainFilter, DomainRecord, DomainStatus, DomainUpdate, NewDomain,
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, error, instrument};

use super::domain_row_mapper::{format_checked_at, DomainRow, DOMAIN_SELECT};
use super::{is_foreign_key_violation, is_unique_violation, now_timestamp};

pub struct SqliteDomainRepository {
    pool: SqlitePool,
}

impl SqliteDomainRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &DomainFilter) {
        builder.push(" WHERE 1 = 1");
        if let Some(brand_id) = filter.brand_id {
            builder.push(" AND d.brand_id = ").push_bind(brand_id);
        }
        if let Some(status) = filter.block_status {
            builder
                .push(" AND d.nawala_status = ")
                .push_bind(status.to_str());
        }
        if let Some(search) = filter.search.as_deref() {
            builder
                .push(" AND d.domain LIKE ")
                .push_bind(format!("%{}%", escape_like(search)))
                .push(" ESCAPE '\\'");
        }
    }

    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<DomainRecord>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(DOMAIN_SELECT);
        builder.push(" WHERE d.id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY d.id ASC");

        let rows = builder
            .build_query_as::<DomainRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch inserted domains");
                DomainError::PersistenceFault(e.to_string())
            })?;

        Ok(rows.into_iter().map(DomainRow::into_record).collect())
    }

    async fn require(&self, id: i64) -> Result<DomainRecord, DomainError> {
        self.get_by_id(id)
            .await?
            .ok_or(DomainError::DomainNotFound(id))
    }

    fn map_write_error(e: sqlx::Error, key: &str, brand_id: i64) -> DomainError {
        if is_unique_violation(&e) {
            DomainError::DuplicateKey(format!("Domain '{}' already exists", key))
        } else if is_foreign_key_violation(&e) {
            DomainError::BrandNotFound(brand_id)
        } else {
            error!(error = %e, domain = %key, "Failed to write domain");
            DomainError::PersistenceFault(e.to_string())
        }
    }
}

#[async_trait]
impl DomainRepository for SqliteDomainRepository {
    #[instrument(skip(self, record), fields(domain = %record.domain))]
    async fn create(&self, record: NewDomain) -> Result<DomainRecord, DomainError> {
        let now = now_timestamp();

        let (id,) = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO domains (domain, brand_id, note, is_active, created_by, updated_by, created_at, updated_at)
             VALUES (?, ?, ?, 1, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&record.domain)
        .bind(record.brand_id)
        .bind(&record.note)
        .bind(&record.created_by)
        .bind(&record.created_by)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &record.domain, record.brand_id))?;

        self.require(id).await
    }

    #[instrument(skip(self, records), fields(count = records.len()))]
    async fn insert_many(&self, records: &[NewDomain]) -> Result<Vec<DomainRecord>, DomainError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let now = now_timestamp();
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            DomainError::PersistenceFault(e.to_string())
        })?;

        let mut inserted_ids = Vec::with_capacity(records.len());
        for record in records {
            let inserted = sqlx::query_as::<_, (i64,)>(
                "INSERT OR IGNORE INTO domains (domain, brand_id, note, is_active, created_by, updated_by, created_at, updated_at)
                 VALUES (?, ?, ?, 1, ?, ?, ?, ?)
                 RETURNING id",
            )
            .bind(&record.domain)
            .bind(record.brand_id)
            .bind(&record.note)
            .bind(&record.created_by)
            .bind(&record.created_by)
            .bind(&now)
            .bind(&now)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, domain = %record.domain, "Failed to insert domain in batch");
                DomainError::PersistenceFault(e.to_string())
            })?;

            match inserted {
                Some((id,)) => inserted_ids.push(id),
                None => debug!(domain = %record.domain, "Domain already present, ignored"),
            }
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit batch insert");
            DomainError::PersistenceFault(e.to_string())
        })?;

        self.fetch_by_ids(&inserted_ids).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<DomainRecord>, DomainError> {
        let row = sqlx::query_as::<_, DomainRow>(&format!("{} WHERE d.id = ?", DOMAIN_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query domain by id");
                DomainError::PersistenceFault(e.to_string())
            })?;

        Ok(row.map(DomainRow::into_record))
    }

    #[instrument(skip(self))]
    async fn get_by_key(&self, key: &str) -> Result<Option<DomainRecord>, DomainError> {
        let row =
            sqlx::query_as::<_, DomainRow>(&format!("{} WHERE d.domain = ?", DOMAIN_SELECT))
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to query domain by key");
                    DomainError::PersistenceFault(e.to_string())
                })?;

        Ok(row.map(DomainRow::into_record))
    }

    #[instrument(skip(self))]
    async fn all_keys(&self) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query_as::<_, (String,)>("SELECT domain FROM domains")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query domain keys");
                DomainError::PersistenceFault(e.to_string())
            })?;

        Ok(rows.into_iter().map(|(key,)| key).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &DomainFilter) -> Result<(Vec<DomainRecord>, u64), DomainError> {
        let mut count_query =
            QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM domains d");
        Self::push_filter(&mut count_query, filter);
        let (total,) = count_query
            .build_query_as::<(i64,)>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count domains");
                DomainError::PersistenceFault(e.to_string())
            })?;

        let mut page_query = QueryBuilder::<Sqlite>::new(DOMAIN_SELECT);
        Self::push_filter(&mut page_query, filter);
        page_query
            .push(" ORDER BY d.id DESC LIMIT ")
            .push_bind(filter.limit as i64)
            .push(" OFFSET ")
            .push_bind(filter.offset as i64);

        let rows = page_query
            .build_query_as::<DomainRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list domains");
                DomainError::PersistenceFault(e.to_string())
            })?;

        Ok((
            rows.into_iter().map(DomainRow::into_record).collect(),
            total as u64,
        ))
    }

    #[instrument(skip(self))]
    async fn count_by_block_status(&self, status: BlockStatus) -> Result<u64, DomainError> {
        let (count,) =
            sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM domains WHERE nawala_status = ?")
                .bind(status.to_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to count domains by status");
                    DomainError::PersistenceFault(e.to_string())
                })?;

        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn get_active(&self) -> Result<Vec<DomainRecord>, DomainError> {
        let rows = sqlx::query_as::<_, DomainRow>(&format!(
            "{} WHERE d.is_active = 1 ORDER BY d.domain ASC",
            DOMAIN_SELECT
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query active domains");
            DomainError::PersistenceFault(e.to_string())
        })?;

        Ok(rows.into_iter().map(DomainRow::into_record).collect())
    }

    #[instrument(skip(self, update))]
    async fn update(
        &self,
        id: i64,
        update: DomainUpdate,
        updated_by: &str,
    ) -> Result<DomainRecord, DomainError> {
        let current = self.require(id).await?;

        let key = update.domain.unwrap_or_else(|| current.domain.to_string());
        let brand_id = update.brand_id.unwrap_or(current.brand_id);
        let note: Option<String> = update
            .note
            .or_else(|| current.note.as_ref().map(|n| n.to_string()));
        let is_active = update.is_active.unwrap_or(current.is_active);

        sqlx::query(
            "UPDATE domains
             SET domain = ?, brand_id = ?, note = ?, is_active = ?, updated_by = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&key)
        .bind(brand_id)
        .bind(&note)
        .bind(if is_active { 1i64 } else { 0i64 })
        .bind(updated_by)
        .bind(now_timestamp())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &key, brand_id))?;

        self.require(id).await
    }

    #[instrument(skip(self, status))]
    async fn save_status(
        &self,
        id: i64,
        status: &DomainStatus,
        updated_by: &str,
    ) -> Result<DomainRecord, DomainError> {
        let result = sqlx::query(
            "UPDATE domains
             SET uptime_status = ?, uptime_checked_at = ?,
                 nawala_status = ?, nawala_blocked_id = ?, nawala_checked_at = ?,
                 cloudflare_status = ?, cloudflare_checked_at = ?,
                 google_status = ?, google_checked_at = ?,
                 updated_by = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(status.uptime.status.to_str())
        .bind(format_checked_at(&status.uptime.last_checked))
        .bind(status.nawala.status.to_str())
        .bind(&status.nawala.blocked_id)
        .bind(format_checked_at(&status.nawala.last_checked))
        .bind(status.cloudflare.status.to_str())
        .bind(format_checked_at(&status.cloudflare.last_checked))
        .bind(status.google.status.to_str())
        .bind(format_checked_at(&status.google.last_checked))
        .bind(updated_by)
        .bind(now_timestamp())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, id, "Failed to save domain status");
            DomainError::PersistenceFault(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DomainNotFound(id));
        }

        self.require(id).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM domains WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete domain");
                DomainError::PersistenceFault(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DomainNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_blocked(&self) -> Result<Vec<String>, DomainError> {
        let rows = sqlx::query_as::<_, (String,)>(
            "DELETE FROM domains WHERE nawala_status = ? RETURNING domain",
        )
        .bind(BlockStatus::Blocked.to_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to delete blocked domains");
            DomainError::PersistenceFault(e.to_string())
        })?;

        Ok(rows.into_iter().map(|(key,)| key).collect())
    }
}

/// Makes `%`, `_` and the escape character itself match literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
