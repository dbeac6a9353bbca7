use async_trait::async_trait;
use brandwatch_application::ports::DomainLogRepository;
use brandwatch_domain::{DomainError, DomainLog, LogAction};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::now_timestamp;

type LogRow = (i64, String, String, String, String);

pub struct SqliteDomainLogRepository {
    pool: SqlitePool,
}

impl SqliteDomainLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_log(row: LogRow) -> Option<DomainLog> {
        let (id, domain, action, actor, timestamp) = row;
        Some(DomainLog {
            id,
            domain: Arc::from(domain.as_str()),
            action: action.parse().ok()?,
            actor: Arc::from(actor.as_str()),
            timestamp,
        })
    }
}

#[async_trait]
impl DomainLogRepository for SqliteDomainLogRepository {
    #[instrument(skip(self))]
    async fn append(
        &self,
        domain: &str,
        action: LogAction,
        actor: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO domain_logs (domain, action, actor, timestamp) VALUES (?, ?, ?, ?)")
            .bind(domain)
            .bind(action.to_str())
            .bind(actor)
            .bind(now_timestamp())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to append domain log");
                DomainError::PersistenceFault(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self, domains), fields(count = domains.len()))]
    async fn append_many(
        &self,
        domains: &[String],
        action: LogAction,
        actor: &str,
    ) -> Result<(), DomainError> {
        if domains.is_empty() {
            return Ok(());
        }

        let now = now_timestamp();
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            DomainError::PersistenceFault(e.to_string())
        })?;

        for domain in domains {
            sqlx::query(
                "INSERT INTO domain_logs (domain, action, actor, timestamp) VALUES (?, ?, ?, ?)",
            )
            .bind(domain)
            .bind(action.to_str())
            .bind(actor)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to append domain log");
                DomainError::PersistenceFault(e.to_string())
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit domain logs");
            DomainError::PersistenceFault(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_recent(&self, limit: u32) -> Result<Vec<DomainLog>, DomainError> {
        let rows = sqlx::query_as::<_, LogRow>(
            "SELECT id, domain, action, actor, timestamp
             FROM domain_logs
             ORDER BY id DESC
             LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query domain logs");
            DomainError::PersistenceFault(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_log).collect())
    }
}
