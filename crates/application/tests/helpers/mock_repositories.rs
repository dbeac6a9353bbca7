#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use brandwatch_application::ports::{
    BrandRepository, CheckerClient, Clock, DomainLogRepository, DomainRepository, EventNotifier,
};
use brandwatch_domain::{
    BlockStatus, Brand, BrandSummary, BrandUpdate, DashboardEvent, DomainError, DomainFilter,
    DomainLog, DomainRecord, DomainStatus, DomainUpdate, LogAction, NewBrand, NewDomain,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub fn brand(id: i64, name: &str, code: &str) -> Brand {
    Brand {
        id: Some(id),
        name: Arc::from(name),
        code: Arc::from(code),
        description: Some(Arc::from(format!("{} Brand", name).as_str())),
        color: Arc::from("#3B82F6"),
        is_active: true,
        created_by: Some(Arc::from("seed")),
        created_at: Some("2026-01-01 00:00:00".to_string()),
        updated_at: Some("2026-01-01 00:00:00".to_string()),
    }
}

// ── Brands ────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockBrandRepository {
    brands: Arc<RwLock<Vec<Brand>>>,
    domain_counts: Arc<RwLock<Vec<(i64, u64)>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockBrandRepository {
    pub fn new() -> Self {
        Self {
            brands: Arc::new(RwLock::new(Vec::new())),
            domain_counts: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub fn with_brands(brands: Vec<Brand>) -> Self {
        let next = brands.iter().filter_map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            brands: Arc::new(RwLock::new(brands)),
            domain_counts: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(next)),
        }
    }

    pub async fn set_domain_count(&self, id: i64, count: u64) {
        self.domain_counts.write().await.push((id, count));
    }

    pub async fn count(&self) -> usize {
        self.brands.read().await.len()
    }
}

impl Default for MockBrandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrandRepository for MockBrandRepository {
    async fn create(&self, new: NewBrand) -> Result<Brand, DomainError> {
        let mut brands = self.brands.write().await;

        if brands
            .iter()
            .any(|b| b.name.as_ref() == new.name || b.code.as_ref() == new.code)
        {
            return Err(DomainError::DuplicateKey(format!(
                "Brand '{}' already exists",
                new.name
            )));
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let created = Brand {
            id: Some(id),
            name: Arc::from(new.name.as_str()),
            code: Arc::from(new.code.as_str()),
            description: Some(Arc::from(new.description.as_str())),
            color: Arc::from(new.color.as_str()),
            is_active: true,
            created_by: Some(Arc::from(new.created_by.as_str())),
            created_at: Some("2026-01-01 00:00:00".to_string()),
            updated_at: Some("2026-01-01 00:00:00".to_string()),
        };
        brands.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Brand>, DomainError> {
        let brands = self.brands.read().await;
        Ok(brands.iter().find(|b| b.id == Some(id)).cloned())
    }

    async fn get_all(&self, active: Option<bool>) -> Result<Vec<Brand>, DomainError> {
        let brands = self.brands.read().await;
        Ok(brands
            .iter()
            .filter(|b| active.map_or(true, |a| b.is_active == a))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, update: BrandUpdate) -> Result<Brand, DomainError> {
        let mut brands = self.brands.write().await;
        let brand = brands
            .iter_mut()
            .find(|b| b.id == Some(id))
            .ok_or(DomainError::BrandNotFound(id))?;

        if let Some(name) = update.name {
            brand.name = Arc::from(name.as_str());
        }
        if let Some(code) = update.code {
            brand.code = Arc::from(code.as_str());
        }
        if let Some(description) = update.description {
            brand.description = Some(Arc::from(description.as_str()));
        }
        if let Some(color) = update.color {
            brand.color = Arc::from(color.as_str());
        }
        if let Some(active) = update.is_active {
            brand.is_active = active;
        }
        Ok(brand.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut brands = self.brands.write().await;
        let before = brands.len();
        brands.retain(|b| b.id != Some(id));
        if brands.len() == before {
            return Err(DomainError::BrandNotFound(id));
        }
        Ok(())
    }

    async fn count_domains(&self, id: i64) -> Result<u64, DomainError> {
        let counts = self.domain_counts.read().await;
        Ok(counts
            .iter()
            .rev()
            .find(|(b, _)| *b == id)
            .map(|(_, c)| *c)
            .unwrap_or(0))
    }
}

// ── Domains ───────────────────────────────────────────────────────────────────

/// How `insert_many` misbehaves, to exercise the ingestor's recovery paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkInsertMode {
    Normal,
    /// Every bulk call fails outright.
    Fail,
    /// Bulk calls write nothing and report nothing.
    SilentDrop,
}

#[derive(Clone)]
pub struct MockDomainRepository {
    records: Arc<RwLock<Vec<DomainRecord>>>,
    next_id: Arc<RwLock<i64>>,
    bulk_mode: Arc<RwLock<BulkInsertMode>>,
    bulk_calls: Arc<RwLock<usize>>,
    create_calls: Arc<RwLock<usize>>,
    failing_keys: Arc<RwLock<HashSet<String>>>,
    /// Keys that appear in storage right after the snapshot is taken (a concurrent writer).
    racing_keys: Arc<RwLock<Vec<String>>>,
    brands: Arc<RwLock<Vec<Brand>>>,
}

impl MockDomainRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            bulk_mode: Arc::new(RwLock::new(BulkInsertMode::Normal)),
            bulk_calls: Arc::new(RwLock::new(0)),
            create_calls: Arc::new(RwLock::new(0)),
            failing_keys: Arc::new(RwLock::new(HashSet::new())),
            racing_keys: Arc::new(RwLock::new(Vec::new())),
            brands: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn with_brands(self, brands: Vec<Brand>) -> Self {
        *self.brands.write().await = brands;
        self
    }

    pub async fn seed(&self, domain: &str, brand_id: i64) -> DomainRecord {
        self.create(NewDomain {
            domain: domain.to_string(),
            brand_id,
            note: None,
            created_by: "seed".to_string(),
        })
        .await
        .unwrap()
    }

    pub async fn set_bulk_mode(&self, mode: BulkInsertMode) {
        *self.bulk_mode.write().await = mode;
    }

    pub async fn fail_key(&self, key: &str) {
        self.failing_keys.write().await.insert(key.to_string());
    }

    pub async fn add_racing_key(&self, key: &str) {
        self.racing_keys.write().await.push(key.to_string());
    }

    pub async fn bulk_calls(&self) -> usize {
        *self.bulk_calls.read().await
    }

    pub async fn create_calls(&self) -> usize {
        *self.create_calls.read().await
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.records
            .read()
            .await
            .iter()
            .map(|r| r.domain.to_string())
            .collect()
    }

    pub async fn find(&self, key: &str) -> Option<DomainRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.domain.as_ref() == key)
            .cloned()
    }

    async fn summary_for(&self, brand_id: i64) -> Option<BrandSummary> {
        self.brands
            .read()
            .await
            .iter()
            .find(|b| b.id == Some(brand_id))
            .and_then(|b| b.summary())
    }

    async fn insert_record(&self, new: &NewDomain) -> Result<DomainRecord, DomainError> {
        if self.failing_keys.read().await.contains(&new.domain) {
            return Err(DomainError::PersistenceFault(format!(
                "write rejected for {}",
                new.domain
            )));
        }

        let brand = self.summary_for(new.brand_id).await;
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.domain.as_ref() == new.domain) {
            return Err(DomainError::DuplicateKey(format!(
                "Domain '{}' already exists",
                new.domain
            )));
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let record = DomainRecord {
            id,
            domain: Arc::from(new.domain.as_str()),
            brand_id: new.brand_id,
            brand,
            note: new.note.as_deref().map(Arc::from),
            status: DomainStatus::default(),
            is_active: true,
            created_by: Some(Arc::from(new.created_by.as_str())),
            updated_by: Some(Arc::from(new.created_by.as_str())),
            created_at: Some("2026-01-01 00:00:00".to_string()),
            updated_at: Some("2026-01-01 00:00:00".to_string()),
        };
        records.push(record.clone());
        Ok(record)
    }
}

impl Default for MockDomainRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainRepository for MockDomainRepository {
    async fn create(&self, record: NewDomain) -> Result<DomainRecord, DomainError> {
        *self.create_calls.write().await += 1;
        self.insert_record(&record).await
    }

    async fn insert_many(&self, records: &[NewDomain]) -> Result<Vec<DomainRecord>, DomainError> {
        *self.bulk_calls.write().await += 1;

        match *self.bulk_mode.read().await {
            BulkInsertMode::Fail => {
                return Err(DomainError::PersistenceFault("connection reset".to_string()))
            }
            BulkInsertMode::SilentDrop => return Ok(Vec::new()),
            BulkInsertMode::Normal => {}
        }

        let mut inserted = Vec::new();
        for record in records {
            if let Ok(r) = self.insert_record(record).await {
                inserted.push(r);
            }
        }
        Ok(inserted)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<DomainRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn get_by_key(&self, key: &str) -> Result<Option<DomainRecord>, DomainError> {
        Ok(self.find(key).await)
    }

    async fn all_keys(&self) -> Result<Vec<String>, DomainError> {
        let keys = self.keys().await;

        let racing: Vec<String> = self.racing_keys.write().await.drain(..).collect();
        for key in racing {
            self.insert_record(&NewDomain {
                domain: key,
                brand_id: 1,
                note: None,
                created_by: "other-writer".to_string(),
            })
            .await?;
        }

        Ok(keys)
    }

    async fn list(&self, filter: &DomainFilter) -> Result<(Vec<DomainRecord>, u64), DomainError> {
        let records = self.records.read().await;
        let matching: Vec<DomainRecord> = records
            .iter()
            .filter(|r| filter.brand_id.map_or(true, |b| r.brand_id == b))
            .filter(|r| {
                filter
                    .block_status
                    .map_or(true, |s| r.status.nawala.status == s)
            })
            .filter(|r| {
                filter
                    .search
                    .as_deref()
                    .map_or(true, |s| r.domain.contains(s))
            })
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn count_by_block_status(&self, status: BlockStatus) -> Result<u64, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.status.nawala.status == status)
            .count() as u64)
    }

    async fn get_active(&self) -> Result<Vec<DomainRecord>, DomainError> {
        let mut active: Vec<DomainRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.domain.cmp(&b.domain));
        Ok(active)
    }

    async fn update(
        &self,
        id: i64,
        update: DomainUpdate,
        updated_by: &str,
    ) -> Result<DomainRecord, DomainError> {
        let brand = match update.brand_id {
            Some(b) => self.summary_for(b).await,
            None => None,
        };
        let mut records = self.records.write().await;

        if let Some(ref key) = update.domain {
            if records
                .iter()
                .any(|r| r.id != id && r.domain.as_ref() == key)
            {
                return Err(DomainError::DuplicateKey(format!(
                    "Domain '{}' already exists",
                    key
                )));
            }
        }

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::DomainNotFound(id))?;

        if let Some(key) = update.domain {
            record.domain = Arc::from(key.as_str());
        }
        if let Some(brand_id) = update.brand_id {
            record.brand_id = brand_id;
            record.brand = brand;
        }
        if let Some(note) = update.note {
            record.note = Some(Arc::from(note.as_str()));
        }
        if let Some(active) = update.is_active {
            record.is_active = active;
        }
        record.updated_by = Some(Arc::from(updated_by));
        Ok(record.clone())
    }

    async fn save_status(
        &self,
        id: i64,
        status: &DomainStatus,
        updated_by: &str,
    ) -> Result<DomainRecord, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::DomainNotFound(id))?;
        record.status = status.clone();
        record.updated_by = Some(Arc::from(updated_by));
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(DomainError::DomainNotFound(id));
        }
        Ok(())
    }

    async fn delete_blocked(&self) -> Result<Vec<String>, DomainError> {
        let mut records = self.records.write().await;
        let removed = records
            .iter()
            .filter(|r| r.status.nawala.status == BlockStatus::Blocked)
            .map(|r| r.domain.to_string())
            .collect();
        records.retain(|r| r.status.nawala.status != BlockStatus::Blocked);
        Ok(removed)
    }
}

// ── Audit log ─────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockDomainLogRepository {
    entries: Arc<RwLock<Vec<DomainLog>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockDomainLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn entries(&self) -> Vec<DomainLog> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl DomainLogRepository for MockDomainLogRepository {
    async fn append(
        &self,
        domain: &str,
        action: LogAction,
        actor: &str,
    ) -> Result<(), DomainError> {
        self.append_many(&[domain.to_string()], action, actor).await
    }

    async fn append_many(
        &self,
        domains: &[String],
        action: LogAction,
        actor: &str,
    ) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::PersistenceFault("log table locked".to_string()));
        }
        let mut entries = self.entries.write().await;
        for domain in domains {
            let id = entries.len() as i64 + 1;
            entries.push(DomainLog {
                id,
                domain: Arc::from(domain.as_str()),
                action,
                actor: Arc::from(actor),
                timestamp: "2026-01-01 00:00:00".to_string(),
            });
        }
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<DomainLog>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().rev().take(limit as usize).cloned().collect())
    }
}

// ── Notifier / clock / checker ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<DashboardEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DashboardEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.name()).collect()
    }

    pub fn count_named(&self, name: &str) -> usize {
        self.events().iter().filter(|e| e.name() == name).count()
    }

    /// Sizes of every emitted `domains:bulk-nawala-updated` batch, in order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.events()
            .iter()
            .filter_map(|e| match e {
                DashboardEvent::BulkNawalaUpdated { updates, count } => {
                    assert_eq!(updates.len(), *count);
                    Some(*count)
                }
                _ => None,
            })
            .collect()
    }
}

impl EventNotifier for RecordingNotifier {
    fn publish(&self, event: DashboardEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_epoch_millis(ms: i64) -> Self {
        Self(Utc.timestamp_millis_opt(ms).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone)]
pub struct MockCheckerClient {
    response: Arc<Mutex<Result<Value, DomainError>>>,
    calls: Arc<Mutex<Vec<(Vec<String>, String)>>>,
}

impl MockCheckerClient {
    pub fn returning(response: Result<Value, DomainError>) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(Vec<String>, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckerClient for MockCheckerClient {
    async fn bulk_check(&self, urls: &[String], mode: &str) -> Result<Value, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((urls.to_vec(), mode.to_string()));
        self.response.lock().unwrap().clone()
    }
}
