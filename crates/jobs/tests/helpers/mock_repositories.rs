#![allow(dead_code)]

use async_trait::async_trait;
use brandwatch_application::ports::{
    Clock, DomainRepository, EventNotifier, FeedConnection, FeedTransport,
};
use brandwatch_domain::{
    BlockStatus, DashboardEvent, DomainError, DomainFilter, DomainRecord, DomainStatus,
    DomainUpdate, NewDomain,
};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn record(id: i64, key: &str) -> DomainRecord {
    DomainRecord {
        id,
        domain: Arc::from(key),
        brand_id: 1,
        brand: None,
        note: None,
        status: DomainStatus::default(),
        is_active: true,
        created_by: None,
        updated_by: None,
        created_at: None,
        updated_at: None,
    }
}

fn unsupported() -> DomainError {
    DomainError::PersistenceFault("not supported by this mock".to_string())
}

/// Keeps only what the status updater touches.
pub struct MockDomainRepository {
    records: Mutex<Vec<DomainRecord>>,
}

impl MockDomainRepository {
    pub fn with_records(records: Vec<DomainRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn find(&self, id: i64) -> Option<DomainRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }
}

#[async_trait]
impl DomainRepository for MockDomainRepository {
    async fn create(&self, _record: NewDomain) -> Result<DomainRecord, DomainError> {
        Err(unsupported())
    }

    async fn insert_many(&self, _records: &[NewDomain]) -> Result<Vec<DomainRecord>, DomainError> {
        Err(unsupported())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<DomainRecord>, DomainError> {
        Ok(self.find(id))
    }

    async fn get_by_key(&self, key: &str) -> Result<Option<DomainRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.domain.as_ref() == key)
            .cloned())
    }

    async fn all_keys(&self) -> Result<Vec<String>, DomainError> {
        Err(unsupported())
    }

    async fn list(&self, _filter: &DomainFilter) -> Result<(Vec<DomainRecord>, u64), DomainError> {
        Err(unsupported())
    }

    async fn count_by_block_status(&self, _status: BlockStatus) -> Result<u64, DomainError> {
        Err(unsupported())
    }

    async fn get_active(&self) -> Result<Vec<DomainRecord>, DomainError> {
        Err(unsupported())
    }

    async fn update(
        &self,
        _id: i64,
        _update: DomainUpdate,
        _updated_by: &str,
    ) -> Result<DomainRecord, DomainError> {
        Err(unsupported())
    }

    async fn save_status(
        &self,
        id: i64,
        status: &DomainStatus,
        updated_by: &str,
    ) -> Result<DomainRecord, DomainError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::DomainNotFound(id))?;
        record.status = status.clone();
        record.updated_by = Some(Arc::from(updated_by));
        Ok(record.clone())
    }

    async fn delete(&self, _id: i64) -> Result<(), DomainError> {
        Err(unsupported())
    }

    async fn delete_blocked(&self) -> Result<Vec<String>, DomainError> {
        Err(unsupported())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<DashboardEvent>>,
}

impl RecordingNotifier {
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|e| e.name()).collect()
    }
}

impl EventNotifier for RecordingNotifier {
    fn publish(&self, event: DashboardEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// What a scripted connection does once its messages run out.
#[derive(Clone, Copy)]
pub enum AfterScript {
    Close,
    Hang,
}

#[derive(Default)]
struct TransportStats {
    connects: AtomicUsize,
    live: AtomicUsize,
    max_live: AtomicUsize,
    closed: AtomicUsize,
}

/// Feed transport that hands out scripted connections and counts them.
pub struct FakeFeedTransport {
    failures_left: AtomicUsize,
    script: Vec<String>,
    after: AfterScript,
    stats: Arc<TransportStats>,
}

impl FakeFeedTransport {
    pub fn new(script: Vec<&str>, after: AfterScript) -> Self {
        Self {
            failures_left: AtomicUsize::new(0),
            script: script.into_iter().map(String::from).collect(),
            after,
            stats: Arc::new(TransportStats::default()),
        }
    }

    pub fn failing_first(self, attempts: usize) -> Self {
        self.failures_left.store(attempts, Ordering::SeqCst);
        self
    }

    pub fn connects(&self) -> usize {
        self.stats.connects.load(Ordering::SeqCst)
    }

    pub fn live(&self) -> usize {
        self.stats.live.load(Ordering::SeqCst)
    }

    pub fn max_live(&self) -> usize {
        self.stats.max_live.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.stats.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedTransport for FakeFeedTransport {
    async fn connect(&self) -> Result<Box<dyn FeedConnection>, DomainError> {
        self.stats.connects.fetch_add(1, Ordering::SeqCst);

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(DomainError::UpstreamTransportFault(
                "connection refused".to_string(),
            ));
        }

        let live = self.stats.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.max_live.fetch_max(live, Ordering::SeqCst);

        Ok(Box::new(FakeConnection {
            pending: self.script.iter().cloned().collect(),
            after: self.after,
            stats: self.stats.clone(),
            open: true,
        }))
    }
}

struct FakeConnection {
    pending: VecDeque<String>,
    after: AfterScript,
    stats: Arc<TransportStats>,
    open: bool,
}

impl FakeConnection {
    fn release(&mut self) {
        if self.open {
            self.open = false;
            self.stats.live.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl FeedConnection for FakeConnection {
    async fn next_message(&mut self) -> Result<Option<String>, DomainError> {
        if let Some(message) = self.pending.pop_front() {
            return Ok(Some(message));
        }
        match self.after {
            AfterScript::Close => Ok(None),
            AfterScript::Hang => std::future::pending().await,
        }
    }

    async fn close(&mut self) {
        self.stats.closed.fetch_add(1, Ordering::SeqCst);
        self.release();
    }
}

impl Drop for FakeConnection {
    fn drop(&mut self) {
        self.release();
    }
}
