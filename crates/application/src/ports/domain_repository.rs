use async_trait::async_trait;
use brandwatch_domain::{
    BlockStatus, DomainError, DomainFilter, DomainRecord, DomainStatus, DomainUpdate, NewDomain,
};

#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Inserts one record. A key collision fails with `DuplicateKey`.
    async fn create(&self, record: NewDomain) -> Result<DomainRecord, DomainError>;

    /// Unordered bulk insert tolerating partial success.
    ///
    /// Returns the records that were actually written; rows rejected by the
    /// uniqueness constraint are simply absent from the result.
    async fn insert_many(&self, records: &[NewDomain]) -> Result<Vec<DomainRecord>, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<DomainRecord>, DomainError>;
    async fn get_by_key(&self, key: &str) -> Result<Option<DomainRecord>, DomainError>;

    /// Every persisted canonical key.
    async fn all_keys(&self) -> Result<Vec<String>, DomainError>;

    /// One page of records matching `filter`, plus the total match count.
    async fn list(&self, filter: &DomainFilter) -> Result<(Vec<DomainRecord>, u64), DomainError>;

    async fn count_by_block_status(&self, status: BlockStatus) -> Result<u64, DomainError>;

    /// Active records ordered by key.
    async fn get_active(&self) -> Result<Vec<DomainRecord>, DomainError>;

    async fn update(
        &self,
        id: i64,
        update: DomainUpdate,
        updated_by: &str,
    ) -> Result<DomainRecord, DomainError>;

    /// Overwrites all four status facets of one record.
    async fn save_status(
        &self,
        id: i64,
        status: &DomainStatus,
        updated_by: &str,
    ) -> Result<DomainRecord, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Deletes every record whose block status is blocked and returns their keys.
    async fn delete_blocked(&self) -> Result<Vec<String>, DomainError>;
}
