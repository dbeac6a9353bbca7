//! Brandwatch Domain Layer
pub mod actor;
pub mod brand;
pub mod config;
pub mod domain_log;
pub mod domain_record;
pub mod errors;
pub mod events;
pub mod import;
pub mod normalizer;
pub mod status;

pub use actor::{Actor, Role};
pub use brand::{Brand, BrandSummary, BrandUpdate, NewBrand, DEFAULT_BRAND_COLOR};
pub use config::{CliOverrides, Config};
pub use domain_log::{DomainLog, LogAction};
pub use domain_record::{DomainFilter, DomainRecord, DomainUpdate, NewDomain};
pub use errors::DomainError;
pub use events::{DashboardEvent, StatusChange};
pub use import::{
    ImportFailure, ImportReport, ImportRow, ImportSkip, ImportSuccess, SkipReason,
    HEADER_ROW_OFFSET,
};
pub use normalizer::{canonical_key, normalize_row, NormalizedRow};
pub use status::{
    BlockFacet, BlockStatus, DomainStatus, EdgeCacheStatus, IndexStatus, ScanObservation,
    StatusFacet, StatusPatch, UptimeStatus,
};
