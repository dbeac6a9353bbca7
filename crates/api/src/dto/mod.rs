pub mod brand;
pub mod checker;
pub mod domain;
pub mod import;
pub mod logs;

pub use brand::{BrandResponse, BrandsQuery, CreateBrandRequest, UpdateBrandRequest};
pub use checker::{
    BulkCheckRequest, BulkStatusUpdateRequest, CheckerUrl, RecordId, ScanResult,
    StatusUpdateBody, StatusUpdateResponse,
};
pub use domain::{
    BulkDeleteResponse, CreateDomainRequest, DomainListResponse, DomainsQuery, NawalaPatch,
    StatusPatchRequest, UpdateDomainRequest,
};
pub use import::{BulkImportRequest, BulkImportResponse};
pub use logs::LogsQuery;
