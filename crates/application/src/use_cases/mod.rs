pub mod brands;
pub mod checker;
pub mod domains;
pub mod import;
pub mod logs;

// Re-export use cases
pub use brands::{CreateBrandUseCase, DeleteBrandUseCase, GetBrandsUseCase, UpdateBrandUseCase};
pub use checker::{
    ApplyFeedEventUseCase, BulkCheckUseCase, BulkStatusOutcome, BulkUpdateBlockStatusUseCase,
    FeedOutcome, ListCheckerUrlsUseCase, StatusUpdateFailure, StatusUpdateRequest,
    UpdateBlockStatusUseCase,
};
pub use domains::{
    CreateDomainUseCase, DeleteBlockedDomainsUseCase, DeleteDomainUseCase, DomainPage,
    GetDomainsUseCase, PatchDomainStatusUseCase, UpdateDomainUseCase,
};
pub use import::BulkImportDomainsUseCase;
pub use logs::GetDomainLogsUseCase;
