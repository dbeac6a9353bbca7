use brandwatch_application::use_cases::{
    BulkCheckUseCase, BulkImportDomainsUseCase, BulkUpdateBlockStatusUseCase, CreateBrandUseCase,
    CreateDomainUseCase, DeleteBlockedDomainsUseCase, DeleteBrandUseCase, DeleteDomainUseCase,
    GetBrandsUseCase, GetDomainLogsUseCase, GetDomainsUseCase, ListCheckerUrlsUseCase,
    PatchDomainStatusUseCase, UpdateBlockStatusUseCase, UpdateBrandUseCase, UpdateDomainUseCase,
};
use std::sync::Arc;

use crate::middleware::TokenAuthenticator;
use crate::sse::EventBroadcaster;

#[derive(Clone)]
pub struct BrandUseCases {
    pub get_brands: Arc<GetBrandsUseCase>,
    pub create_brand: Arc<CreateBrandUseCase>,
    pub update_brand: Arc<UpdateBrandUseCase>,
    pub delete_brand: Arc<DeleteBrandUseCase>,
}

#[derive(Clone)]
pub struct DomainUseCases {
    pub get_domains: Arc<GetDomainsUseCase>,
    pub create_domain: Arc<CreateDomainUseCase>,
    pub update_domain: Arc<UpdateDomainUseCase>,
    pub delete_domain: Arc<DeleteDomainUseCase>,
    pub delete_blocked: Arc<DeleteBlockedDomainsUseCase>,
    pub patch_status: Arc<PatchDomainStatusUseCase>,
    pub bulk_import: Arc<BulkImportDomainsUseCase>,
    pub get_logs: Arc<GetDomainLogsUseCase>,
}

#[derive(Clone)]
pub struct CheckerUseCases {
    pub list_urls: Arc<ListCheckerUrlsUseCase>,
    pub update_status: Arc<UpdateBlockStatusUseCase>,
    pub bulk_update_status: Arc<BulkUpdateBlockStatusUseCase>,
    pub bulk_check: Arc<BulkCheckUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub brands: BrandUseCases,
    pub domains: DomainUseCases,
    pub checker: CheckerUseCases,
    pub events: Arc<EventBroadcaster>,
    pub auth: Arc<TokenAuthenticator>,
}
