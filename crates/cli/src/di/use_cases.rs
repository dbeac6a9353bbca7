use super::{Repositories, Services};
use brandwatch_api::state::{BrandUseCases, CheckerUseCases, DomainUseCases};
use brandwatch_api::AppState;
use brandwatch_application::use_cases::{
    ApplyFeedEventUseCase, BulkCheckUseCase, BulkImportDomainsUseCase,
    BulkUpdateBlockStatusUseCase, CreateBrandUseCase, CreateDomainUseCase,
    DeleteBlockedDomainsUseCase, DeleteBrandUseCase, DeleteDomainUseCase, GetBrandsUseCase,
    GetDomainLogsUseCase, GetDomainsUseCase, ListCheckerUrlsUseCase, PatchDomainStatusUseCase,
    UpdateBlockStatusUseCase, UpdateBrandUseCase, UpdateDomainUseCase,
};
use brandwatch_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub get_brands: Arc<GetBrandsUseCase>,
    pub create_brand: Arc<CreateBrandUseCase>,
    pub update_brand: Arc<UpdateBrandUseCase>,
    pub delete_brand: Arc<DeleteBrandUseCase>,
    pub get_domains: Arc<GetDomainsUseCase>,
    pub create_domain: Arc<CreateDomainUseCase>,
    pub update_domain: Arc<UpdateDomainUseCase>,
    pub delete_domain: Arc<DeleteDomainUseCase>,
    pub delete_blocked: Arc<DeleteBlockedDomainsUseCase>,
    pub patch_status: Arc<PatchDomainStatusUseCase>,
    pub bulk_import: Arc<BulkImportDomainsUseCase>,
    pub get_logs: Arc<GetDomainLogsUseCase>,
    pub list_urls: Arc<ListCheckerUrlsUseCase>,
    pub update_status: Arc<UpdateBlockStatusUseCase>,
    pub bulk_update_status: Arc<BulkUpdateBlockStatusUseCase>,
    pub bulk_check: Arc<BulkCheckUseCase>,
    pub apply_feed_event: Arc<ApplyFeedEventUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, services: &Services) -> Self {
        let update_status = Arc::new(UpdateBlockStatusUseCase::new(
            repos.domain.clone(),
            services.coalescer.clone(),
            services.notifier.clone(),
            services.clock.clone(),
        ));

        Self {
            get_brands: Arc::new(GetBrandsUseCase::new(repos.brand.clone())),
            create_brand: Arc::new(CreateBrandUseCase::new(repos.brand.clone())),
            update_brand: Arc::new(UpdateBrandUseCase::new(repos.brand.clone())),
            delete_brand: Arc::new(DeleteBrandUseCase::new(repos.brand.clone())),
            get_domains: Arc::new(GetDomainsUseCase::new(repos.domain.clone())),
            create_domain: Arc::new(CreateDomainUseCase::new(
                repos.domain.clone(),
                repos.brand.clone(),
                repos.domain_log.clone(),
                services.notifier.clone(),
            )),
            update_domain: Arc::new(UpdateDomainUseCase::new(
                repos.domain.clone(),
                repos.brand.clone(),
                services.notifier.clone(),
            )),
            delete_domain: Arc::new(DeleteDomainUseCase::new(
                repos.domain.clone(),
                repos.domain_log.clone(),
                services.notifier.clone(),
            )),
            delete_blocked: Arc::new(DeleteBlockedDomainsUseCase::new(
                repos.domain.clone(),
                repos.domain_log.clone(),
                services.notifier.clone(),
            )),
            patch_status: Arc::new(PatchDomainStatusUseCase::new(
                repos.domain.clone(),
                services.notifier.clone(),
                services.clock.clone(),
            )),
            bulk_import: Arc::new(BulkImportDomainsUseCase::new(
                repos.domain.clone(),
                repos.brand.clone(),
                repos.domain_log.clone(),
                services.notifier.clone(),
                config.import.chunk_size,
            )),
            get_logs: Arc::new(GetDomainLogsUseCase::new(repos.domain_log.clone())),
            list_urls: Arc::new(ListCheckerUrlsUseCase::new(repos.domain.clone())),
            bulk_update_status: Arc::new(BulkUpdateBlockStatusUseCase::new(
                update_status.clone(),
                services.notifier.clone(),
                config.checker.status_update_chunk_size,
            )),
            bulk_check: Arc::new(BulkCheckUseCase::new(
                services.checker_client.clone(),
                config.checker.max_bulk_check_urls,
            )),
            apply_feed_event: Arc::new(ApplyFeedEventUseCase::new(
                repos.domain.clone(),
                update_status.clone(),
            )),
            update_status,
        }
    }

    pub fn app_state(&self, services: &Services) -> AppState {
        AppState {
            brands: BrandUseCases {
                get_brands: self.get_brands.clone(),
                create_brand: self.create_brand.clone(),
                update_brand: self.update_brand.clone(),
                delete_brand: self.delete_brand.clone(),
            },
            domains: DomainUseCases {
                get_domains: self.get_domains.clone(),
                create_domain: self.create_domain.clone(),
                update_domain: self.update_domain.clone(),
                delete_domain: self.delete_domain.clone(),
                delete_blocked: self.delete_blocked.clone(),
                patch_status: self.patch_status.clone(),
                bulk_import: self.bulk_import.clone(),
                get_logs: self.get_logs.clone(),
            },
            checker: CheckerUseCases {
                list_urls: self.list_urls.clone(),
                update_status: self.update_status.clone(),
                bulk_update_status: self.bulk_update_status.clone(),
                bulk_check: self.bulk_check.clone(),
            },
            events: services.events.clone(),
            auth: services.auth.clone(),
        }
    }
}
