mod create_domain;
mod delete_blocked_domains;
mod delete_domain;
mod get_domains;
mod patch_domain_status;
mod update_domain;

pub use create_domain::CreateDomainUseCase;
pub use delete_blocked_domains::DeleteBlockedDomainsUseCase;
pub use delete_domain::DeleteDomainUseCase;
pub use get_domains::{DomainPage, GetDomainsUseCase};
pub use patch_domain_status::PatchDomainStatusUseCase;
pub use update_domain::UpdateDomainUseCase;
