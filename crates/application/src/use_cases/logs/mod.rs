mod get_domain_logs;

pub use get_domain_logs::GetDomainLogsUseCase;
