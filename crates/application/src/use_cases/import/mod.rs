mod bulk_import_domains;

pub use bulk_import_domains::BulkImportDomainsUseCase;
