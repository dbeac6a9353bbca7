use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(String),

    #[error("Invalid domain format: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    UnknownBrand(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Brand not found: {0}")]
    BrandNotFound(i64),

    #[error("Domain not found: {0}")]
    DomainNotFound(i64),

    #[error("Cannot delete brand. It has {0} domain(s) associated with it")]
    BrandHasDomains(u64),

    #[error("Invalid brand: {0}")]
    InvalidBrand(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Persistence fault: {0}")]
    PersistenceFault(String),

    #[error("Upstream transport fault: {0}")]
    UpstreamTransportFault(String),

    #[error("Upstream protocol fault: {0}")]
    UpstreamProtocolFault(String),

    #[error("Checker request timed out")]
    CheckerTimeout,

    #[error("Checker unavailable: {0}")]
    CheckerUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
