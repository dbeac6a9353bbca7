pub mod auth;
pub mod broadcast;
pub mod checker;
pub mod database;
pub mod errors;
pub mod import;
pub mod logging;
pub mod root;
pub mod server;

pub use auth::{AuthConfig, AuthToken};
pub use broadcast::BroadcastConfig;
pub use checker::CheckerConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use import::ImportConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
