/// Failures while loading or checking the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value parsed fine but makes no sense at runtime.
    #[error("Configuration validation error: {0}")]
    Validation(String),
}
