use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<u32>,
}
