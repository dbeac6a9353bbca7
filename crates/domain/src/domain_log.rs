use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogAction {
    Add,
    Delete,
}

impl LogAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogAction::Add => "add",
            LogAction::Delete => "delete",
        }
    }
}

impl FromStr for LogAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(LogAction::Add),
            "delete" => Ok(LogAction::Delete),
            other => Err(format!("invalid log action '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainLog {
    pub id: i64,
    pub domain: Arc<str>,
    pub action: LogAction,
    pub actor: Arc<str>,
    pub timestamp: String,
}
