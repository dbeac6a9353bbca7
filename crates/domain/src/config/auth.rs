use serde::{Deserialize, Serialize};

use crate::actor::Role;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: Vec<AuthToken>,
}

/// Static bearer token mapped to an actor identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthToken {
    pub token: String,
    pub name: String,
    pub role: Role,
}
