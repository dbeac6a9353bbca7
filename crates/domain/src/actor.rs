use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    pub fn to_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "user" => Ok(Role::User),
            other => Err(format!("invalid role '{}'", other)),
        }
    }
}

/// Authenticated identity used for audit fields and permission checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: Arc<str>,
    pub role: Role,
}

impl Actor {
    pub fn new(name: &str, role: Role) -> Self {
        Self {
            name: Arc::from(name),
            role,
        }
    }

    /// Identity recorded for writes that originate from the checking system.
    pub fn system() -> Self {
        Self::new("system", Role::Admin)
    }

    pub fn can_edit(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Manager)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_editor(&self) -> Result<(), DomainError> {
        if self.can_edit() {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "role '{}' cannot modify brands or domains",
                self.role.to_str()
            )))
        }
    }

    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::Forbidden(format!(
                "role '{}' is not an administrator",
                self.role.to_str()
            )))
        }
    }
}
