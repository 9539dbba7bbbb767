//! Caller identity for guarded actions.
//!
//! There is no login system here; a session is a plain value the host
//! constructs after authenticating the caller by whatever means it has.
//! Mutating actions only check the role.

use serde::{Deserialize, Serialize};

/// The role a session acts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// Full read/write access to every entity.
    Admin,
    /// Read-only access; all mutations are refused.
    Viewer,
}

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The caller's e-mail, for audit logging.
    pub email: String,
    /// The caller's role.
    pub role: Role,
}

impl Session {
    /// Creates an admin session.
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: Role::Admin,
        }
    }

    /// Creates a read-only session.
    pub fn viewer(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: Role::Viewer,
        }
    }

    /// Whether this session may mutate entities.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
