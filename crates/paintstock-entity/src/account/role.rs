//! Role enumeration and per-account permission flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles an account can hold. Roles are independent: holding `Admin`
/// does not grant `Editor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May adjust paint stock.
    Editor,
    /// May list and administer accounts.
    Admin,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The role flags of one account, as read from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Permissions {
    #[serde(with = "crate::flag")]
    pub editor: bool,
    #[serde(with = "crate::flag")]
    pub admin: bool,
}

impl Permissions {
    /// The sentinel used whenever a lookup fails: nothing is granted.
    pub const fn none() -> Self {
        Self {
            editor: false,
            admin: false,
        }
    }

    /// Whether the flag for `role` is set.
    pub fn grants(&self, role: Role) -> bool {
        match role {
            Role::Editor => self.editor,
            Role::Admin => self.admin,
        }
    }
}
