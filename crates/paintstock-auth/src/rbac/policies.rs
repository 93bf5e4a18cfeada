//! Action-to-role policy table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use paintstock_entity::account::Role;

/// An operation reachable through the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read the paint stock table.
    ViewStock,
    /// Change a stock level.
    AdjustStock,
    /// Read the account list.
    ListAccounts,
    /// Change an account's activation or editor flag.
    ManageAccounts,
}

/// Maps each action to the role it requires.
///
/// Actions without an entry only require an authenticated caller.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    rules: HashMap<Action, Role>,
}

impl RbacPolicies {
    /// Stock reads need a session, stock writes need `Editor`, and every
    /// account operation needs `Admin`.
    pub fn new() -> Self {
        let rules = HashMap::from([
            (Action::AdjustStock, Role::Editor),
            (Action::ListAccounts, Role::Admin),
            (Action::ManageAccounts, Role::Admin),
        ]);
        Self { rules }
    }

    /// The role required for `action`, if any.
    pub fn required_role(&self, action: Action) -> Option<Role> {
        self.rules.get(&action).copied()
    }

    /// Replace the rule for one action.
    pub fn with_rule(mut self, action: Action, role: Option<Role>) -> Self {
        match role {
            Some(role) => self.rules.insert(action, role),
            None => self.rules.remove(&action),
        };
        self
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
