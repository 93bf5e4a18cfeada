//! RBAC enforcement: checks an account's flags against the policy table.

use paintstock_core::error::AppError;
use paintstock_entity::account::Permissions;

use super::policies::{Action, RbacPolicies};

/// Enforces role-based access control for HTTP operations.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Whether `permissions` satisfy the rule for `action`.
    pub fn is_allowed(&self, permissions: &Permissions, action: Action) -> bool {
        match self.policies.required_role(action) {
            Some(role) => permissions.grants(role),
            None => true,
        }
    }

    /// Returns `Ok(())` if allowed, or an authorization error if denied.
    pub fn require(&self, permissions: &Permissions, action: Action) -> Result<(), AppError> {
        if self.is_allowed(permissions, action) {
            return Ok(());
        }

        let role = self
            .policies
            .required_role(action)
            .map(|r| r.as_str())
            .unwrap_or("unknown");
        Err(AppError::authorization(format!(
            "The {role} role is required for this action"
        )))
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}
