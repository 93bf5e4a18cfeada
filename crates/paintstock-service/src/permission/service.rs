//! Permission lookup, role enforcement, and account flag management.

use std::sync::Arc;

use tracing::{info, warn};

use paintstock_auth::rbac::{Action, RbacEnforcer};
use paintstock_core::error::AppError;
use paintstock_database::repositories::UserRepository;
use paintstock_entity::account::{AccountSummary, Permissions, Role};

use crate::context::RequestContext;

/// Resolves the caller's role flags and enforces the policy table.
#[derive(Debug, Clone)]
pub struct PermissionService {
    user_repo: Arc<UserRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl PermissionService {
    pub fn new(user_repo: Arc<UserRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { user_repo, rbac }
    }

    /// Role flags of `user_id`.
    ///
    /// Lookup failures and unknown accounts yield [`Permissions::none`], so a
    /// failed lookup can never authorize anything.
    pub async fn check_permissions(&self, user_id: i64) -> Permissions {
        match self.user_repo.find_permissions(user_id).await {
            Ok(Some(permissions)) => permissions,
            Ok(None) => {
                warn!(user_id, "Permission lookup for unknown account");
                Permissions::none()
            }
            Err(e) => {
                warn!(user_id, error = %e, "Permission lookup failed");
                Permissions::none()
            }
        }
    }

    /// Whether `user_id` holds the admin flag. False on any lookup failure.
    pub async fn is_admin(&self, user_id: i64) -> bool {
        self.check_permissions(user_id).await.grants(Role::Admin)
    }

    /// Resolves the caller's flags and checks them against `action`.
    ///
    /// Returns the resolved flags on success, an authorization error
    /// otherwise.
    pub async fn authorize(
        &self,
        ctx: &RequestContext,
        action: Action,
    ) -> Result<Permissions, AppError> {
        let permissions = self.check_permissions(ctx.user_id).await;
        if let Err(e) = self.rbac.require(&permissions, action) {
            warn!(user_id = ctx.user_id, ?action, "Permission denied");
            return Err(e);
        }
        Ok(permissions)
    }

    /// Lists every account. Requires the admin role.
    pub async fn list_accounts(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<AccountSummary>, AppError> {
        self.authorize(ctx, Action::ListAccounts).await?;
        self.user_repo.list().await
    }

    /// Sets the activation flag of `target`. Requires the admin role.
    pub async fn set_activated(
        &self,
        ctx: &RequestContext,
        target: i64,
        activated: bool,
    ) -> Result<bool, AppError> {
        self.authorize(ctx, Action::ManageAccounts).await?;

        let stored = self
            .user_repo
            .set_activated(target, activated)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(
            admin_id = ctx.user_id,
            target_id = target,
            activated = stored,
            "Account activation changed"
        );
        Ok(stored)
    }

    /// Sets the editor flag of `target`. Requires the admin role.
    pub async fn set_editor(
        &self,
        ctx: &RequestContext,
        target: i64,
        editor: bool,
    ) -> Result<bool, AppError> {
        self.authorize(ctx, Action::ManageAccounts).await?;

        let stored = self
            .user_repo
            .set_editor(target, editor)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(
            admin_id = ctx.user_id,
            target_id = target,
            editor = stored,
            "Editor role changed"
        );
        Ok(stored)
    }
}
