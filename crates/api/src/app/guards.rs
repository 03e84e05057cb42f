//! Handler-side guards binding the pure gate decisions to the stores.
//!
//! These run after `protect` (and any `role_gate` layer) and before the
//! handler does real work. Each returns `ApiError` so handlers compose them
//! with `?`.

use staffhub_auth::{
    check_peer_access, check_permission, check_resource_access, scope_query, Action,
    PermissionPolicy, Principal, ResourceAccess, TenantError,
};
use staffhub_core::{CompanyId, UserId};
use staffhub_store::CompanyScoped;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// Fine-grained permission gate against the stored role matrix.
///
/// Store failures follow the configured policy: fail-open (log + allow, the
/// original behavior) or fail-closed (deny).
pub fn require_permission(
    services: &AppServices,
    principal: &Principal,
    module: &str,
    action: Action,
) -> Result<(), ApiError> {
    if principal.is_admin() {
        return Ok(());
    }

    match services.role_permissions.find_active(principal.role) {
        Ok(record) => {
            let policy = PermissionPolicy::from_record(record);
            check_permission(principal.role, &policy, module, action).map_err(ApiError::from)
        }
        Err(e) => {
            if services.gate_config.fail_open {
                tracing::warn!(
                    error = %e,
                    role = %principal.role,
                    module,
                    "permission lookup failed; allowing request (fail-open)"
                );
                Ok(())
            } else {
                tracing::error!(error = %e, role = %principal.role, module, "permission lookup failed");
                Err(ApiError::forbidden(format!(
                    "you do not have access to the {module} module"
                )))
            }
        }
    }
}

/// Per-resource tenant guard: 404 when absent, 403 on company mismatch,
/// lenient (with a warning) for callers without a company affiliation.
pub fn enforce_company_access<T: CompanyScoped>(
    principal: &Principal,
    resource: Option<T>,
    kind: &str,
) -> Result<T, ApiError> {
    let Some(resource) = resource else {
        return Err(ApiError::not_found(format!("{kind} not found")));
    };

    match check_resource_access(principal, resource.company_id()) {
        Ok(ResourceAccess::Allowed) => Ok(resource),
        Ok(ResourceAccess::AllowedWithoutCompany) => {
            tracing::warn!(
                user = %principal.user_id,
                "principal has no company affiliation; allowing resource access"
            );
            Ok(resource)
        }
        Err(e) => Err(ApiError::from(e)),
    }
}

/// Query-scoping tenant guard for listing endpoints. Returns the effective
/// company filter; strict about callers without a company.
pub fn scope_to_company(
    principal: &Principal,
    requested: Option<CompanyId>,
) -> Result<Option<CompanyId>, ApiError> {
    scope_query(principal, requested).map_err(ApiError::from)
}

/// Whether a record passes the effective company filter. Records without a
/// company are globally shared and always visible.
pub fn passes_company_filter<T: CompanyScoped>(record: &T, filter: Option<CompanyId>) -> bool {
    match (filter, record.company_id()) {
        (None, _) => true,
        (Some(_), None) => true,
        (Some(want), Some(have)) => want == have,
    }
}

/// Peer-principal tenant guard: the target user (when referenced) must share
/// the caller's company.
pub fn verify_user_company_access(
    services: &AppServices,
    principal: &Principal,
    target: Option<UserId>,
) -> Result<(), ApiError> {
    let Some(target) = target else {
        return Ok(());
    };

    match services.users.find_by_id(target) {
        Ok(Some(user)) => check_peer_access(principal, user.company_id).map_err(|e| match e {
            TenantError::PeerCompanyMismatch => {
                ApiError::forbidden("access denied: user belongs to a different company")
            }
            other => ApiError::from(other),
        }),
        Ok(None) => Err(ApiError::not_found("target user not found")),
        Err(e) => {
            tracing::error!(error = %e, "peer user lookup failed");
            Err(ApiError::internal("user lookup failed"))
        }
    }
}
