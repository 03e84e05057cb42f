//! Company (tenant) isolation decisions.
//!
//! Two deliberately different policies exist for a caller with no company
//! affiliation: the per-resource check lets them through (platform-level and
//! legacy accounts), while query scoping rejects them outright. Both
//! behaviors are observable contract; see DESIGN.md before "fixing" one to
//! match the other.

use thiserror::Error;

use staffhub_core::CompanyId;

use crate::Principal;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TenantError {
    #[error("access denied: resource belongs to a different company")]
    CompanyMismatch,

    #[error("access denied: user belongs to a different company")]
    PeerCompanyMismatch,

    #[error("User must be associated with a company")]
    NoCompany,
}

/// Outcome of a per-resource access check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResourceAccess {
    Allowed,

    /// Allowed, but the caller carries no company affiliation. Callers should
    /// log this; it usually indicates a platform-level or legacy account.
    AllowedWithoutCompany,
}

/// Per-resource guard: may `principal` touch a resource scoped to
/// `resource_company`?
///
/// A resource with no company is globally shared. Admin bypasses entirely.
pub fn check_resource_access(
    principal: &Principal,
    resource_company: Option<CompanyId>,
) -> Result<ResourceAccess, TenantError> {
    if principal.is_admin() {
        return Ok(ResourceAccess::Allowed);
    }

    let Some(caller_company) = principal.company_id else {
        return Ok(ResourceAccess::AllowedWithoutCompany);
    };

    match resource_company {
        Some(owner) if owner != caller_company => Err(TenantError::CompanyMismatch),
        _ => Ok(ResourceAccess::Allowed),
    }
}

/// Query-scoping guard for collection endpoints.
///
/// Returns the effective company filter to apply: admins keep whatever they
/// asked for (including no filter at all); everyone else is pinned to their
/// own company, and an explicit mismatching filter is a denial.
pub fn scope_query(
    principal: &Principal,
    requested: Option<CompanyId>,
) -> Result<Option<CompanyId>, TenantError> {
    if principal.is_admin() {
        return Ok(requested);
    }

    let Some(caller_company) = principal.company_id else {
        return Err(TenantError::NoCompany);
    };

    match requested {
        Some(req) if req != caller_company => Err(TenantError::CompanyMismatch),
        _ => Ok(Some(caller_company)),
    }
}

/// Peer-principal guard: may `principal` act on another user scoped to
/// `target_company`?
pub fn check_peer_access(
    principal: &Principal,
    target_company: Option<CompanyId>,
) -> Result<(), TenantError> {
    if principal.is_admin() {
        return Ok(());
    }

    match (principal.company_id, target_company) {
        (Some(a), Some(b)) if a != b => Err(TenantError::PeerCompanyMismatch),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use staffhub_core::UserId;

    fn principal(role: Role, company_id: Option<CompanyId>) -> Principal {
        Principal {
            user_id: UserId::new(),
            role,
            company_id,
            active: true,
        }
    }

    #[test]
    fn same_company_resource_allowed() {
        let company = CompanyId::new();
        let p = principal(Role::Employee, Some(company));
        assert_eq!(
            check_resource_access(&p, Some(company)),
            Ok(ResourceAccess::Allowed)
        );
    }

    #[test]
    fn cross_company_resource_denied() {
        let p = principal(Role::Employee, Some(CompanyId::new()));
        assert_eq!(
            check_resource_access(&p, Some(CompanyId::new())),
            Err(TenantError::CompanyMismatch)
        );
    }

    #[test]
    fn shared_resource_allowed_for_anyone() {
        let p = principal(Role::Client, Some(CompanyId::new()));
        assert_eq!(check_resource_access(&p, None), Ok(ResourceAccess::Allowed));
    }

    #[test]
    fn admin_bypasses_resource_check() {
        let p = principal(Role::Admin, Some(CompanyId::new()));
        assert_eq!(
            check_resource_access(&p, Some(CompanyId::new())),
            Ok(ResourceAccess::Allowed)
        );
    }

    #[test]
    fn company_less_caller_passes_resource_check_with_flag() {
        let p = principal(Role::Employee, None);
        assert_eq!(
            check_resource_access(&p, Some(CompanyId::new())),
            Ok(ResourceAccess::AllowedWithoutCompany)
        );
    }

    #[test]
    fn scope_query_injects_caller_company() {
        let company = CompanyId::new();
        let p = principal(Role::Employee, Some(company));
        assert_eq!(scope_query(&p, None), Ok(Some(company)));
    }

    #[test]
    fn scope_query_rejects_mismatching_filter() {
        let p = principal(Role::Hr, Some(CompanyId::new()));
        assert_eq!(
            scope_query(&p, Some(CompanyId::new())),
            Err(TenantError::CompanyMismatch)
        );
    }

    #[test]
    fn scope_query_is_strict_about_missing_company() {
        // The asymmetry with the per-resource guard: same caller, opposite
        // outcome.
        let p = principal(Role::Employee, None);
        assert_eq!(scope_query(&p, None), Err(TenantError::NoCompany));
        assert_eq!(
            check_resource_access(&p, Some(CompanyId::new())),
            Ok(ResourceAccess::AllowedWithoutCompany)
        );
    }

    #[test]
    fn admin_scope_query_keeps_explicit_filter() {
        let p = principal(Role::Admin, Some(CompanyId::new()));
        let other = CompanyId::new();
        assert_eq!(scope_query(&p, Some(other)), Ok(Some(other)));
        assert_eq!(scope_query(&p, None), Ok(None));
    }

    #[test]
    fn peer_guard_rejects_cross_company_target() {
        let p = principal(Role::Hr, Some(CompanyId::new()));
        assert_eq!(
            check_peer_access(&p, Some(CompanyId::new())),
            Err(TenantError::PeerCompanyMismatch)
        );
    }

    #[test]
    fn peer_guard_passes_same_company_and_admin() {
        let company = CompanyId::new();
        let p = principal(Role::Hr, Some(company));
        assert!(check_peer_access(&p, Some(company)).is_ok());

        let admin = principal(Role::Admin, None);
        assert!(check_peer_access(&admin, Some(CompanyId::new())).is_ok());
    }
}
