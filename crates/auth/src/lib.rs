//! `staffhub-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: gate
//! functions decide, they never fetch. Stores are injected by the caller.

pub mod claims;
pub mod gate;
pub mod permissions;
pub mod principal;
pub mod roles;
pub mod tenant;

pub use claims::{Hs256JwtVerifier, JwtClaims, JwtVerifier, TokenError, validate_claims};
pub use gate::{check_permission, check_role, Action, GateError, PermissionGateConfig};
pub use permissions::{ActionMap, ModulePermission, PermissionPolicy, RolePermissionRecord};
pub use principal::Principal;
pub use roles::{Role, RoleParseError};
pub use tenant::{check_peer_access, check_resource_access, scope_query, ResourceAccess, TenantError};
