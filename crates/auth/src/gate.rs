//! Role and permission gate decisions.
//!
//! - No IO
//! - No panics
//! - No business logic (pure policy checks)
//!
//! The API layer fetches the caller's `PermissionPolicy` from the store and
//! calls into these functions; how lookup *failures* are handled (fail-open
//! vs fail-closed) is the caller's choice via [`PermissionGateConfig`].

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PermissionPolicy, Role};

/// A permission-gated action on a module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

impl Default for Action {
    /// The gate's default action when a route does not name one.
    fn default() -> Self {
        Action::View
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Action::View),
            "create" => Ok(Action::Create),
            "edit" => Ok(Action::Edit),
            "delete" => Ok(Action::Delete),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("role '{0}' is not authorized to access this resource")]
    RoleNotAllowed(Role),

    #[error("you do not have access to the {module} module")]
    NoModuleAccess { module: String },

    #[error("you do not have {action} permission for the {module} module")]
    ActionNotPermitted { module: String, action: Action },
}

/// Behavior of the permission gate when the store lookup itself fails.
///
/// The default mirrors the original system: availability over strict denial.
/// Hardened deployments flip `fail_open` to deny instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PermissionGateConfig {
    pub fail_open: bool,
}

impl Default for PermissionGateConfig {
    fn default() -> Self {
        Self { fail_open: true }
    }
}

/// Coarse gate: allow only if the role is in the endpoint's static allow-list.
pub fn check_role(role: Role, allowed: &[Role]) -> Result<(), GateError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(GateError::RoleNotAllowed(role))
    }
}

/// Fine-grained gate: decide module/action access from the stored matrix.
///
/// Admin always passes without consulting the policy. `Unrestricted` allows
/// everything (bootstrap fail-open, see [`PermissionPolicy`]).
pub fn check_permission(
    role: Role,
    policy: &PermissionPolicy,
    module: &str,
    action: Action,
) -> Result<(), GateError> {
    if role.is_admin() {
        return Ok(());
    }

    let entries = match policy {
        PermissionPolicy::Unrestricted => return Ok(()),
        PermissionPolicy::Configured(entries) => entries,
    };

    let Some(entry) = entries.iter().find(|p| p.module == module) else {
        return Err(GateError::NoModuleAccess {
            module: module.to_string(),
        });
    };

    if entry.actions.allows(action.as_str()) {
        Ok(())
    } else {
        Err(GateError::ActionNotPermitted {
            module: module.to_string(),
            action,
        })
    }
}
