use serde::{Deserialize, Serialize};

use staffhub_core::{CompanyId, UserId};

use crate::Role;

/// A fully resolved principal for authorization decisions.
///
/// Construction of this object is intentionally decoupled from storage and
/// transport: the API layer resolves a verified token subject against its
/// user store and builds one of these per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,

    /// Company affiliation. `None` for platform-level accounts that are not
    /// tied to any single tenant.
    pub company_id: Option<CompanyId>,

    /// Deactivated principals fail identity verification; they are never
    /// hard-deleted.
    pub active: bool,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
