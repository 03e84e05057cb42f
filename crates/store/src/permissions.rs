use std::sync::{Arc, RwLock};

use staffhub_auth::{Role, RolePermissionRecord};

use crate::StoreError;

/// Permission matrix lookup seam for the permission gate.
pub trait RolePermissionStore: Send + Sync {
    /// The single active record for the role, if one exists. Inactive
    /// historical records are never returned.
    fn find_active(&self, role: Role) -> Result<Option<RolePermissionRecord>, StoreError>;

    /// Install a new active record for the record's role, deactivating any
    /// previous active one (the at-most-one-active invariant).
    fn upsert(&self, record: RolePermissionRecord) -> Result<(), StoreError>;

    fn list_active(&self) -> Result<Vec<RolePermissionRecord>, StoreError>;
}

impl<S> RolePermissionStore for Arc<S>
where
    S: RolePermissionStore + ?Sized,
{
    fn find_active(&self, role: Role) -> Result<Option<RolePermissionRecord>, StoreError> {
        (**self).find_active(role)
    }

    fn upsert(&self, record: RolePermissionRecord) -> Result<(), StoreError> {
        (**self).upsert(record)
    }

    fn list_active(&self) -> Result<Vec<RolePermissionRecord>, StoreError> {
        (**self).list_active()
    }
}

/// In-memory permission matrix store for dev/test.
///
/// Keeps inactive historical records around, as the real store does; lookups
/// skip them.
#[derive(Debug, Default)]
pub struct InMemoryRolePermissionStore {
    inner: RwLock<Vec<RolePermissionRecord>>,
}

impl InMemoryRolePermissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RolePermissionStore for InMemoryRolePermissionStore {
    fn find_active(&self, role: Role) -> Result<Option<RolePermissionRecord>, StoreError> {
        let records = self
            .inner
            .read()
            .map_err(|_| StoreError::unavailable("permission store lock poisoned"))?;
        Ok(records.iter().find(|r| r.role == role && r.active).cloned())
    }

    fn upsert(&self, record: RolePermissionRecord) -> Result<(), StoreError> {
        let mut records = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("permission store lock poisoned"))?;
        for existing in records.iter_mut().filter(|r| r.role == record.role) {
            existing.active = false;
        }
        records.push(record);
        Ok(())
    }

    fn list_active(&self) -> Result<Vec<RolePermissionRecord>, StoreError> {
        let records = self
            .inner
            .read()
            .map_err(|_| StoreError::unavailable("permission store lock poisoned"))?;
        Ok(records.iter().filter(|r| r.active).cloned().collect())
    }
}
