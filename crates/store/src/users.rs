use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use staffhub_auth::{Principal, Role};
use staffhub_core::{CompanyId, UserId};

use crate::StoreError;

/// Persisted user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub company_id: Option<CompanyId>,
    pub active: bool,
}

impl UserRecord {
    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.id,
            role: self.role,
            company_id: self.company_id,
            active: self.active,
        }
    }
}

/// User lookup seam for identity verification and the peer-principal guard.
pub trait UserStore: Send + Sync {
    fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError>;
    fn insert(&self, record: UserRecord) -> Result<(), StoreError>;

    /// Deactivation only; users are never hard-deleted.
    fn set_active(&self, id: UserId, active: bool) -> Result<bool, StoreError>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        (**self).find_by_id(id)
    }

    fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        (**self).insert(record)
    }

    fn set_active(&self, id: UserId, active: bool) -> Result<bool, StoreError> {
        (**self).set_active(id, active)
    }
}

/// In-memory user store for dev/test.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::unavailable("user store lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }

    fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("user store lock poisoned"))?;
        map.insert(record.id, record);
        Ok(())
    }

    fn set_active(&self, id: UserId, active: bool) -> Result<bool, StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("user store lock poisoned"))?;
        match map.get_mut(&id) {
            Some(rec) => {
                rec.active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, company_id: Option<CompanyId>) -> UserRecord {
        UserRecord {
            id: UserId::new(),
            email: "alice@example.com".to_string(),
            display_name: "Alice".to_string(),
            role,
            company_id,
            active: true,
        }
    }

    #[test]
    fn insert_and_find() {
        let store = InMemoryUserStore::new();
        let rec = user(Role::Hr, Some(CompanyId::new()));
        store.insert(rec.clone()).unwrap();

        assert_eq!(store.find_by_id(rec.id).unwrap(), Some(rec));
        assert_eq!(store.find_by_id(UserId::new()).unwrap(), None);
    }

    #[test]
    fn deactivation_sticks() {
        let store = InMemoryUserStore::new();
        let rec = user(Role::Employee, None);
        store.insert(rec.clone()).unwrap();

        assert!(store.set_active(rec.id, false).unwrap());
        assert!(!store.find_by_id(rec.id).unwrap().unwrap().active);

        assert!(!store.set_active(UserId::new(), false).unwrap());
    }

    #[test]
    fn principal_conversion_carries_affiliation() {
        let company = CompanyId::new();
        let rec = user(Role::Client, Some(company));
        let p = rec.principal();
        assert_eq!(p.role, Role::Client);
        assert_eq!(p.company_id, Some(company));
        assert!(p.active);
    }
}
