use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Action → allowed map for a single module.
///
/// Seeded with the four standard actions; modules may carry extra action keys
/// (e.g. "approve") without any schema change. An absent key means denied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionMap(BTreeMap<String, bool>);

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard view/create/edit/delete map.
    pub fn standard(view: bool, create: bool, edit: bool, delete: bool) -> Self {
        let mut map = BTreeMap::new();
        map.insert("view".to_string(), view);
        map.insert("create".to_string(), create);
        map.insert("edit".to_string(), edit);
        map.insert("delete".to_string(), delete);
        Self(map)
    }

    pub fn set(&mut self, action: impl Into<String>, allowed: bool) {
        self.0.insert(action.into(), allowed);
    }

    /// Whether the action is explicitly allowed. Absent keys deny.
    pub fn allows(&self, action: &str) -> bool {
        self.0.get(action).copied().unwrap_or(false)
    }
}

/// Permission entry for one named module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermission {
    /// Module key, e.g. "leaves", "payroll". The set of modules is
    /// admin-configurable, so this stays an open string.
    pub module: String,
    pub actions: ActionMap,
}

impl ModulePermission {
    pub fn new(module: impl Into<String>, actions: ActionMap) -> Self {
        Self {
            module: module.into(),
            actions,
        }
    }
}

/// Persisted role → module → action matrix.
///
/// At most one active record exists per role; the store enforces this on
/// upsert. Inactive historical records are ignored by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissionRecord {
    pub role: Role,
    pub active: bool,
    pub permissions: Vec<ModulePermission>,
}

impl RolePermissionRecord {
    pub fn new(role: Role, permissions: Vec<ModulePermission>) -> Self {
        Self {
            role,
            active: true,
            permissions,
        }
    }
}

/// Effective permission state for a role.
///
/// The unconfigured/bootstrap state is a first-class variant rather than an
/// inferred null-check: a freshly provisioned system has no matrix seeded and
/// must remain usable until an admin configures one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionPolicy {
    /// No active record, or an active record with an empty entry list.
    /// Everything is allowed.
    Unrestricted,

    /// An admin-configured matrix; entries are authoritative.
    Configured(Vec<ModulePermission>),
}

impl PermissionPolicy {
    pub fn from_record(record: Option<RolePermissionRecord>) -> Self {
        match record {
            Some(rec) if !rec.permissions.is_empty() => Self::Configured(rec.permissions),
            _ => Self::Unrestricted,
        }
    }

    pub fn module(&self, name: &str) -> Option<&ModulePermission> {
        match self {
            Self::Unrestricted => None,
            Self::Configured(entries) => entries.iter().find(|p| p.module == name),
        }
    }
}
