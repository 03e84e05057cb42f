//! Store wiring shared by all handlers.

use std::sync::Arc;

use staffhub_auth::PermissionGateConfig;
use staffhub_store::{
    AttendanceRecord, ExpenseRecord, InMemoryRecordStore, InMemoryRolePermissionStore,
    InMemoryUserStore, LeaveRecord, RolePermissionStore, TaskRecord, UserStore,
};

/// Handles to every backing store, injected once at router construction.
///
/// Gates receive these handles explicitly (never resolved ambiently), so
/// tests can swap in fakes — including stores that fail, to exercise the
/// permission gate's fail-open path.
#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub role_permissions: Arc<dyn RolePermissionStore>,
    pub gate_config: PermissionGateConfig,

    pub leaves: Arc<InMemoryRecordStore<LeaveRecord>>,
    pub expenses: Arc<InMemoryRecordStore<ExpenseRecord>>,
    pub tasks: Arc<InMemoryRecordStore<TaskRecord>>,
    pub attendance: Arc<InMemoryRecordStore<AttendanceRecord>>,
}

impl AppServices {
    /// In-memory wiring (dev/test).
    pub fn in_memory(gate_config: PermissionGateConfig) -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            role_permissions: Arc::new(InMemoryRolePermissionStore::new()),
            gate_config,
            leaves: Arc::new(InMemoryRecordStore::new()),
            expenses: Arc::new(InMemoryRecordStore::new()),
            tasks: Arc::new(InMemoryRecordStore::new()),
            attendance: Arc::new(InMemoryRecordStore::new()),
        }
    }

    /// In-memory wiring with substituted identity/permission stores.
    pub fn with_stores(
        users: Arc<dyn UserStore>,
        role_permissions: Arc<dyn RolePermissionStore>,
        gate_config: PermissionGateConfig,
    ) -> Self {
        Self {
            users,
            role_permissions,
            gate_config,
            leaves: Arc::new(InMemoryRecordStore::new()),
            expenses: Arc::new(InMemoryRecordStore::new()),
            tasks: Arc::new(InMemoryRecordStore::new()),
            attendance: Arc::new(InMemoryRecordStore::new()),
        }
    }
}
