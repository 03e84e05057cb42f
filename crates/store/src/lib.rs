//! `staffhub-store` — storage trait seams and in-memory implementations.
//!
//! Gates and handlers receive store handles at construction time (no ambient
//! globals), so tests substitute fakes freely. The in-memory stores are the
//! default dev/test path; a persistent backend would implement the same
//! traits.

pub mod error;
pub mod memory;
pub mod permissions;
pub mod records;
pub mod users;

pub use error::StoreError;
pub use memory::InMemoryRecordStore;
pub use permissions::{InMemoryRolePermissionStore, RolePermissionStore};
pub use records::{
    AttendanceRecord, CompanyScoped, ExpenseRecord, GeoPoint, LeaveRecord, LeaveStatus,
    TaskRecord,
};
pub use users::{InMemoryUserStore, UserRecord, UserStore};
