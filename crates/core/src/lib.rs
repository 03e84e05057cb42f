//! `staffhub-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod date;
pub mod error;
pub mod id;

pub use date::{is_weekend, parse_local_date, today_local, DateParseError};
pub use error::{DomainError, DomainResult};
pub use id::{CompanyId, RecordId, UserId};
