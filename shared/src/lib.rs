//! Shared vocabulary for the back-office console
//!
//! Common types used across the console crates: the permission catalog,
//! unified error types, response structures, and the data models the
//! access-control core reads.

pub mod error;
pub mod models;
pub mod permissions;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use permissions::{Permission, PermissionGroup};
