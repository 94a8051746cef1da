//! Data models the access-control core reads

pub mod employee;
pub mod role;

pub use employee::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
pub use role::{Role, RoleCreate, RoleUpdate};
