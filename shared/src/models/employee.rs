//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee response (without password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    /// Role reference (role name)
    pub role: String,
    /// Branch the employee is assigned to, if any
    pub branch_id: Option<String>,
    pub is_active: bool,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
    /// Role reference (role name)
    pub role: String,
    pub branch_id: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    /// Role reference (role name)
    pub role: Option<String>,
    pub branch_id: Option<String>,
    pub is_active: Option<bool>,
}
