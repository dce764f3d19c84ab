//! Employee Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_not_blank;

/// Employee entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Role reference
    #[serde(default)]
    pub role_id: Option<i64>,
    pub branch: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Create / update employee payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmployeeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(custom(function = "validate_not_blank", message = "First name is required"))]
    pub first_name: String,

    #[validate(custom(function = "validate_not_blank", message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(required(message = "Select a role"))]
    pub role_id: Option<i64>,

    #[validate(custom(function = "validate_not_blank", message = "Branch is required"))]
    pub branch: String,

    pub is_active: bool,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: None,
            role_id: None,
            branch: String::new(),
            is_active: true,
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(e: &Employee) -> Self {
        Self {
            id: Some(e.id),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            role_id: e.role_id,
            branch: e.branch.clone(),
            is_active: e.is_active,
        }
    }
}

fn default_active() -> bool {
    true
}
