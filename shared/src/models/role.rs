//! Role Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_not_blank;

/// Seniority assigned to a freshly created role
pub const DEFAULT_SENIORITY: i32 = 1;

/// Accepted seniority range, kept in step with the `RoleDraft` rule
pub const MIN_SENIORITY: i32 = 1;
pub const MAX_SENIORITY: i32 = 10;

/// Role entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    /// Rank used to order roles (1 = most junior)
    pub seniority: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create / update role payload
///
/// `id` is `None` when creating a new role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RoleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[validate(custom(function = "validate_not_blank", message = "Role name is required"))]
    pub role_name: String,

    #[validate(range(min = 1, max = 10, message = "Seniority must be between 1 and 10"))]
    pub seniority: i32,

    pub description: Option<String>,
}

impl Default for RoleDraft {
    fn default() -> Self {
        Self {
            id: None,
            role_name: String::new(),
            seniority: DEFAULT_SENIORITY,
            description: None,
        }
    }
}

impl From<&Role> for RoleDraft {
    fn from(role: &Role) -> Self {
        Self {
            id: Some(role.id),
            role_name: role.role_name.clone(),
            seniority: role.seniority,
            description: role.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let draft = RoleDraft::default();
        assert_eq!(draft.id, None);
        assert_eq!(draft.seniority, DEFAULT_SENIORITY);
    }

    #[test]
    fn test_blank_role_name_is_rejected() {
        let draft = RoleDraft {
            role_name: "   ".into(),
            ..RoleDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role_name"));
    }

    #[test]
    fn test_seniority_range() {
        let draft = RoleDraft {
            role_name: "Cashier".into(),
            seniority: 11,
            ..RoleDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("seniority"));
    }

    #[test]
    fn test_seniority_bounds_match_rule() {
        let at = |seniority| RoleDraft {
            role_name: "Cashier".into(),
            seniority,
            ..RoleDraft::default()
        };
        assert!(at(MIN_SENIORITY).validate().is_ok());
        assert!(at(MAX_SENIORITY).validate().is_ok());
        assert!(at(MIN_SENIORITY - 1).validate().is_err());
        assert!(at(MAX_SENIORITY + 1).validate().is_err());
    }
}
