//! Role form

use shared::models::{DEFAULT_SENIORITY, MAX_SENIORITY, MIN_SENIORITY, Role, RoleDraft};

use super::{FormModel, NumericField};

#[derive(Debug, Clone, PartialEq)]
pub struct RoleForm {
    id: Option<i64>,
    pub role_name: String,
    pub seniority: NumericField<i32>,
    pub description: String,
}

impl RoleForm {
    /// Blank form for a new role
    pub fn new() -> Self {
        Self {
            id: None,
            role_name: String::new(),
            seniority: NumericField::new(DEFAULT_SENIORITY).with_range(MIN_SENIORITY, MAX_SENIORITY),
            description: String::new(),
        }
    }

    pub fn edit(role: &Role) -> Self {
        Self {
            id: Some(role.id),
            role_name: role.role_name.clone(),
            seniority: NumericField::new(role.seniority).with_range(MIN_SENIORITY, MAX_SENIORITY),
            description: role.description.clone().unwrap_or_default(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Default for RoleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormModel for RoleForm {
    type Draft = RoleDraft;

    const FIELDS: &'static [&'static str] = &["role_name", "seniority"];

    fn draft(&self) -> RoleDraft {
        let description = self.description.trim();
        RoleDraft {
            id: self.id,
            role_name: self.role_name.trim().to_string(),
            seniority: self.seniority.value(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }

    fn on_blur(&mut self, field: &str) {
        if field == "seniority" && self.seniority.blur() {
            tracing::debug!(value = self.seniority.value(), "Seniority reset to last valid value");
        }
    }
}
