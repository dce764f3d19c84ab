//! Employee form

use shared::models::{Employee, EmployeeDraft};

use super::FormModel;

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role_id: Option<i64>,
    pub branch: String,
    pub is_active: bool,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role_id: None,
            branch: String::new(),
            is_active: true,
        }
    }

    pub fn edit(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone().unwrap_or_default(),
            role_id: employee.role_id,
            branch: employee.branch.clone(),
            is_active: employee.is_active,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormModel for EmployeeForm {
    type Draft = EmployeeDraft;

    const FIELDS: &'static [&'static str] =
        &["first_name", "last_name", "email", "role_id", "branch"];

    fn draft(&self) -> EmployeeDraft {
        let phone = self.phone.trim();
        EmployeeDraft {
            id: self.id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            role_id: self.role_id,
            branch: self.branch.trim().to_string(),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::controller::tests::RecordingPersist;
    use crate::form::{FieldState, FormController, SubmitOutcome};

    #[tokio::test]
    async fn test_only_blurred_fields_show_errors() {
        let persist = RecordingPersist::<EmployeeDraft>::ok();
        let mut ctl = FormController::open(EmployeeForm::new(), persist);

        ctl.form_mut().email = "not-an-email".into();
        assert!(ctl.blur("email").is_invalid());
        assert_eq!(ctl.field_state("first_name"), &FieldState::Untouched);

        ctl.form_mut().email = "ana@example.com".into();
        assert_eq!(ctl.blur("email"), &FieldState::Valid);
        assert!(!ctl.is_blocked());
    }

    #[tokio::test]
    async fn test_submit_marks_every_field() {
        let persist = RecordingPersist::<EmployeeDraft>::ok();
        let mut ctl = FormController::open(EmployeeForm::new(), persist.clone());
        ctl.form_mut().first_name = "Ana".into();

        let SubmitOutcome::Blocked(errors) = ctl.submit().await else {
            panic!("submit should be blocked");
        };
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["last_name", "email", "role_id", "branch"]);
        assert_eq!(ctl.field_state("first_name"), &FieldState::Valid);
        assert_eq!(persist.calls(), 0);
    }

    #[tokio::test]
    async fn test_edit_round_trips_existing_employee() {
        let employee = Employee {
            id: 9,
            first_name: "Rui".into(),
            last_name: "Costa".into(),
            email: "rui@example.com".into(),
            phone: None,
            role_id: Some(2),
            branch: "Harbour".into(),
            is_active: false,
        };
        let persist = RecordingPersist::<EmployeeDraft>::ok();
        let mut ctl = FormController::open(EmployeeForm::edit(&employee), persist.clone());

        assert_eq!(ctl.submit().await, SubmitOutcome::Saved);
        let saved = persist.saved.lock().unwrap();
        assert_eq!(saved[0], EmployeeDraft::from(&employee));
    }
}
