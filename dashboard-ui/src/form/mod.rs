//! Modal entity forms
//!
//! A form model owns the editable values of one draft. The
//! [`FormController`] owns the model together with per-field validation
//! state, the modal lifecycle and the injected persistence callback.

mod controller;
mod employee;
mod field;
mod role;
mod stock;

pub use controller::{FormController, FormModel, ModalState, SubmitOutcome};
pub use employee::EmployeeForm;
pub use field::{FieldState, NumericField};
pub use role::RoleForm;
pub use stock::StockForm;
