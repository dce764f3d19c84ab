//! POS admin dashboard - presentation layer
//!
//! Analytics widgets bind a [`dashboard_client::QueryHook`] to a pure
//! chart renderer; modal forms bind a draft to an injected persistence
//! callback. Pages compose widgets and push shared filters down to them.

pub mod chart;
pub mod form;
pub mod logging;
pub mod page;
pub mod presenter;
pub mod widget;

pub use chart::Visual;
pub use form::{FieldState, FormController, ModalState, SubmitOutcome};
pub use page::{Page, PageKind};
pub use presenter::{ErrorModal, ErrorPresenter};
pub use widget::{ChartWidget, Filters, Widget};

// Re-export the crates the UI is built on
pub use dashboard_client;
pub use shared;
