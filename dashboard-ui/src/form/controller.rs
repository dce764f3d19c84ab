//! Form controller: validation, modal lifecycle and submission

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use dashboard_client::Persist;
use shared::error::AppError;
use validator::{Validate, ValidationError};

use super::FieldState;
use crate::presenter::ErrorPresenter;

/// Editable values behind one modal form
pub trait FormModel: Send {
    type Draft: Validate + Clone + Send + Sync + 'static;

    /// Fields that carry validation state, in display order
    const FIELDS: &'static [&'static str];

    /// Snapshot of the current values
    fn draft(&self) -> Self::Draft;

    /// Normalise a field when it loses focus
    fn on_blur(&mut self, _field: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Open,
    /// Waiting for the persistence callback
    Submitting,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Persisted; the modal is closed
    Saved,
    /// Validation failed; nothing was persisted
    Blocked(Vec<AppError>),
    /// The callback failed; the modal stays open
    Failed(AppError),
    /// The modal is not open
    NotOpen,
}

static UNTOUCHED: FieldState = FieldState::Untouched;

pub struct FormController<F: FormModel> {
    form: F,
    fields: BTreeMap<&'static str, FieldState>,
    modal: ModalState,
    persist: Arc<dyn Persist<F::Draft>>,
    presenter: Option<Arc<dyn ErrorPresenter>>,
    error: Option<AppError>,
}

impl<F: FormModel> FormController<F> {
    /// Open a modal editing `form`
    pub fn open(form: F, persist: Arc<dyn Persist<F::Draft>>) -> Self {
        Self {
            form,
            fields: BTreeMap::new(),
            modal: ModalState::Open,
            persist,
            presenter: None,
            error: None,
        }
    }

    /// Forward save failures to a shared presenter
    pub fn with_presenter(mut self, presenter: Arc<dyn ErrorPresenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_open(&self) -> bool {
        self.modal != ModalState::Closed
    }

    /// Error of the last failed save
    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn field_state(&self, field: &str) -> &FieldState {
        self.fields.get(field).unwrap_or(&UNTOUCHED)
    }

    /// Whether a touched field is currently invalid
    pub fn is_blocked(&self) -> bool {
        self.fields.values().any(FieldState::is_invalid)
    }

    /// Validate one field after it loses focus
    pub fn blur(&mut self, field: &str) -> &FieldState {
        let Some(name) = F::FIELDS.iter().copied().find(|f| *f == field) else {
            return &UNTOUCHED;
        };
        self.form.on_blur(name);
        let messages = field_messages(&self.form.draft());
        let state = state_for(&messages, name);
        self.fields.insert(name, state);
        self.field_state(name)
    }

    /// Validate everything and, if valid, await the persistence callback
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.modal != ModalState::Open {
            return SubmitOutcome::NotOpen;
        }

        for &field in F::FIELDS {
            self.form.on_blur(field);
        }
        let draft = self.form.draft();
        let messages = field_messages(&draft);
        for &field in F::FIELDS {
            self.fields.insert(field, state_for(&messages, field));
        }

        let invalid: Vec<AppError> = F::FIELDS
            .iter()
            .filter_map(|f| {
                let msg = self.field_state(f).message()?;
                Some(AppError::validation(*f, msg))
            })
            .collect();
        if !invalid.is_empty() {
            tracing::debug!(fields = invalid.len(), "Submit blocked by validation");
            return SubmitOutcome::Blocked(invalid);
        }

        self.modal = ModalState::Submitting;
        self.error = None;
        match self.persist.save(&draft).await {
            Ok(()) => {
                self.modal = ModalState::Closed;
                tracing::info!("Form saved");
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.modal = ModalState::Open;
                tracing::warn!(code = %e.code, error = %e.message, "Form save failed");
                if let Some(presenter) = &self.presenter {
                    presenter.present(e.clone());
                }
                self.error = Some(e.clone());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Close without saving
    pub fn cancel(&mut self) {
        if self.modal == ModalState::Closed {
            return;
        }
        tracing::debug!("Form cancelled");
        self.modal = ModalState::Closed;
        self.fields.clear();
        self.error = None;
    }
}

/// First message per invalid field
fn field_messages<D: Validate>(draft: &D) -> HashMap<String, String> {
    let Err(errors) = draft.validate() else {
        return HashMap::new();
    };
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| Some((field.to_string(), message_of(errs.first()?))))
        .collect()
}

fn message_of(err: &ValidationError) -> String {
    match &err.message {
        Some(msg) => msg.to_string(),
        None => format!("Invalid value ({})", err.code),
    }
}

fn state_for(messages: &HashMap<String, String>, field: &str) -> FieldState {
    match messages.get(field) {
        Some(msg) => FieldState::Invalid(msg.clone()),
        None => FieldState::Valid,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Persistence callback that records drafts and answers with a canned result
    pub(crate) struct RecordingPersist<D> {
        pub saved: Mutex<Vec<D>>,
        result: Result<(), AppError>,
    }

    impl<D> RecordingPersist<D> {
        pub fn ok() -> Arc<Self> {
            Arc::new(Self {
                saved: Mutex::new(Vec::new()),
                result: Ok(()),
            })
        }

        pub fn failing(err: AppError) -> Arc<Self> {
            Arc::new(Self {
                saved: Mutex::new(Vec::new()),
                result: Err(err),
            })
        }

        pub fn calls(&self) -> usize {
            self.saved.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl<D: Clone + Send + Sync + 'static> Persist<D> for RecordingPersist<D> {
        async fn save(&self, draft: &D) -> Result<(), AppError> {
            self.saved.lock().unwrap().push(draft.clone());
            self.result.clone()
        }
    }
}
