//! Shared error presentation

use std::sync::{Mutex, PoisonError};

use shared::error::AppError;

/// Receives errors that should be shown to the user
pub trait ErrorPresenter: Send + Sync {
    fn present(&self, error: AppError);
}

/// Modal dialog holding the most recent error until dismissed
#[derive(Debug, Default)]
pub struct ErrorModal {
    current: Mutex<Option<AppError>>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }

    pub fn current(&self) -> Option<AppError> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Close the dialog, returning what it showed
    pub fn dismiss(&self) -> Option<AppError> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl ErrorPresenter for ErrorModal {
    fn present(&self, error: AppError) {
        tracing::debug!(code = %error.code, message = %error.message, "Showing error modal");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }
}
