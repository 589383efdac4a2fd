//! Form Submitter
//!
//! A fixed record of string fields submitted as one request body. Failures
//! become a single message shown above the form.

use crate::error::ApiError;

pub const LOGIN_FAILED: &str = "login failed";
pub const SIGNUP_FAILED: &str = "signup failed";
pub const BOARD_FAILED: &str = "could not create board";
pub const COMMENT_FAILED: &str = "could not post comment";
pub const REPIN_FAILED: &str = "could not repin";

#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmitter<F> {
    fields: F,
    error: Option<String>,
    submitting: bool,
    fallback: &'static str,
}

impl<F: Clone + Default> FormSubmitter<F> {
    /// `fallback` is shown when a failure carries no server message
    pub fn new(fallback: &'static str) -> Self {
        Self {
            fields: F::default(),
            error: None,
            submitting: false,
            fallback,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Snapshot of the whole record to send
    pub fn submit(&mut self) -> F {
        self.submitting = true;
        self.fields.clone()
    }

    /// `reset` empties every field
    pub fn succeed(&mut self, reset: bool) {
        self.submitting = false;
        self.error = None;
        if reset {
            self.fields = F::default();
        }
    }

    pub fn fail(&mut self, err: &ApiError) -> &str {
        self.submitting = false;
        log::warn!("form submission failed: {}", err);
        self.error.insert(err.user_message(self.fallback))
    }
}
