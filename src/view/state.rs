//! View state owned by the controller.

use crate::api::types::{HealthStatus, NewUser, User};

/// An in-progress, not-yet-submitted new-user form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Display name field.
    pub name: String,
    /// Email field.
    pub email: String,
}

impl Draft {
    /// Create a draft from field values.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Whether both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Reset both fields to empty.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
    }

    /// Convert to the wire payload for a create request.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// State rendered by the dashboard.
///
/// `users` is always the last successfully fetched snapshot with any
/// successfully created users appended in submission order; failed
/// requests never leave partial state behind.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Last successful health snapshot, if any.
    pub health: Option<HealthStatus>,
    /// User roster.
    pub users: Vec<User>,
    /// True until the initial users fetch settles.
    pub loading: bool,
    /// In-progress new-user form.
    pub draft: Draft,
}

impl ViewState {
    /// Create the pre-initialization state: loading, nothing fetched.
    pub fn new() -> Self {
        Self {
            health: None,
            users: Vec::new(),
            loading: true,
            draft: Draft::default(),
        }
    }
}
