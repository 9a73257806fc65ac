//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as context by the root component. Route guards read it to decide
//! between rendering, "Loading…", and redirecting to login; the header reads
//! it for the greeting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Starts in the loading state: until the stored token has been checked, no
/// view can know whether the visitor is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Header greeting, present only when signed in.
    pub fn greeting(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("Hi, {}", u.username))
    }
}
