//! Session lifecycle: restore on load, login, signup, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These functions are the only writers of `AuthState` and, together with
//! the 401 handler in `net::api`, the only writers of the stored token.
//! There is no refresh-token flow and nothing is retried.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};
use crate::state::auth::AuthState;
use crate::util::token;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("No token returned")]
    MissingToken,
}

/// Check the stored token against `auth/me` and settle the loading state.
pub async fn restore(auth: RwSignal<AuthState>) {
    if token::load().is_none() {
        auth.update(AuthState::signed_out);
        return;
    }
    match api::fetch_current_user().await {
        Ok(user) => auth.update(|a| a.signed_in(user)),
        Err(e) => {
            leptos::logging::warn!("session restore failed: {e}");
            auth.update(AuthState::signed_out);
        }
    }
}

/// Sign in with email + password.
///
/// # Errors
///
/// Returns an error if the credentials are rejected or no token comes back.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<(), SessionError> {
    let response = api::login(email, password).await?;
    establish(auth, response).await
}

/// Create an account and sign in as it.
///
/// # Errors
///
/// Returns an error if the signup is refused or no token comes back.
pub async fn signup(
    auth: RwSignal<AuthState>,
    email: &str,
    username: &str,
    password: &str,
) -> Result<(), SessionError> {
    let response = api::signup(email, username, password).await?;
    establish(auth, response).await
}

/// Forget the token and the current user.
pub fn logout(auth: RwSignal<AuthState>) {
    token::clear();
    auth.update(AuthState::signed_out);
}

async fn establish(auth: RwSignal<AuthState>, response: AuthResponse) -> Result<(), SessionError> {
    token::store(bearer_token(&response)?);
    let me = api::fetch_current_user().await;
    match identity_after_auth(me, response.user) {
        Ok(Some(user)) => auth.update(|a| a.signed_in(user)),
        Ok(None) => auth.update(AuthState::signed_out),
        Err(e) => {
            token::clear();
            auth.update(AuthState::signed_out);
            return Err(e.into());
        }
    }
    Ok(())
}

fn bearer_token(response: &AuthResponse) -> Result<&str, SessionError> {
    response.bearer_token().ok_or(SessionError::MissingToken)
}

/// Prefer the fresh `auth/me` identity; fall back to the user embedded in
/// the auth response unless the new token itself was rejected.
fn identity_after_auth(me: Result<User, ApiError>, embedded: Option<User>) -> Result<Option<User>, ApiError> {
    match me {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => Err(e),
        Err(_) => Ok(embedded),
    }
}

/// Inline text for a failed login or signup.
pub fn failure_text(prefix: &str, err: &SessionError) -> String {
    match err {
        SessionError::Api(api) => crate::net::error::failure_message(prefix, api),
        SessionError::MissingToken => err.to_string(),
    }
}
