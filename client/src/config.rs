//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the REST API
//! location is baked in at build time via `MEALPLAN_API_BASE`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `MEALPLAN_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5555";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Route the app sends signed-out users to.
pub const LOGIN_PATH: &str = "/login";

/// Account creation route. Like the login route, it is usable signed out.
pub const SIGNUP_PATH: &str = "/signup";

/// Base URL of the REST API.
pub fn api_base() -> &'static str {
    option_env!("MEALPLAN_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Absolute URL for an API `path` under the configured base.
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
