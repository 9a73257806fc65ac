//! REST API helpers for the meal-planner backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 on any session-scoped call clears the token and sends the browser to
//! the login view before the error reaches the caller. The credential
//! endpoints opt out: there a 401 just means the password was wrong. Nothing
//! is retried or queued.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AuthResponse, Day, MealPlan, MealType, Page, RecipeDetail, RecipeRef, RecipeSummary, ShoppingItem, User,
};
use crate::config::{LOGIN_PATH, SIGNUP_PATH};
use crate::util::token;

const AUTH_LOGIN: &str = "auth/login";
const AUTH_SIGNUP: &str = "auth/signup";
const AUTH_ME: &str = "auth/me";
const RECIPES: &str = "recipes";
const RECIPES_SEARCH: &str = "recipes/search";
const MEAL_PLANS: &str = "meal_plans";
const MEAL_ITEMS: &str = "meal_items";
const MEAL_ITEMS_EXTERNAL: &str = "meal_items/external";
const SHOPPING_ITEMS: &str = "shopping_items";

/// Page size the plan pickers request.
pub const PLAN_PICKER_PAGE_SIZE: u32 = 50;
/// Page size for the recipe dropdown in the plan grid.
pub const GRID_RECIPE_PAGE_SIZE: u32 = 100;
/// Page size for shopping items of one plan.
pub const SHOPPING_PAGE_SIZE: u32 = 100;

/// How a 401 response is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AuthPolicy {
    /// The token is stale: clear it and go to the login view.
    Session,
    /// Wrong credentials: report the failure to the caller only.
    Credentials,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

type Query = Vec<(&'static str, String)>;

fn recipe_path(reference: &RecipeRef) -> String {
    match reference {
        RecipeRef::Local(id) => format!("{RECIPES}/{id}"),
        RecipeRef::External { provider, external_id } => format!("{RECIPES}/{provider}/{external_id}"),
    }
}

fn meal_plan_path(plan_id: i64) -> String {
    format!("{MEAL_PLANS}/{plan_id}")
}

fn generate_shopping_path(plan_id: i64) -> String {
    format!("{MEAL_PLANS}/{plan_id}/generate_shopping")
}

fn meal_item_path(item_id: i64) -> String {
    format!("{MEAL_ITEMS}/{item_id}")
}

fn shopping_item_path(item_id: i64) -> String {
    format!("{SHOPPING_ITEMS}/{item_id}")
}

fn page_query(page: u32, per_page: u32) -> Query {
    vec![("page", page.to_string()), ("per_page", per_page.to_string())]
}

/// Endpoint and query for a recipe listing: plain browse or search by `term`.
fn recipe_list_request(term: &str, page: u32, per_page: u32) -> (&'static str, Query) {
    let mut query = page_query(page, per_page);
    let term = term.trim();
    if term.is_empty() {
        (RECIPES, query)
    } else {
        query.push(("q", term.to_owned()));
        (RECIPES_SEARCH, query)
    }
}

/// Endpoint and body that place `recipe` into a plan slot.
fn meal_item_request(plan_id: i64, day: Day, meal_type: MealType, recipe: &RecipeRef) -> (&'static str, serde_json::Value) {
    match recipe {
        RecipeRef::Local(recipe_id) => (
            MEAL_ITEMS,
            serde_json::json!({
                "meal_plan_id": plan_id,
                "recipe_id": recipe_id,
                "day": day.as_str(),
                "meal_type": meal_type.as_str(),
            }),
        ),
        RecipeRef::External { provider, external_id } => (
            MEAL_ITEMS_EXTERNAL,
            serde_json::json!({
                "meal_plan_id": plan_id,
                "day": day.as_str(),
                "meal_type": meal_type.as_str(),
                "provider": provider,
                "external_id": external_id,
            }),
        ),
    }
}

/// Whether an expired session on `pathname` has to leave for the login view.
/// The signed-out routes (login, signup) stay where they are.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn needs_login_redirect(pathname: &str) -> bool {
    let path = pathname.trim_end_matches('/');
    path != LOGIN_PATH && path != SIGNUP_PATH
}

/// Clear the stored token and send the browser to the login view.
///
/// Returns the route navigated to. The redirect is skipped on the login and
/// signup routes.
pub fn expire_session() -> &'static str {
    token::clear();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let redirect = location.pathname().map_or(true, |path| needs_login_redirect(&path));
            if redirect {
                let _ = location.set_href(LOGIN_PATH);
            }
        }
    }
    LOGIN_PATH
}

/// Map a response status to the error the caller sees, if any.
///
/// A 401 under [`AuthPolicy::Session`] expires the session as a side effect.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn status_error(status: u16, policy: AuthPolicy, body: &str) -> Option<ApiError> {
    if (200..300).contains(&status) {
        return None;
    }
    if status == 401 && policy == AuthPolicy::Session {
        expire_session();
        return Some(ApiError::Unauthorized);
    }
    Some(ApiError::from_status(status, body))
}

#[cfg(feature = "hydrate")]
async fn send(
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<&serde_json::Value>,
    policy: AuthPolicy,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = crate::config::api_url(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    if let Some(bearer) = token::load() {
        builder = builder.header("Authorization", &token::bearer_header(&bearer));
    }
    if !query.is_empty() {
        builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| {
        leptos::logging::warn!("request to {path} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        if let Some(err) = status_error(resp.status(), policy, &text) {
            leptos::logging::warn!("{method:?} {path} -> {}", resp.status());
            return Err(err);
        }
    }
    Ok(resp)
}

async fn request_json<T: DeserializeOwned>(
    method: Method,
    path: &str,
    query: Query,
    body: Option<serde_json::Value>,
    policy: AuthPolicy,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(method, path, &query, body.as_ref(), policy).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, query, body, policy);
        Err(ApiError::Unavailable)
    }
}

/// Like [`request_json`] but discards the response body.
async fn request_empty(method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(method, path, &[], body.as_ref(), AuthPolicy::Session).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user the stored token belongs to via `auth/me`.
///
/// # Errors
///
/// Returns an error if there is no valid session or the request fails.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    request_json(Method::Get, AUTH_ME, Vec::new(), None, AuthPolicy::Session).await
}

/// Exchange email + password for a token via `auth/login`.
///
/// # Errors
///
/// Returns an error if the credentials are rejected or the request fails.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    request_json(Method::Post, AUTH_LOGIN, Vec::new(), Some(body), AuthPolicy::Credentials).await
}

/// Create an account via `auth/signup`.
///
/// # Errors
///
/// Returns an error if the server refuses the signup or the request fails.
pub async fn signup(email: &str, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = serde_json::json!({ "email": email, "username": username, "password": password });
    request_json(Method::Post, AUTH_SIGNUP, Vec::new(), Some(body), AuthPolicy::Credentials).await
}

/// List recipes, searching when `term` is non-blank.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_recipes(term: &str, page: u32, per_page: u32) -> Result<Page<RecipeSummary>, ApiError> {
    let (path, query) = recipe_list_request(term, page, per_page);
    request_json(Method::Get, path, query, None, AuthPolicy::Session).await
}

/// Fetch a local or provider recipe in full.
///
/// # Errors
///
/// Returns an error if the recipe is missing or the request fails.
pub async fn fetch_recipe(reference: &RecipeRef) -> Result<RecipeDetail, ApiError> {
    request_json(Method::Get, &recipe_path(reference), Vec::new(), None, AuthPolicy::Session).await
}

/// List the user's meal plans, newest week first.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_meal_plans(page: u32, per_page: u32) -> Result<Page<MealPlan>, ApiError> {
    request_json(Method::Get, MEAL_PLANS, page_query(page, per_page), None, AuthPolicy::Session).await
}

/// Create a plan for the week starting on `week_start` (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_meal_plan(week_start: &str) -> Result<MealPlan, ApiError> {
    let body = serde_json::json!({ "week_start": week_start });
    request_json(Method::Post, MEAL_PLANS, Vec::new(), Some(body), AuthPolicy::Session).await
}

/// Fetch one plan with its items.
///
/// # Errors
///
/// Returns an error if the plan is missing or the request fails.
pub async fn fetch_meal_plan(plan_id: i64) -> Result<MealPlan, ApiError> {
    request_json(Method::Get, &meal_plan_path(plan_id), Vec::new(), None, AuthPolicy::Session).await
}

/// Delete a plan together with its items.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_meal_plan(plan_id: i64) -> Result<(), ApiError> {
    request_empty(Method::Delete, &meal_plan_path(plan_id), None).await
}

/// Place `recipe` into the (`day`, `meal_type`) slot of a plan.
///
/// # Errors
///
/// Returns an error if the server rejects the item or the request fails.
pub async fn add_meal_item(plan_id: i64, day: Day, meal_type: MealType, recipe: &RecipeRef) -> Result<(), ApiError> {
    let (path, body) = meal_item_request(plan_id, day, meal_type, recipe);
    request_empty(Method::Post, path, Some(body)).await
}

/// Remove one item from its plan.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_meal_item(item_id: i64) -> Result<(), ApiError> {
    request_empty(Method::Delete, &meal_item_path(item_id), None).await
}

/// List the shopping items generated for a plan.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_shopping_items(plan_id: i64) -> Result<Page<ShoppingItem>, ApiError> {
    let query = vec![("meal_plan_id", plan_id.to_string()), ("per_page", SHOPPING_PAGE_SIZE.to_string())];
    request_json(Method::Get, SHOPPING_ITEMS, query, None, AuthPolicy::Session).await
}

/// Set the `checked` flag of a shopping item and return the stored row.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn set_shopping_item_checked(item_id: i64, checked: bool) -> Result<ShoppingItem, ApiError> {
    let body = serde_json::json!({ "checked": checked });
    request_json(Method::Patch, &shopping_item_path(item_id), Vec::new(), Some(body), AuthPolicy::Session).await
}

/// Ask the server to derive the shopping list from a plan's items.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn generate_shopping_list(plan_id: i64) -> Result<(), ApiError> {
    request_empty(Method::Post, &generate_shopping_path(plan_id), None).await
}

/// Recipes offered in the plan grid's per-cell dropdown.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_grid_recipes() -> Result<Vec<RecipeSummary>, ApiError> {
    Ok(list_recipes("", 1, GRID_RECIPE_PAGE_SIZE).await?.items)
}

/// Plans offered in plan pickers.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_picker_plans() -> Result<Vec<MealPlan>, ApiError> {
    Ok(list_meal_plans(1, PLAN_PICKER_PAGE_SIZE).await?.items)
}
