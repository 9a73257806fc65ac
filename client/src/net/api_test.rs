use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn recipe_path_covers_local_and_external() {
    assert_eq!(recipe_path(&RecipeRef::Local(12)), "recipes/12");
    let external = RecipeRef::External { provider: "spoonacular".to_owned(), external_id: "715538".to_owned() };
    assert_eq!(recipe_path(&external), "recipes/spoonacular/715538");
}

#[test]
fn plan_and_item_paths_are_resource_scoped() {
    assert_eq!(meal_plan_path(4), "meal_plans/4");
    assert_eq!(generate_shopping_path(4), "meal_plans/4/generate_shopping");
    assert_eq!(meal_item_path(31), "meal_items/31");
    assert_eq!(shopping_item_path(8), "shopping_items/8");
}

#[test]
fn recipe_list_without_term_browses() {
    let (path, query) = recipe_list_request("   ", 3, 10);
    assert_eq!(path, "recipes");
    assert_eq!(query, vec![("page", "3".to_owned()), ("per_page", "10".to_owned())]);
}

#[test]
fn recipe_list_with_term_searches_trimmed() {
    let (path, query) = recipe_list_request("  chicken ", 1, 10);
    assert_eq!(path, "recipes/search");
    assert!(query.contains(&("q", "chicken".to_owned())));
    assert!(query.contains(&("page", "1".to_owned())));
}

// =============================================================
// Meal item creation bodies
// =============================================================

#[test]
fn local_recipe_posts_to_meal_items() {
    let (path, body) = meal_item_request(2, Day::Tue, MealType::Lunch, &RecipeRef::Local(9));
    assert_eq!(path, "meal_items");
    assert_eq!(
        body,
        serde_json::json!({ "meal_plan_id": 2, "recipe_id": 9, "day": "Tue", "meal_type": "lunch" })
    );
}

#[test]
fn external_recipe_posts_to_external_endpoint() {
    let recipe = RecipeRef::External { provider: "spoonacular".to_owned(), external_id: "42".to_owned() };
    let (path, body) = meal_item_request(2, Day::Sun, MealType::Dinner, &recipe);
    assert_eq!(path, "meal_items/external");
    assert_eq!(body["provider"], "spoonacular");
    assert_eq!(body["external_id"], "42");
    assert_eq!(body["day"], "Sun");
    assert_eq!(body["meal_type"], "dinner");
    assert!(body.get("recipe_id").is_none());
}

// =============================================================
// Status handling
// =============================================================

#[test]
fn success_statuses_are_not_errors() {
    assert_eq!(status_error(200, AuthPolicy::Session, ""), None);
    assert_eq!(status_error(201, AuthPolicy::Session, ""), None);
    assert_eq!(status_error(204, AuthPolicy::Credentials, ""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unauthorized_session_call_clears_stored_token() {
    token::store("stale-token");
    let err = status_error(401, AuthPolicy::Session, r#"{"msg":"Token has expired"}"#);
    assert_eq!(err, Some(ApiError::Unauthorized));
    assert_eq!(token::load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn expire_session_targets_login_route() {
    token::store("stale-token");
    assert_eq!(expire_session(), "/login");
    assert_eq!(token::load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unauthorized_credentials_call_keeps_token() {
    token::store("still-valid");
    let err = status_error(401, AuthPolicy::Credentials, r#"{"error":"Invalid email or password."}"#);
    assert_eq!(
        err,
        Some(ApiError::Status { status: 401, message: Some("Invalid email or password.".to_owned()) })
    );
    assert_eq!(token::load().as_deref(), Some("still-valid"));
    token::clear();
}

#[test]
fn signed_out_routes_skip_login_redirect() {
    assert!(!needs_login_redirect("/login"));
    assert!(!needs_login_redirect("/signup"));
    assert!(!needs_login_redirect("/signup/"));
    assert!(needs_login_redirect("/"));
    assert!(needs_login_redirect("/plans/3"));
    assert!(needs_login_redirect("/shopping"));
}

#[test]
fn other_failures_carry_server_detail() {
    let err = status_error(404, AuthPolicy::Session, r#"{"message":"not found"}"#).unwrap();
    assert_eq!(err.detail(), Some("not found"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = futures::executor::block_on(fetch_current_user());
    assert_eq!(result, Err(ApiError::Unavailable));
}
