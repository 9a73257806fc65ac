use super::*;

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("http://api.test", "recipes"), "http://api.test/recipes");
}

#[test]
fn join_url_collapses_duplicate_slashes() {
    assert_eq!(join_url("http://api.test/", "/auth/me"), "http://api.test/auth/me");
    assert_eq!(join_url("http://api.test///", "meal_plans/4"), "http://api.test/meal_plans/4");
}

#[test]
fn api_url_uses_configured_base() {
    let url = api_url("recipes/search");
    assert!(url.starts_with(api_base().trim_end_matches('/')));
    assert!(url.ends_with("/recipes/search"));
}
