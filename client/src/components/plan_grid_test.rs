use super::*;

fn summary(json: &str) -> RecipeSummary {
    serde_json::from_str(json).unwrap()
}

#[test]
fn find_recipe_matches_local_key() {
    let recipes = vec![summary(r#"{"id":1,"title":"Soup"}"#), summary(r#"{"id":2,"title":"Stew"}"#)];
    assert_eq!(find_recipe(&recipes, "local:2"), Some(RecipeRef::Local(2)));
}

#[test]
fn find_recipe_places_imported_recipe_by_local_id() {
    let recipes = vec![summary(r#"{"id":4,"provider":"spoonacular","external_id":99,"title":"Pho"}"#)];
    assert_eq!(find_recipe(&recipes, "local:4"), Some(RecipeRef::Local(4)));
    assert_eq!(find_recipe(&recipes, "ext:spoonacular:99"), None);
}

#[test]
fn grid_reference_falls_back_to_provider_without_local_id() {
    let row = summary(r#"{"provider":"spoonacular","external_id":"12","title":"Tacos"}"#);
    assert_eq!(
        grid_reference(&row),
        Some(RecipeRef::External { provider: "spoonacular".to_owned(), external_id: "12".to_owned() })
    );
}
