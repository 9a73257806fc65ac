use super::*;
use crate::net::types::{IngredientLine, InstructionBlock, InstructionStep};

// =============================================================
// Pagination
// =============================================================

#[test]
fn pages_is_at_least_one() {
    let p = Pagination { page: 1, per_page: 10, total: 0 };
    assert_eq!(p.pages(), 1);
    assert_eq!(p.label(), "Page 1 / 1");
}

#[test]
fn pages_rounds_up_partial_page() {
    let p = Pagination { page: 1, per_page: 10, total: 21 };
    assert_eq!(p.pages(), 3);
}

#[test]
fn prev_disabled_on_first_page() {
    let p = Pagination { page: 1, per_page: 10, total: 50 };
    assert!(!p.can_prev(false));
    assert!(p.can_next(false));
}

#[test]
fn next_disabled_on_last_page() {
    let p = Pagination { page: 5, per_page: 10, total: 50 };
    assert!(p.can_prev(false));
    assert!(!p.can_next(false));
}

#[test]
fn both_disabled_on_single_page_and_while_loading() {
    let single = Pagination { page: 1, per_page: 10, total: 4 };
    assert!(!single.can_prev(false));
    assert!(!single.can_next(false));

    let middle = Pagination { page: 2, per_page: 10, total: 50 };
    assert!(!middle.can_prev(true));
    assert!(!middle.can_next(true));
}

#[test]
fn zero_page_size_does_not_divide_by_zero() {
    let p = Pagination { page: 1, per_page: 0, total: 3 };
    assert_eq!(p.pages(), 3);
}

// =============================================================
// CatalogState
// =============================================================

#[test]
fn apply_page_uses_server_page_or_requested() {
    let mut state = CatalogState { loading: true, ..CatalogState::default() };
    let page: Page<RecipeSummary> =
        serde_json::from_str(r#"{"total":25,"items":[{"id":1,"title":"Soup"}]}"#).unwrap();
    state.apply_page(3, page);
    assert!(!state.loading);
    assert_eq!(state.pagination.page, 3);
    assert_eq!(state.pagination.total, 25);
    assert_eq!(state.results.len(), 1);
}

#[test]
fn apply_failure_clears_results() {
    let mut state = CatalogState {
        results: vec![RecipeSummary::default()],
        pagination: Pagination { page: 2, per_page: 10, total: 30 },
        loading: true,
        ..CatalogState::default()
    };
    state.apply_failure();
    assert!(state.results.is_empty());
    assert_eq!(state.pagination.total, 0);
    assert!(!state.loading);
}

#[test]
fn is_adding_matches_in_flight_key() {
    let state = CatalogState { adding: Some("local:3".to_owned()), ..CatalogState::default() };
    assert!(state.is_adding("local:3"));
    assert!(!state.is_adding("local:4"));
}

// =============================================================
// Detail rendering
// =============================================================

#[test]
fn recipe_title_falls_back_through_external_title() {
    let detail = RecipeDetail { external_title: Some("Ramen".to_owned()), ..RecipeDetail::default() };
    assert_eq!(recipe_title(&detail), "Ramen");
    assert_eq!(recipe_title(&RecipeDetail::default()), "Recipe");
}

#[test]
fn structured_ingredients_join_quantity_and_name() {
    let detail = RecipeDetail {
        ingredients: Some(Ingredients::Lines(vec![
            IngredientLine { name: Some("flour".to_owned()), quantity: Some("2 cups".to_owned()) },
            IngredientLine { name: Some("salt".to_owned()), quantity: None },
            IngredientLine { name: None, quantity: Some("1 egg".to_owned()) },
            IngredientLine { name: Some(" ".to_owned()), quantity: Some(String::new()) },
        ])),
        ..RecipeDetail::default()
    };
    assert_eq!(ingredient_lines(&detail), ["2 cups · flour", "salt", "1 egg"]);
}

#[test]
fn text_ingredients_split_on_newlines() {
    let detail = RecipeDetail {
        ingredients: Some(Ingredients::Text("bread\r\n\n  butter  \n".to_owned())),
        ..RecipeDetail::default()
    };
    assert_eq!(ingredient_lines(&detail), ["bread", "butter"]);
}

#[test]
fn missing_ingredients_yield_no_lines() {
    assert!(ingredient_lines(&RecipeDetail::default()).is_empty());
}

#[test]
fn steps_text_splits_on_blank_lines() {
    let detail = RecipeDetail {
        steps: Some(Steps::Text("Boil water.\n  \nAdd pasta.\nStir.".to_owned())),
        ..RecipeDetail::default()
    };
    assert_eq!(instruction_paragraphs(&detail), ["Boil water.", "Add pasta.\nStir."]);
}

#[test]
fn step_list_gives_one_paragraph_per_step() {
    let detail = RecipeDetail {
        steps: Some(Steps::List(vec!["Chop.".to_owned(), "Fry.".to_owned()])),
        ..RecipeDetail::default()
    };
    assert_eq!(instruction_paragraphs(&detail), ["Chop.", "Fry."]);
}

#[test]
fn instructions_used_when_steps_blank() {
    let detail = RecipeDetail {
        steps: Some(Steps::Text("   ".to_owned())),
        instructions: Some("Mix everything.".to_owned()),
        ..RecipeDetail::default()
    };
    assert_eq!(instruction_paragraphs(&detail), ["Mix everything."]);
}

#[test]
fn analyzed_instructions_are_flattened_last() {
    let detail = RecipeDetail {
        analyzed_instructions: vec![InstructionBlock {
            steps: vec![
                InstructionStep { step: Some("Preheat oven.".to_owned()) },
                InstructionStep { step: None },
                InstructionStep { step: Some("Bake 20 min.".to_owned()) },
            ],
        }],
        ..RecipeDetail::default()
    };
    assert_eq!(instruction_paragraphs(&detail), ["Preheat oven.", "Bake 20 min."]);
}

#[test]
fn no_instruction_source_yields_nothing() {
    assert!(instruction_paragraphs(&RecipeDetail::default()).is_empty());
}
