use super::*;

fn plan(id: i64, week: &str) -> MealPlan {
    serde_json::from_value(serde_json::json!({ "id": id, "week_start": week })).unwrap()
}

// =============================================================
// PlansState
// =============================================================

#[test]
fn apply_list_selects_first_plan() {
    let mut state = PlansState { loading: true, ..PlansState::default() };
    state.apply_list(vec![plan(5, "2024-06-03"), plan(4, "2024-05-27")]);
    assert_eq!(state.active, Some(5));
    assert!(!state.loading);
}

#[test]
fn apply_list_keeps_existing_selection() {
    let mut state = PlansState { active: Some(4), ..PlansState::default() };
    state.apply_list(vec![plan(5, "2024-06-03"), plan(4, "2024-05-27")]);
    assert_eq!(state.active, Some(4));
}

#[test]
fn apply_list_with_no_plans_has_no_selection() {
    let mut state = PlansState::default();
    state.apply_list(Vec::new());
    assert_eq!(state.active, None);
}

#[test]
fn prepend_created_activates_new_plan() {
    let mut state = PlansState::default();
    state.apply_list(vec![plan(1, "2024-01-01")]);
    state.prepend_created(plan(2, "2024-01-08"));
    assert_eq!(state.active, Some(2));
    assert_eq!(state.plans[0].id, 2);
    assert_eq!(state.plans.len(), 2);
}

#[test]
fn remove_active_plan_moves_selection() {
    let mut state = PlansState::default();
    state.apply_list(vec![plan(1, "2024-01-08"), plan(2, "2024-01-01")]);
    state.remove(1);
    assert_eq!(state.active, Some(2));
    state.remove(2);
    assert_eq!(state.active, None);
}

// =============================================================
// Grid cells
// =============================================================

#[test]
fn created_item_appears_in_its_cell_after_reload() {
    // Plan body as returned by `GET meal_plans/:id` after a `POST meal_items`.
    let reloaded: MealPlan = serde_json::from_value(serde_json::json!({
        "id": 3,
        "user_id": 1,
        "week_Start": "2024-06-03",
        "items": [
            { "id": 10, "meal_plan_id": 3, "recipe_id": 7, "day": "Tue", "meal_type": "lunch",
              "recipe": { "id": 7, "title": "Lentil soup" } },
            { "id": 11, "meal_plan_id": 3, "recipe_id": 8, "day": "Tue", "meal_type": "dinner",
              "recipe": { "id": 8, "title": "Tacos" } }
        ],
        "shopping_items": []
    }))
    .unwrap();
    let grid = PlanGridState { plan: Some(reloaded), ..PlanGridState::default() };

    let lunch = grid.items_in(Day::Tue, MealType::Lunch);
    assert_eq!(lunch.len(), 1);
    assert_eq!(lunch[0].display_title(), "Lentil soup");

    assert_eq!(grid.items_in(Day::Tue, MealType::Dinner)[0].id, 11);
    assert!(grid.items_in(Day::Wed, MealType::Lunch).is_empty());
    assert!(grid.items_in(Day::Tue, MealType::Breakfast).is_empty());
}

#[test]
fn grid_without_plan_has_empty_cells() {
    let grid = PlanGridState::default();
    for day in Day::ALL {
        for meal in MealType::ALL {
            assert!(grid.items_in(day, meal).is_empty());
        }
    }
}

#[test]
fn cell_items_preserve_server_order() {
    let items: Vec<MealItem> = serde_json::from_value(serde_json::json!([
        { "id": 2, "day": "Mon", "meal_type": "snack" },
        { "id": 1, "day": "Mon", "meal_type": "snack" }
    ]))
    .unwrap();
    let ids: Vec<_> = cell_items(&items, Day::Mon, MealType::Snack).iter().map(|i| i.id).collect();
    assert_eq!(ids, [2, 1]);
}

// =============================================================
// SlotSelection
// =============================================================

#[test]
fn slot_defaults_to_monday_dinner() {
    let slot = SlotSelection::default();
    assert_eq!(slot.day, Day::Mon);
    assert_eq!(slot.meal_type, MealType::Dinner);
    assert_eq!(slot.require_plan(), Err("Choose a meal plan first."));
}

#[test]
fn confirmation_names_plan_and_slot() {
    let slot = SlotSelection { plan_id: Some(4), day: Day::Thu, meal_type: MealType::Breakfast };
    assert_eq!(slot.require_plan(), Ok(4));
    assert_eq!(slot.confirmation(4, "Pancakes"), "Added \"Pancakes\" to plan 4 (Thu breakfast)");
}
