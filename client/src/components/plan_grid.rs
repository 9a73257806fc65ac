//! Weekly day × meal-type grid for one meal plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its own `PlanGridState`. Every mutation (add item, remove item)
//! re-fetches the whole plan afterwards; cells are never patched locally.
//! The plan-level actions (generate shopping list, delete plan) live in the
//! grid header because they act on the plan being shown.

#[cfg(test)]
#[path = "plan_grid_test.rs"]
mod plan_grid_test;

use leptos::prelude::*;

use crate::net::types::{Day, MealType, RecipeRef, RecipeSummary};
use crate::state::meal_plan::PlanGridState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::toast::push_toast;

#[component]
pub fn PlanGrid(plan_id: i64, on_deleted: Callback<i64>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let grid = RwSignal::new(PlanGridState { loading: true, ..PlanGridState::default() });

    reload_plan(grid, plan_id);
    load_recipes(grid);

    let heading = move || {
        grid.with(|g| g.plan.as_ref().map(crate::net::types::MealPlan::label))
            .unwrap_or_else(|| format!("Plan {plan_id}"))
    };

    view! {
        <section class="plan-grid">
            <div class="plan-grid__header">
                <h2>{heading}</h2>
                <button
                    class="btn"
                    disabled=move || grid.with(|g| g.busy)
                    on:click=move |_| generate_shopping(grid, toasts, plan_id)
                >
                    "Generate Shopping List"
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || grid.with(|g| g.busy)
                    on:click=move |_| delete_plan(grid, toasts, plan_id, on_deleted)
                >
                    "Delete Plan"
                </button>
            </div>
            <Show when=move || grid.with(|g| g.error.is_some())>
                <p class="plan-grid__error">{move || grid.with(|g| g.error.clone()).unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !grid.with(|g| g.loading)
                fallback=|| view! { <p class="page-loading">"Loading plan…"</p> }
            >
                <table class="plan-grid__table">
                    <thead>
                        <tr>
                            <th></th>
                            {Day::ALL.into_iter().map(|day| view! { <th>{day.as_str()}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {MealType::ALL
                            .into_iter()
                            .map(|meal_type| {
                                view! {
                                    <tr>
                                        <th class="plan-grid__meal">{meal_type.as_str()}</th>
                                        {Day::ALL
                                            .into_iter()
                                            .map(|day| {
                                                view! {
                                                    <PlanCell
                                                        grid=grid
                                                        toasts=toasts
                                                        plan_id=plan_id
                                                        day=day
                                                        meal_type=meal_type
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn PlanCell(
    grid: RwSignal<PlanGridState>,
    toasts: RwSignal<ToastState>,
    plan_id: i64,
    day: Day,
    meal_type: MealType,
) -> impl IntoView {
    let on_pick = move |ev: leptos::ev::Event| {
        let key = event_target_value(&ev);
        if key.is_empty() {
            return;
        }
        let picked = grid.with_untracked(|g| find_recipe(&g.recipes, &key));
        if let Some(recipe) = picked {
            add_item(grid, toasts, plan_id, day, meal_type, recipe);
        }
    };

    view! {
        <td class="plan-grid__cell">
            <ul class="plan-grid__items">
                {move || {
                    grid.with(|g| g.items_in(day, meal_type))
                        .into_iter()
                        .map(|item| {
                            let item_id = item.id;
                            view! {
                                <li class="plan-grid__item">
                                    <span>{item.display_title().to_owned()}</span>
                                    <button
                                        class="plan-grid__remove"
                                        title="Remove"
                                        aria-label="Remove"
                                        disabled=move || grid.with(|g| g.busy)
                                        on:click=move |_| remove_item(grid, toasts, plan_id, item_id)
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <select class="plan-grid__add" prop:value="" on:change=on_pick disabled=move || grid.with(|g| g.busy)>
                <option value="">"+ Add recipe"</option>
                {move || {
                    grid.with(|g| g.recipes.clone())
                        .into_iter()
                        .filter_map(|recipe| {
                            let key = grid_reference(&recipe)?.key();
                            let title = recipe.display_title().to_owned();
                            Some(view! { <option value=key>{title}</option> })
                        })
                        .collect_view()
                }}
            </select>
        </td>
    }
}

/// Grid options come from the user's own collection, so a row with a local
/// id is always placed by `recipe_id`, even when it was imported from a
/// provider.
fn grid_reference(recipe: &RecipeSummary) -> Option<RecipeRef> {
    recipe.id.map(RecipeRef::Local).or_else(|| recipe.reference())
}

fn find_recipe(recipes: &[RecipeSummary], key: &str) -> Option<RecipeRef> {
    recipes.iter().filter_map(grid_reference).find(|r| r.key() == key)
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn reload_plan(grid: RwSignal<PlanGridState>, plan_id: i64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_meal_plan(plan_id).await {
            Ok(plan) => grid.update(|g| {
                g.plan = Some(plan);
                g.error = None;
                g.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("meal plan {plan_id} load failed: {e}");
                let message = crate::net::error::failure_message("Failed to load plan.", &e);
                grid.update(|g| {
                    g.error = Some(message);
                    g.loading = false;
                });
            }
        }
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn load_recipes(grid: RwSignal<PlanGridState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_grid_recipes().await {
            Ok(recipes) => grid.update(|g| g.recipes = recipes),
            Err(e) => leptos::logging::warn!("grid recipe load failed: {e}"),
        }
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn add_item(
    grid: RwSignal<PlanGridState>,
    toasts: RwSignal<ToastState>,
    plan_id: i64,
    day: Day,
    meal_type: MealType,
    recipe: RecipeRef,
) {
    grid.update(|g| g.busy = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::add_meal_item(plan_id, day, meal_type, &recipe).await {
            leptos::logging::warn!("add meal item failed: {e}");
            let message = crate::net::error::failure_message("Failed to add to plan.", &e);
            push_toast(toasts, message, ToastKind::Error);
        }
        grid.update(|g| g.busy = false);
        reload_plan(grid, plan_id);
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn remove_item(grid: RwSignal<PlanGridState>, toasts: RwSignal<ToastState>, plan_id: i64, item_id: i64) {
    grid.update(|g| g.busy = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::delete_meal_item(item_id).await {
            leptos::logging::warn!("delete meal item {item_id} failed: {e}");
            let message = crate::net::error::failure_message("Failed to remove item.", &e);
            push_toast(toasts, message, ToastKind::Error);
        }
        grid.update(|g| g.busy = false);
        reload_plan(grid, plan_id);
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn generate_shopping(grid: RwSignal<PlanGridState>, toasts: RwSignal<ToastState>, plan_id: i64) {
    grid.update(|g| g.busy = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::generate_shopping_list(plan_id).await {
            Ok(()) => push_toast(toasts, "Shopping list generated.", ToastKind::Success),
            Err(e) => {
                let message = crate::net::error::failure_message("Failed to generate shopping list.", &e);
                push_toast(toasts, message, ToastKind::Error);
            }
        }
        grid.update(|g| g.busy = false);
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn delete_plan(grid: RwSignal<PlanGridState>, toasts: RwSignal<ToastState>, plan_id: i64, on_deleted: Callback<i64>) {
    grid.update(|g| g.busy = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_meal_plan(plan_id).await {
            Ok(()) => {
                push_toast(toasts, "Meal plan deleted.", ToastKind::Info);
                on_deleted.run(plan_id);
            }
            Err(e) => {
                let message = crate::net::error::failure_message("Failed to delete plan.", &e);
                push_toast(toasts, message, ToastKind::Error);
                grid.update(|g| g.busy = false);
            }
        }
    });
}
