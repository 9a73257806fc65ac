//! Recipe detail for local (`/recipe/local/:id`) and provider-backed
//! (`/recipe/external/:provider/:external_id`) recipes.

#[cfg(test)]
#[path = "recipe_detail_test.rs"]
mod recipe_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::require_auth::RequireAuth;
use crate::components::slot_picker::SlotPicker;
use crate::net::types::{MealPlan, RecipeDetail, RecipeRef};
use crate::state::meal_plan::SlotSelection;
use crate::state::recipes::{ingredient_lines, instruction_paragraphs, recipe_title};
use crate::state::toast::ToastState;
use crate::util::planning;

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <RecipeDetailView/>
        </RequireAuth>
    }
}

#[component]
fn RecipeDetailView() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let reference = Memo::new(move |_| {
        params.with(|p| reference_from_params(p.get("id"), p.get("provider"), p.get("external_id")))
    });

    let detail = RwSignal::new(None::<RecipeDetail>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let adding = RwSignal::new(false);
    let plans = RwSignal::new(Vec::<MealPlan>::new());
    let slot = RwSignal::new(SlotSelection::default());

    Effect::new(move || {
        let Some(target) = reference.get() else {
            loading.set(false);
            error.set(Some("Unknown recipe.".to_owned()));
            return;
        };
        load_detail(target, detail, error, loading);
    });
    super::recipes::load_plans(plans, slot);

    let on_add = move |_| {
        let selection = slot.get_untracked();
        let Some(plan_id) = planning::checked_plan(toasts, &selection) else {
            return;
        };
        let Some(target) = reference.get_untracked() else {
            return;
        };
        let title = detail.with_untracked(|d| d.as_ref().map(recipe_title)).unwrap_or_default();
        adding.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            planning::add_to_slot(toasts, plan_id, selection, target, title).await;
            adding.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (plan_id, target, title);
    };

    let plan_href = move || slot.get().plan_id.map(|id| format!("/plans/{id}"));

    view! {
        <div class="recipe-detail">
            <Show when=move || loading.get()>
                <p class="page-loading">"Loading recipe…"</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="recipe-detail__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || detail.get().map(|d| view! { <RecipeBody detail=d/> })}
            <section class="recipe-detail__plan">
                <h3>"Add to a meal plan"</h3>
                <SlotPicker plans=plans selection=slot/>
                <button class="btn" disabled=move || adding.get() on:click=on_add>
                    {move || if adding.get() { "Adding…" } else { "Add to Meal Plan" }}
                </button>
                {move || plan_href().map(|href| view! { <a class="recipe-detail__plan-link" href=href>"Open plan"</a> })}
            </section>
        </div>
    }
}

#[component]
fn RecipeBody(detail: RecipeDetail) -> impl IntoView {
    let title = recipe_title(&detail);
    let ingredients = ingredient_lines(&detail);
    let paragraphs = instruction_paragraphs(&detail);
    let image = detail.image.filter(|src| !src.trim().is_empty());
    let source = detail.source_url.filter(|url| !url.trim().is_empty());
    let alt = title.clone();

    view! {
        <article class="recipe-detail__body">
            <h1>{title}</h1>
            {image.map(|src| view! { <img class="recipe-detail__image" src=src alt=alt/> })}
            {source
                .map(|href| {
                    view! {
                        <a class="recipe-detail__source" href=href target="_blank" rel="noopener noreferrer">
                            "Source"
                        </a>
                    }
                })}
            <h2>"Ingredients"</h2>
            {if ingredients.is_empty() {
                view! { <p class="recipe-detail__empty">"No ingredients."</p> }.into_any()
            } else {
                view! { <ul>{ingredients.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}</ul> }
                    .into_any()
            }}
            <h2>"Instructions"</h2>
            {if paragraphs.is_empty() {
                view! { <p class="recipe-detail__empty">"No instructions provided."</p> }.into_any()
            } else {
                paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view().into_any()
            }}
        </article>
    }
}

/// Route params to a recipe reference. Provider routes win when both
/// shapes are present.
pub(crate) fn reference_from_params(
    id: Option<String>,
    provider: Option<String>,
    external_id: Option<String>,
) -> Option<RecipeRef> {
    match (provider, external_id) {
        (Some(provider), Some(external_id)) if !provider.is_empty() && !external_id.is_empty() => {
            Some(RecipeRef::External { provider, external_id })
        }
        _ => id.and_then(|raw| raw.parse::<i64>().ok()).map(RecipeRef::Local),
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn load_detail(
    target: RecipeRef,
    detail: RwSignal<Option<RecipeDetail>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
) {
    loading.set(true);
    error.set(None);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_recipe(&target).await {
            Ok(body) => detail.set(Some(body)),
            Err(e) => {
                leptos::logging::warn!("recipe {} load failed: {e}", target.key());
                detail.set(None);
                error.set(Some(crate::net::error::failure_message("Failed to load recipe.", &e)));
            }
        }
        loading.set(false);
    });
}
