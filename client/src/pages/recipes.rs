//! Recipe catalog: search, paginated cards, and add-to-plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. A blank search term lists the
//! user's recipes; any other term queries the provider search endpoint.
//! The slot picker above the results decides where "Add to Meal Plan" puts a
//! recipe.

use leptos::prelude::*;

use crate::components::pager::Pager;
use crate::components::recipe_card::RecipeCard;
use crate::components::require_auth::RequireAuth;
use crate::components::slot_picker::SlotPicker;
use crate::net::types::{MealPlan, RecipeSummary};
use crate::state::meal_plan::SlotSelection;
use crate::state::recipes::{CATALOG_PAGE_SIZE, CatalogState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::planning;
use crate::util::toast::push_toast;

#[component]
pub fn RecipesPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <RecipeCatalog/>
        </RequireAuth>
    }
}

#[component]
fn RecipeCatalog() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let catalog = RwSignal::new(CatalogState::default());
    let draft = RwSignal::new(String::new());
    let plans = RwSignal::new(Vec::<MealPlan>::new());
    let slot = RwSignal::new(SlotSelection::default());

    load_page(catalog, 1);
    load_plans(plans, slot);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = draft.get().trim().to_owned();
        catalog.update(|c| c.term = term);
        load_page(catalog, 1);
    };

    let on_page = Callback::new(move |page: u32| load_page(catalog, page));

    let on_add = Callback::new(move |recipe: RecipeSummary| {
        let selection = slot.get_untracked();
        let Some(plan_id) = planning::checked_plan(toasts, &selection) else {
            return;
        };
        let Some(reference) = recipe.reference() else {
            push_toast(toasts, "This recipe has no id to add.", ToastKind::Error);
            return;
        };
        let key = reference.key();
        catalog.update(|c| c.adding = Some(key.clone()));
        let title = recipe.display_title().to_owned();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            planning::add_to_slot(toasts, plan_id, selection, reference, title).await;
            catalog.update(|c| {
                if c.is_adding(&key) {
                    c.adding = None;
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (plan_id, title);
    });

    view! {
        <div class="catalog-page">
            <form class="catalog-search" on:submit=on_search>
                <input
                    class="catalog-search__input"
                    type="search"
                    placeholder="Search recipes"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || catalog.with(|c| c.loading)>
                    {move || if catalog.with(|c| c.loading) { "Searching…" } else { "Search" }}
                </button>
            </form>
            <SlotPicker plans=plans selection=slot/>
            <div class="catalog-results">
                {move || {
                    catalog
                        .get()
                        .results
                        .into_iter()
                        .map(|recipe| {
                            let key = recipe.reference().map(|r| r.key()).unwrap_or_default();
                            let adding = Signal::derive(move || !key.is_empty() && catalog.with(|c| c.is_adding(&key)));
                            view! { <RecipeCard recipe=recipe adding=adding on_add=on_add/> }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || catalog.with(|c| !c.loading && c.results.is_empty())>
                <p class="catalog-empty">"No recipes found."</p>
            </Show>
            <Pager
                pagination=Signal::derive(move || catalog.with(|c| c.pagination))
                loading=Signal::derive(move || catalog.with(|c| c.loading))
                on_page=on_page
            />
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn load_page(catalog: RwSignal<CatalogState>, page: u32) {
    let term = catalog.with_untracked(|c| c.term.clone());
    catalog.update(|c| {
        c.loading = true;
        c.pagination.page = page;
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_recipes(&term, page, CATALOG_PAGE_SIZE).await {
            Ok(body) => catalog.update(|c| c.apply_page(page, body)),
            Err(e) => {
                leptos::logging::warn!("recipe page {page} load failed: {e}");
                catalog.update(CatalogState::apply_failure);
            }
        }
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub(crate) fn load_plans(plans: RwSignal<Vec<MealPlan>>, slot: RwSignal<SlotSelection>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_picker_plans().await {
            Ok(list) => {
                let first = list.first().map(|p| p.id);
                slot.update(|s| {
                    if s.plan_id.is_none() {
                        s.plan_id = first;
                    }
                });
                plans.set(list);
            }
            Err(e) => leptos::logging::warn!("meal plan list load failed: {e}"),
        }
    });
}
