//! Shopping list for one meal plan, with per-item check-off and regeneration.

use leptos::prelude::*;

use crate::components::require_auth::RequireAuth;
use crate::net::types::ShoppingItem;
use crate::state::shopping::ShoppingState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::toast::push_toast;

#[component]
pub fn ShoppingPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ShoppingList/>
        </RequireAuth>
    }
}

#[component]
fn ShoppingList() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let shopping = RwSignal::new(ShoppingState::default());

    load_plans(shopping);

    let on_plan_change = move |ev: leptos::ev::Event| {
        let plan_id = event_target_value(&ev).parse::<i64>().ok();
        shopping.update(|s| {
            s.active_plan_id = plan_id;
            s.items.clear();
        });
        if let Some(plan_id) = plan_id {
            load_items(shopping, plan_id);
        }
    };

    let on_generate = move |_| {
        let Some(plan_id) = shopping.with_untracked(|s| s.can_generate().then_some(s.active_plan_id).flatten()) else {
            return;
        };
        shopping.update(|s| s.generating = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_shopping_list(plan_id).await {
                Ok(()) => push_toast(toasts, "Shopping list generated.", ToastKind::Success),
                Err(e) => {
                    let message = crate::net::error::failure_message("Failed to generate shopping list.", &e);
                    push_toast(toasts, message, ToastKind::Error);
                }
            }
            shopping.update(|s| s.generating = false);
            load_items(shopping, plan_id);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (plan_id, toasts);
    };

    view! {
        <div class="shopping-page">
            <div class="shopping-page__controls">
                <select
                    prop:value=move || shopping.with(|s| s.active_plan_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=on_plan_change
                >
                    {move || {
                        shopping
                            .get()
                            .plans
                            .into_iter()
                            .map(|plan| {
                                let value = plan.id.to_string();
                                view! { <option value=value>{plan.label()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <button class="btn" disabled=move || !shopping.with(ShoppingState::can_generate) on:click=on_generate>
                    {move || if shopping.with(|s| s.generating) { "Generating…" } else { "Generate Shopping List" }}
                </button>
            </div>
            <Show when=move || shopping.with(|s| s.loading_plans || s.loading_items)>
                <p class="page-loading">"Loading…"</p>
            </Show>
            <Show when=move || shopping.with(|s| !s.loading_plans && !s.loading_items && s.items.is_empty())>
                <p class="shopping-page__empty">"No shopping items yet."</p>
            </Show>
            <ul class="shopping-page__items">
                {move || {
                    shopping
                        .get()
                        .items
                        .into_iter()
                        .map(|item| view! { <ShoppingRow item=item shopping=shopping toasts=toasts/> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn ShoppingRow(item: ShoppingItem, shopping: RwSignal<ShoppingState>, toasts: RwSignal<ToastState>) -> impl IntoView {
    let item_id = item.id;
    let label = item.label();
    let checked = move || shopping.with(|s| s.is_checked(item_id));

    view! {
        <li class="shopping-page__item" class:shopping-page__item--checked=checked>
            <label>
                <input
                    type="checkbox"
                    prop:checked=checked
                    on:change=move |ev| toggle_item(shopping, toasts, item.clone(), event_target_checked(&ev))
                />
                <span>{label}</span>
            </label>
        </li>
    }
}

/// PATCH the new `checked` value. On failure the stored row is re-emitted
/// so the checkbox snaps back to the unchanged state.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn toggle_item(shopping: RwSignal<ShoppingState>, toasts: RwSignal<ToastState>, original: ShoppingItem, checked: bool) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::set_shopping_item_checked(original.id, checked).await {
            Ok(updated) => {
                shopping.update(|s| {
                    s.apply_update(updated);
                });
            }
            Err(e) => {
                leptos::logging::warn!("shopping item {} update failed: {e}", original.id);
                shopping.update(|s| {
                    s.apply_update(original);
                });
                let message = crate::net::error::failure_message("Failed to update item.", &e);
                push_toast(toasts, message, ToastKind::Error);
            }
        }
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn load_plans(shopping: RwSignal<ShoppingState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_picker_plans().await {
            Ok(plans) => {
                shopping.update(|s| s.apply_plans(plans));
                if let Some(plan_id) = shopping.with_untracked(|s| s.active_plan_id) {
                    load_items(shopping, plan_id);
                }
            }
            Err(e) => {
                leptos::logging::warn!("shopping plan list load failed: {e}");
                shopping.update(|s| s.apply_plans(Vec::new()));
            }
        }
    });
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn load_items(shopping: RwSignal<ShoppingState>, plan_id: i64) {
    shopping.update(|s| s.loading_items = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_shopping_items(plan_id).await {
            Ok(page) => shopping.update(|s| {
                if s.active_plan_id == Some(plan_id) {
                    s.apply_items(page.items);
                }
            }),
            Err(e) => {
                leptos::logging::warn!("shopping items for plan {plan_id} failed: {e}");
                shopping.update(|s| s.apply_items(Vec::new()));
            }
        }
    });
}
