//! Calendar page: plan list, create-plan form, and the active plan's grid.

use leptos::prelude::*;

use crate::components::plan_grid::PlanGrid;
use crate::components::require_auth::RequireAuth;
use crate::state::meal_plan::PlansState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::toast::push_toast;

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Calendar/>
        </RequireAuth>
    }
}

#[component]
fn Calendar() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let plans = RwSignal::new(PlansState { loading: true, ..PlansState::default() });
    let week_start = RwSignal::new(String::new());
    let creating = RwSignal::new(false);

    load_plans(plans);

    let active = Memo::new(move |_| plans.with(|p| p.active));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let date = week_start.get().trim().to_owned();
        if date.is_empty() {
            push_toast(toasts, "Pick a week start date.", ToastKind::Error);
            return;
        }
        creating.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_meal_plan(&date).await {
                Ok(plan) => {
                    plans.update(|p| p.prepend_created(plan));
                    week_start.set(String::new());
                    push_toast(toasts, "Meal plan created.", ToastKind::Success);
                }
                Err(e) => {
                    let message = crate::net::error::failure_message("Failed to create plan.", &e);
                    push_toast(toasts, message, ToastKind::Error);
                }
            }
            creating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = date;
    };

    let on_deleted = Callback::new(move |plan_id: i64| plans.update(|p| p.remove(plan_id)));

    view! {
        <div class="calendar-page">
            <aside class="calendar-page__plans">
                <h2>"Meal Plans"</h2>
                <form class="calendar-page__create" on:submit=on_create>
                    <input
                        type="date"
                        required=true
                        prop:value=move || week_start.get()
                        on:input=move |ev| week_start.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || creating.get()>
                        "Create Plan"
                    </button>
                </form>
                <Show when=move || plans.with(|p| p.loading)>
                    <p class="page-loading">"Loading plans…"</p>
                </Show>
                <Show when=move || plans.with(|p| p.error.is_some())>
                    <p class="calendar-page__error">{move || plans.with(|p| p.error.clone()).unwrap_or_default()}</p>
                </Show>
                <ul class="calendar-page__list">
                    {move || {
                        plans
                            .get()
                            .plans
                            .into_iter()
                            .map(|plan| {
                                let id = plan.id;
                                view! {
                                    <li>
                                        <button
                                            class="btn calendar-page__plan"
                                            class:calendar-page__plan--active=move || active.get() == Some(id)
                                            on:click=move |_| plans.update(|p| p.active = Some(id))
                                        >
                                            {plan.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </aside>
            <main class="calendar-page__grid">
                {move || match active.get() {
                    Some(plan_id) => view! { <PlanGrid plan_id=plan_id on_deleted=on_deleted/> }.into_any(),
                    None => view! { <p>"Create a plan to get started."</p> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn load_plans(plans: RwSignal<PlansState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_picker_plans().await {
            Ok(list) => plans.update(|p| p.apply_list(list)),
            Err(e) => {
                leptos::logging::warn!("meal plan list load failed: {e}");
                let message = crate::net::error::failure_message("Failed to load plans.", &e);
                plans.update(|p| {
                    p.error = Some(message);
                    p.loading = false;
                });
            }
        }
    });
}
