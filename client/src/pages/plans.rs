//! `/plans` (open or create the current plan) and `/plans/:id` (one plan's grid).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::plan_grid::PlanGrid;
use crate::components::require_auth::RequireAuth;

#[component]
pub fn PlansIndexPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <PlansIndex/>
        </RequireAuth>
    }
}

/// Opens the newest plan, creating one for this week when none exist.
#[component]
fn PlansIndex() -> impl IntoView {
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match open_or_create_plan().await {
            Ok(plan_id) => navigate(
                &format!("/plans/{plan_id}"),
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            ),
            Err(message) => error.set(Some(message)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = navigate;

    view! {
        <div class="plans-page">
            <Show when=move || error.get().is_some() fallback=|| view! { <p class="page-loading">"Opening plan…"</p> }>
                <p class="plans-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn open_or_create_plan() -> Result<i64, String> {
    use crate::net::api;
    use crate::net::error::failure_message;

    let plans = api::list_picker_plans()
        .await
        .map_err(|e| failure_message("Failed to load plans.", &e))?;
    if let Some(plan) = plans.first() {
        return Ok(plan.id);
    }
    let week_start = crate::util::date::current_week_start().ok_or_else(|| "Could not read today's date.".to_owned())?;
    let created = api::create_meal_plan(&week_start)
        .await
        .map_err(|e| failure_message("Failed to create plan.", &e))?;
    Ok(created.id)
}

#[component]
pub fn PlanPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <PlanView/>
        </RequireAuth>
    }
}

#[component]
fn PlanView() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let plan_id = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|raw| raw.parse::<i64>().ok()));

    let deleted = RwSignal::new(false);
    let on_deleted = Callback::new(move |_: i64| deleted.set(true));

    Effect::new(move || {
        if deleted.get() {
            navigate("/calendar", NavigateOptions::default());
        }
    });

    view! {
        <div class="plan-page">
            {move || match plan_id.get() {
                Some(id) => view! { <PlanGrid plan_id=id on_deleted=on_deleted/> }.into_any(),
                None => view! { <p class="plan-page__error">"Unknown meal plan."</p> }.into_any(),
            }}
        </div>
    }
}
