//! Plan / day / meal-type selector for "add to plan".

use leptos::prelude::*;

use crate::net::types::{Day, MealPlan, MealType};
use crate::state::meal_plan::SlotSelection;

#[component]
pub fn SlotPicker(#[prop(into)] plans: Signal<Vec<MealPlan>>, selection: RwSignal<SlotSelection>) -> impl IntoView {
    let plan_value = move || selection.get().plan_id.map(|id| id.to_string()).unwrap_or_default();

    view! {
        <div class="slot-picker">
            <label class="slot-picker__field">
                "Plan"
                <select
                    prop:value=plan_value
                    on:change=move |ev| {
                        let plan_id = event_target_value(&ev).parse::<i64>().ok();
                        selection.update(|s| s.plan_id = plan_id);
                    }
                >
                    <option value="">"Choose a plan"</option>
                    {move || {
                        plans
                            .get()
                            .into_iter()
                            .map(|plan| {
                                let value = plan.id.to_string();
                                let label = plan.label();
                                view! { <option value=value>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
            <label class="slot-picker__field">
                "Day"
                <select
                    prop:value=move || selection.get().day.as_str()
                    on:change=move |ev| {
                        if let Some(day) = Day::parse(&event_target_value(&ev)) {
                            selection.update(|s| s.day = day);
                        }
                    }
                >
                    {Day::ALL
                        .into_iter()
                        .map(|day| view! { <option value=day.as_str()>{day.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="slot-picker__field">
                "Meal"
                <select
                    prop:value=move || selection.get().meal_type.as_str()
                    on:change=move |ev| {
                        if let Some(meal_type) = MealType::parse(&event_target_value(&ev)) {
                            selection.update(|s| s.meal_type = meal_type);
                        }
                    }
                >
                    {MealType::ALL
                        .into_iter()
                        .map(|meal| view! { <option value=meal.as_str()>{meal.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
