//! "Add to plan" flow shared by the catalog and the recipe detail view.

use leptos::prelude::*;

use crate::net::types::RecipeRef;
use crate::state::meal_plan::SlotSelection;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::toast::push_toast;

/// The selected plan id, or `None` after posting an error toast.
pub fn checked_plan(toasts: RwSignal<ToastState>, slot: &SlotSelection) -> Option<i64> {
    match slot.require_plan() {
        Ok(plan_id) => Some(plan_id),
        Err(prompt) => {
            push_toast(toasts, prompt, ToastKind::Error);
            None
        }
    }
}

/// Post the meal item and report the outcome as a toast. Returns whether
/// the item was created.
pub async fn add_to_slot(
    toasts: RwSignal<ToastState>,
    plan_id: i64,
    slot: SlotSelection,
    recipe: RecipeRef,
    title: String,
) -> bool {
    match crate::net::api::add_meal_item(plan_id, slot.day, slot.meal_type, &recipe).await {
        Ok(()) => {
            push_toast(toasts, slot.confirmation(plan_id, &title), ToastKind::Success);
            true
        }
        Err(e) => {
            leptos::logging::warn!("add to plan failed: {e}");
            let message = crate::net::error::failure_message("Failed to add to plan.", &e);
            push_toast(toasts, message, ToastKind::Error);
            false
        }
    }
}
