//! Meal-plan list, grid, and slot-picker state.
//!
//! DESIGN
//! ======
//! The grid never patches its items locally. After every add or delete the
//! whole plan is fetched again and replaces `PlanGridState::plan`, so the
//! rendered cells always mirror the server.

#[cfg(test)]
#[path = "meal_plan_test.rs"]
mod meal_plan_test;

use crate::net::types::{Day, MealItem, MealPlan, MealType, RecipeSummary};

/// Plans shown in the calendar sidebar and plan pickers.
#[derive(Clone, Debug, Default)]
pub struct PlansState {
    pub plans: Vec<MealPlan>,
    pub active: Option<i64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PlansState {
    /// Replace the list, selecting the first plan if nothing is active yet.
    pub fn apply_list(&mut self, plans: Vec<MealPlan>) {
        if self.active.is_none() {
            self.active = plans.first().map(|p| p.id);
        }
        self.plans = plans;
        self.loading = false;
    }

    /// Put a freshly created plan at the front and make it active.
    pub fn prepend_created(&mut self, plan: MealPlan) {
        self.active = Some(plan.id);
        self.plans.insert(0, plan);
    }

    /// Drop a deleted plan, moving the selection to the next remaining one.
    pub fn remove(&mut self, plan_id: i64) {
        self.plans.retain(|p| p.id != plan_id);
        if self.active == Some(plan_id) {
            self.active = self.plans.first().map(|p| p.id);
        }
    }
}

/// One plan's weekly grid plus the recipes offered in each cell.
#[derive(Clone, Debug, Default)]
pub struct PlanGridState {
    pub plan: Option<MealPlan>,
    pub recipes: Vec<RecipeSummary>,
    pub loading: bool,
    /// An add/delete/generate request is in flight.
    pub busy: bool,
    pub error: Option<String>,
}

impl PlanGridState {
    pub fn items_in(&self, day: Day, meal_type: MealType) -> Vec<MealItem> {
        self.plan
            .as_ref()
            .map(|p| cell_items(&p.items, day, meal_type))
            .unwrap_or_default()
    }
}

/// Items that belong in the (`day`, `meal_type`) cell, in server order.
pub fn cell_items(items: &[MealItem], day: Day, meal_type: MealType) -> Vec<MealItem> {
    items.iter().filter(|i| i.is_in_slot(day, meal_type)).cloned().collect()
}

/// Where "add to plan" puts a recipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotSelection {
    pub plan_id: Option<i64>,
    pub day: Day,
    pub meal_type: MealType,
}

impl SlotSelection {
    /// The chosen plan, or the message to show when none is chosen.
    ///
    /// # Errors
    ///
    /// Returns the user-facing prompt if no plan is selected.
    pub fn require_plan(&self) -> Result<i64, &'static str> {
        self.plan_id.ok_or("Choose a meal plan first.")
    }

    /// Success text after `title` was placed in this slot.
    pub fn confirmation(&self, plan_id: i64, title: &str) -> String {
        format!("Added \"{title}\" to plan {plan_id} ({} {})", self.day, self.meal_type)
    }
}
