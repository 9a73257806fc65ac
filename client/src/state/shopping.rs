//! Shopping-list view state.

#[cfg(test)]
#[path = "shopping_test.rs"]
mod shopping_test;

use crate::net::types::{MealPlan, ShoppingItem};

#[derive(Clone, Debug)]
pub struct ShoppingState {
    pub plans: Vec<MealPlan>,
    pub active_plan_id: Option<i64>,
    pub items: Vec<ShoppingItem>,
    pub loading_plans: bool,
    pub loading_items: bool,
    pub generating: bool,
}

impl Default for ShoppingState {
    fn default() -> Self {
        Self {
            plans: Vec::new(),
            active_plan_id: None,
            items: Vec::new(),
            loading_plans: true,
            loading_items: false,
            generating: false,
        }
    }
}

impl ShoppingState {
    /// Store the plan list and select the first plan.
    pub fn apply_plans(&mut self, plans: Vec<MealPlan>) {
        self.active_plan_id = plans.first().map(|p| p.id);
        self.plans = plans;
        self.loading_plans = false;
    }

    pub fn apply_items(&mut self, items: Vec<ShoppingItem>) {
        self.items = items;
        self.loading_items = false;
    }

    /// Replace the row with the server's copy after an update.
    /// Returns `false` if the row is no longer listed.
    pub fn apply_update(&mut self, updated: ShoppingItem) -> bool {
        match self.items.iter_mut().find(|i| i.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Stored `checked` flag of a listed row; unlisted rows read as unchecked.
    pub fn is_checked(&self, item_id: i64) -> bool {
        self.items.iter().any(|i| i.id == item_id && i.checked)
    }

    pub fn can_generate(&self) -> bool {
        self.active_plan_id.is_some() && !self.generating && !self.loading_plans
    }
}
