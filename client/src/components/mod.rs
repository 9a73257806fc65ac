//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, toasts, guard) and the building
//! blocks of the catalog and plan pages, reading/writing shared state from
//! Leptos context providers.

pub mod nav_header;
pub mod pager;
pub mod plan_grid;
pub mod recipe_card;
pub mod require_auth;
pub mod slot_picker;
pub mod toast_stack;
