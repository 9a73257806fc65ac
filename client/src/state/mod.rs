//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`recipes`, `meal_plan`, `shopping`) plus the two
//! app-wide containers (`auth`, `toast`) provided through context, so each
//! page depends on a small focused model.

pub mod auth;
pub mod meal_plan;
pub mod recipes;
pub mod shopping;
pub mod toast;
