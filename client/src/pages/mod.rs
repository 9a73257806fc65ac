//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every page except login and signup sits behind
//! `RequireAuth`.

pub mod calendar;
pub mod login;
pub mod plans;
pub mod recipe_detail;
pub mod recipes;
pub mod shopping;
pub mod signup;
