//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! clock, navigation) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod date;
pub mod planning;
pub mod session;
pub mod toast;
pub mod token;
