//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, route
//! guards) from page and component logic to improve reuse and testability.

pub mod auth;
pub mod profile_store;
