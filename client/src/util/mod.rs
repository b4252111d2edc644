//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and access decisions
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod guard;
pub mod notify;
pub mod theme;
