//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render section chrome, the route guard and notification
//! surfaces while reading shared state from Leptos context providers.

pub mod layout;
pub mod page_header;
pub mod protected_route;
pub mod toaster;
