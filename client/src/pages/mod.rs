//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One module per route tree (`public`, `admin`, `user`) plus the auth forms.
//! Pages own route-scoped orchestration and delegate chrome to `components`.

pub mod admin;
pub mod login;
pub mod public;
pub mod register;
pub mod status;
pub mod user;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// The `:code` path parameter of detail and review routes, passed through
/// verbatim. Empty if the route carries none.
pub fn use_grievance_code() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("code")).unwrap_or_default())
}
