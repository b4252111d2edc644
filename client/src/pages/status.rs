//! Grievance lookup by code, shared by the admin and student status pages.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::route::{AdminPage, AppRoute, Section, UserPage};
use crate::util::notify::use_notifier;

/// Normalize a typed grievance code: trimmed, upper-cased, and restricted to
/// characters that form a single path segment.
pub(crate) fn normalize_grievance_code(raw: &str) -> Option<String> {
    let code = raw.trim().to_ascii_uppercase();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return None;
    }
    Some(code)
}

/// Detail route for `code` within a guarded section.
pub(crate) fn detail_route(section: Section, code: String) -> Option<AppRoute> {
    match section {
        Section::Admin => Some(AppRoute::Admin(AdminPage::GrievanceDetail { code })),
        Section::User => Some(AppRoute::User(UserPage::GrievanceDetail { code })),
        Section::Public => None,
    }
}

#[component]
pub fn StatusLookup(section: Section) -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let target = normalize_grievance_code(&input.get_untracked()).and_then(|code| detail_route(section, code));
        match target {
            Some(route) => navigate(&route.href(), leptos_router::NavigateOptions::default()),
            None => notifier.warning("Enter a grievance code like GRV-2024-001."),
        }
    };

    view! {
        <form class="lookup-form" on:submit=on_submit>
            <input
                class="lookup-form__input"
                type="text"
                placeholder="Grievance code"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="button" type="submit">"Check status"</button>
        </form>
    }
}
