//! Role-gated wrapper for guarded route trees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a section layout in `app.rs`. The decision is memoized on the
//! session signal so the wrapped layout only re-mounts when the outcome
//! changes, not on every session write.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::guard::{GuardDecision, evaluate, replace_navigation};

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

/// Guard decision tracking `session`. Recomputes on every session write and
/// notifies subscribers only when the decision itself changes.
pub fn guard_memo(session: RwSignal<SessionState>, allowed_roles: &'static [Role]) -> Memo<GuardDecision> {
    Memo::new(move |_| session.with(|s| evaluate(s, allowed_roles)))
}

/// Render `children` only for a resolved session whose role is admitted.
///
/// `allowed_roles` empty (the default) admits any signed-in user.
#[component]
pub fn ProtectedRoute(#[prop(optional)] allowed_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let decision = guard_memo(expect_context::<RwSignal<SessionState>>(), allowed_roles);

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingIndicator/> }.into_any(),
        GuardDecision::Redirect(to) => view! { <Redirect path=to options=replace_navigation()/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Neutral full-screen spinner shown while the session is restoring.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}
