//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` evaluates `evaluate` reactively against the session
//! signal; `resolve_navigation` composes the same decision with the typed
//! route table so a bare path can be checked end to end. Neither caches:
//! every session change produces a fresh decision.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::route::{AppRoute, HOME_PATH, LOGIN_PATH};
use crate::state::session::SessionState;

/// What a guarded subtree should show for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still pending.
    Loading,
    /// Leave the page, replacing the current history entry.
    Redirect(&'static str),
    /// Show the wrapped content.
    Render,
}

/// Decide access for `session`. First match wins:
/// loading, then unauthenticated, then role mismatch.
///
/// An empty `allowed_roles` admits any authenticated user. A user with no
/// recognized role fails every non-empty role check.
pub fn evaluate(session: &SessionState, allowed_roles: &[Role]) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if !allowed_roles.is_empty() && !session.role().is_some_and(|role| allowed_roles.contains(&role)) {
        return GuardDecision::Redirect(HOME_PATH);
    }
    GuardDecision::Render
}

/// Outcome of navigating to a path with a given session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Loading,
    Redirect(&'static str),
    Render(AppRoute),
}

/// Resolve `path` against the route table, then apply the section guard.
/// Unmatched paths redirect home regardless of session state.
pub fn resolve_navigation(path: &str, session: &SessionState) -> Resolution {
    let Some(route) = AppRoute::parse(path) else {
        return Resolution::Redirect(HOME_PATH);
    };
    let section = route.section();
    if !section.is_guarded() {
        return Resolution::Render(route);
    }
    match evaluate(session, section.allowed_roles()) {
        GuardDecision::Loading => Resolution::Loading,
        GuardDecision::Redirect(to) => Resolution::Redirect(to),
        GuardDecision::Render => Resolution::Render(route),
    }
}

/// Navigation options for every guard and catch-all redirect: replace the
/// history entry so the back button cannot re-enter the redirect.
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
