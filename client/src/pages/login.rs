//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only page that writes a signed-in session. Once the session holds a
//! user, the redirect effect below sends them to their role's dashboard, so
//! the submit handler never navigates itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::types::LoginRequest;
use crate::route::{AppRoute, PublicPage, home_path_for};
use crate::state::session::SessionState;
use crate::util::guard::replace_navigation;
use crate::util::notify::use_notifier;

/// Validate the sign-in form, trimming the email.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (restored session or fresh login): go to the dashboard.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate(home_path_for(state.role()), replace_navigation());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                notifier.warning(msg);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(user) => {
                    notifier.success(format!("Welcome back, {}", user.name));
                    session.set(SessionState::signed_in(user));
                }
                Err(e) => notifier.error("Sign-in failed", e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <section class="auth-page">
            <PageHeader title="Sign in" subtitle="Use your institutional email to continue."/>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@college.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "No account yet? "
                <A href=AppRoute::Public(PublicPage::Register).href()>"Register"</A>
            </p>
        </section>
    }
}
