//! Student self-registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::types::{RegisterRequest, Role};
use crate::route::LOGIN_PATH;
use crate::util::notify::use_notifier;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Validate the registration form. Only students self-register.
pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role: Role::Student,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notifier = use_notifier();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_register_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                notifier.warning(msg);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(()) => {
                        notifier.info("Account created. Sign in to continue.");
                        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => notifier.error("Registration failed", e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    let text_input = move |label: &'static str, kind: &'static str, field: RwSignal<String>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-form__input"
                    type=kind
                    prop:value=move || field.get()
                    on:input=move |ev| field.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="auth-page">
            <PageHeader title="Register" subtitle="Create a student account to submit and track grievances."/>
            <form class="auth-form" on:submit=on_submit>
                {text_input("Full name", "text", name)}
                {text_input("Email", "email", email)}
                {text_input("Password", "password", password)}
                {text_input("Confirm password", "password", confirm)}
                <button class="button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "Already registered? "
                <A href=LOGIN_PATH>"Sign in"</A>
            </p>
        </section>
    }
}
