//! Section layout shells: shared chrome around the routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each top-level route tree in `app.rs` renders one of these as its parent
//! view; the matched child page renders through `<Outlet/>`. Navigation
//! links are derived from `route::Section::nav_routes` so chrome and the
//! route table cannot drift apart.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::{A, Outlet};

use crate::components::protected_route::ProtectedRoute;
use crate::route::{AppRoute, LOGIN_PATH, PublicPage, Section, home_path_for};
use crate::state::session::SessionState;
use crate::state::theme::ThemeState;
use crate::util::auth::sign_out;
use crate::util::notify::use_notifier;
use crate::util::theme;

/// Chrome for the unguarded public pages.
#[component]
pub fn PublicLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let account_link = move || {
        let state = session.get();
        if state.is_authenticated() {
            let href = home_path_for(state.role());
            view! { <A href=href attr:class="site-header__cta">"My dashboard"</A> }.into_any()
        } else {
            view! {
                <A href=LOGIN_PATH attr:class="site-header__link">"Sign in"</A>
                <A href=AppRoute::Public(PublicPage::Register).href() attr:class="site-header__cta">"Register"</A>
            }
            .into_any()
        }
    };

    view! {
        <div class="layout layout--public">
            <header class="site-header">
                <A href="/" attr:class="site-header__brand">"Grievance Portal"</A>
                <NavLinks section=Section::Public/>
                <div class="site-header__actions">
                    <ThemeToggle/>
                    {account_link}
                </div>
            </header>
            <main class="layout__main">
                <Outlet/>
            </main>
            <footer class="site-footer">
                <p>"Student grievance redressal cell"</p>
            </footer>
        </div>
    }
}

/// `/admin` tree: guard plus administrator chrome.
#[component]
pub fn AdminSection() -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=Section::Admin.allowed_roles()>
            <SectionLayout section=Section::Admin/>
        </ProtectedRoute>
    }
}

/// `/user` tree: guard plus student chrome.
#[component]
pub fn UserSection() -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=Section::User.allowed_roles()>
            <SectionLayout section=Section::User/>
        </ProtectedRoute>
    }
}

/// Sidebar layout shared by the guarded sections.
#[component]
fn SectionLayout(section: Section) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();

    let identity = move || {
        session.with(|s| {
            let name = s.display_name().unwrap_or("Signed in").to_owned();
            let role = s.role().map_or("", |r| r.label());
            (name, role)
        })
    };
    let on_sign_out = move |_| sign_out(session, notifier);
    let (modifier, heading) = match section {
        Section::Admin => ("layout--admin", "Admin Console"),
        Section::User => ("layout--user", "Student Portal"),
        Section::Public => ("layout--public", "Grievance Portal"),
    };

    view! {
        <div class=format!("layout {modifier}")>
            <aside class="sidebar">
                <A href=section.base_path() attr:class="sidebar__brand">{heading}</A>
                <NavLinks section=section/>
            </aside>
            <div class="layout__content">
                <header class="topbar">
                    <div class="topbar__identity">
                        <span class="topbar__name">{move || identity().0}</span>
                        <span class="topbar__role">{move || identity().1}</span>
                    </div>
                    <div class="topbar__actions">
                        <ThemeToggle/>
                        <button class="button button--ghost" on:click=on_sign_out>"Sign out"</button>
                    </div>
                </header>
                <main class="layout__main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Navigation list for a section.
#[component]
fn NavLinks(section: Section) -> impl IntoView {
    let items = section
        .nav_routes()
        .into_iter()
        .map(|route| {
            let href = route.href();
            // Dashboards are prefixes of every page in their section.
            let exact = href == section.base_path();
            view! {
                <li class="nav__item">
                    <A href=href exact=exact attr:class="nav__link">{route.title()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <ul class="nav__list">{items}</ul>
        </nav>
    }
}

/// Light/dark switch backed by `RwSignal<ThemeState>`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<ThemeState>>();

    let on_toggle = move |_| {
        let next = theme::toggle(state.get_untracked().theme);
        state.update(|s| s.theme = next);
    };
    let label = move || if state.get().is_dark() { "Light mode" } else { "Dark mode" };

    view! {
        <button class="button button--ghost theme-toggle" on:click=on_toggle aria-label=label>
            {label}
        </button>
    }
}
