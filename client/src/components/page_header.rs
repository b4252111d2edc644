//! Page heading and dashboard card grid shared by section pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::route::{AppRoute, Section};

#[component]
pub fn PageHeader(title: &'static str, #[prop(optional)] subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <Show when=move || !subtitle.is_empty()>
                <p class="page-header__subtitle">{subtitle}</p>
            </Show>
        </header>
    }
}

/// One card per navigable page in `section`, excluding the dashboard itself.
#[component]
pub fn SectionCards(section: Section) -> impl IntoView {
    let cards = section
        .nav_routes()
        .into_iter()
        .filter(|route| route.href() != section.base_path())
        .map(|route: AppRoute| {
            view! {
                <li class="card-grid__item">
                    <A href=route.href() attr:class="card">
                        <span class="card__title">{route.title()}</span>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="card-grid">{cards}</ul> }
}
