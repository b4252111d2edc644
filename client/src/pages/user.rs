//! Student pages under `/user`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_header::{PageHeader, SectionCards};
use crate::pages::status::StatusLookup;
use crate::pages::use_grievance_code;
use crate::route::{AppRoute, Section, UserPage};
use crate::state::session::SessionState;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || session.with(|s| format!("Hello, {}", s.display_name().unwrap_or("student")));

    view! {
        <section class="dashboard">
            <h1 class="page-header__title">{greeting}</h1>
            <A href=AppRoute::User(UserPage::Submit).href() attr:class="button">"Submit a grievance"</A>
            <SectionCards section=Section::User/>
        </section>
    }
}

#[component]
pub fn UserSubmitPage() -> impl IntoView {
    view! { <PageHeader title="Submit Grievance" subtitle="Describe the issue and choose a category."/> }
}

#[component]
pub fn UserGrievancesPage() -> impl IntoView {
    view! { <PageHeader title="My Grievances" subtitle="Everything you have submitted."/> }
}

#[component]
pub fn UserListPage() -> impl IntoView {
    view! { <PageHeader title="List Grievances"/> }
}

#[component]
pub fn UserGrievanceDetailPage() -> impl IntoView {
    let code = use_grievance_code();
    let review_href = move || AppRoute::User(UserPage::Review { code: code.get() }).href();

    view! {
        <section class="grievance">
            <PageHeader title="Grievance Detail"/>
            <p class="grievance__code">"Grievance code: " <strong>{move || code.get()}</strong></p>
            <A href=review_href attr:class="button button--ghost">"Rate the resolution"</A>
        </section>
    }
}

#[component]
pub fn UserReviewPage() -> impl IntoView {
    let code = use_grievance_code();

    view! {
        <section class="grievance">
            <PageHeader title="Review" subtitle="Tell us how your grievance was handled."/>
            <p class="grievance__code">"Reviewing " <strong>{move || code.get()}</strong></p>
        </section>
    }
}

#[component]
pub fn UserStatusPage() -> impl IntoView {
    view! {
        <section>
            <PageHeader title="Check Status" subtitle="Enter the code you received on submission."/>
            <StatusLookup section=Section::User/>
        </section>
    }
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    view! { <PageHeader title="Edit Profile"/> }
}

#[component]
pub fn UserInsightsPage() -> impl IntoView {
    view! { <PageHeader title="Insights" subtitle="How grievances like yours are resolved."/> }
}

#[component]
pub fn UserMailPage() -> impl IntoView {
    view! { <PageHeader title="Mail"/> }
}

#[component]
pub fn UserNoticesPage() -> impl IntoView {
    view! { <PageHeader title="Notice Board"/> }
}

#[component]
pub fn UserGuidelinesPage() -> impl IntoView {
    view! { <PageHeader title="Guidelines" subtitle="What makes a grievance actionable."/> }
}
