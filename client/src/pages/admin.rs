//! Administrator pages under `/admin`.
//!
//! Every page here renders inside `AdminSection`, so the role check has
//! already passed. Grievance data itself is loaded by backend-facing widgets
//! outside this shell.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_header::{PageHeader, SectionCards};
use crate::pages::status::StatusLookup;
use crate::pages::use_grievance_code;
use crate::route::{AdminPage, AppRoute, Section};
use crate::state::session::SessionState;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let greeting = move || {
        session.with(|s| format!("Welcome, {}", s.display_name().unwrap_or("administrator")))
    };

    view! {
        <section class="dashboard">
            <h1 class="page-header__title">{greeting}</h1>
            <SectionCards section=Section::Admin/>
        </section>
    }
}

#[component]
pub fn AdminGrievancesPage() -> impl IntoView {
    view! { <PageHeader title="All Grievances" subtitle="Every grievance submitted to the cell."/> }
}

#[component]
pub fn AdminGrievanceDetailPage() -> impl IntoView {
    let code = use_grievance_code();
    let review_href = move || AppRoute::Admin(AdminPage::Review { code: code.get() }).href();

    view! {
        <section class="grievance">
            <PageHeader title="Grievance Detail"/>
            <p class="grievance__code">"Grievance code: " <strong>{move || code.get()}</strong></p>
            <A href=review_href attr:class="button">"Review"</A>
        </section>
    }
}

#[component]
pub fn AdminReviewPage() -> impl IntoView {
    let code = use_grievance_code();
    let detail_href = move || AppRoute::Admin(AdminPage::GrievanceDetail { code: code.get() }).href();

    view! {
        <section class="grievance">
            <PageHeader title="Grievance Review" subtitle="Record a decision and notify the student."/>
            <p class="grievance__code">"Reviewing " <strong>{move || code.get()}</strong></p>
            <A href=detail_href attr:class="button button--ghost">"Back to detail"</A>
        </section>
    }
}

#[component]
pub fn AdminListPage() -> impl IntoView {
    view! { <PageHeader title="List Grievances" subtitle="Filter grievances by category and stage."/> }
}

#[component]
pub fn AdminStatusPage() -> impl IntoView {
    view! {
        <section>
            <PageHeader title="Check Status" subtitle="Open any grievance by its code."/>
            <StatusLookup section=Section::Admin/>
        </section>
    }
}

#[component]
pub fn AdminProfilePage() -> impl IntoView {
    view! { <PageHeader title="Edit Profile"/> }
}

#[component]
pub fn AdminActivityPage() -> impl IntoView {
    view! { <PageHeader title="Account Activity" subtitle="Recent sign-ins and review actions."/> }
}

#[component]
pub fn AdminInsightsPage() -> impl IntoView {
    view! { <PageHeader title="Insights" subtitle="Volume, resolution time and category trends."/> }
}

#[component]
pub fn AdminMailPage() -> impl IntoView {
    view! { <PageHeader title="Mail"/> }
}

#[component]
pub fn AdminNoticesPage() -> impl IntoView {
    view! { <PageHeader title="Notice Board" subtitle="Publish notices to all students."/> }
}

#[component]
pub fn AdminGuidelinesPage() -> impl IntoView {
    view! { <PageHeader title="Guidelines" subtitle="Handling and escalation guidelines for reviewers."/> }
}
