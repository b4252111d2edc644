//! Unguarded informational pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_header::PageHeader;
use crate::route::{AppRoute, LOGIN_PATH, PublicPage};

const FAQS: [(&str, &str); 4] = [
    (
        "Who can submit a grievance?",
        "Any registered student can submit a grievance from the student portal after signing in.",
    ),
    (
        "How do I track my grievance?",
        "Every submission receives a grievance code. Use it on the status page to see its current stage.",
    ),
    (
        "Who reviews grievances?",
        "Grievances are reviewed by the grievance redressal cell administrators.",
    ),
    (
        "Can I add details after submitting?",
        "Yes. Reply from the grievance detail page or the mail section while the grievance is open.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Raise it. Track it. Resolve it."</h1>
            <p class="hero__lead">
                "A single place for students to submit grievances and for the redressal cell to review them."
            </p>
            <div class="hero__actions">
                <A href=AppRoute::Public(PublicPage::Register).href() attr:class="button">"Get started"</A>
                <A href=LOGIN_PATH attr:class="button button--ghost">"Sign in"</A>
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <PageHeader title="About" subtitle="How the grievance redressal process works."/>
            <ol class="steps">
                <li>"Submit a grievance with a category and description."</li>
                <li>"An administrator reviews it and may request more information."</li>
                <li>"You are notified as the grievance moves to resolution."</li>
            </ol>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="content-page">
            <PageHeader title="Contact" subtitle="Reach the grievance redressal cell."/>
            <dl class="contact-list">
                <dt>"Email"</dt>
                <dd>"grievance-cell@college.edu"</dd>
                <dt>"Office hours"</dt>
                <dd>"Monday to Friday, 10:00 to 17:00"</dd>
            </dl>
        </section>
    }
}

#[component]
pub fn FaqsPage() -> impl IntoView {
    let items = FAQS
        .into_iter()
        .map(|(question, answer)| {
            view! {
                <details class="faq">
                    <summary class="faq__question">{question}</summary>
                    <p class="faq__answer">{answer}</p>
                </details>
            }
        })
        .collect_view();

    view! {
        <section class="content-page">
            <PageHeader title="FAQs"/>
            {items}
        </section>
    }
}
