//! Root application component with routing and context providers.
//!
//! The route declarations below mirror `route::AppRoute`; keep the two in
//! step when adding a page.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::{AdminSection, PublicLayout, UserSection};
use crate::components::toaster::Toaster;
use crate::pages::admin::{
    AdminActivityPage, AdminDashboardPage, AdminGrievanceDetailPage, AdminGrievancesPage, AdminGuidelinesPage,
    AdminInsightsPage, AdminListPage, AdminMailPage, AdminNoticesPage, AdminProfilePage, AdminReviewPage,
    AdminStatusPage,
};
use crate::pages::login::LoginPage;
use crate::pages::public::{AboutPage, ContactPage, FaqsPage, HomePage};
use crate::pages::register::RegisterPage;
use crate::pages::user::{
    UserDashboardPage, UserGrievanceDetailPage, UserGrievancesPage, UserGuidelinesPage, UserInsightsPage,
    UserListPage, UserMailPage, UserNoticesPage, UserProfilePage, UserReviewPage, UserStatusPage, UserSubmitPage,
};
use crate::route::HOME_PATH;
use crate::state::notifications::NotificationState;
use crate::state::session::SessionState;
use crate::state::theme::ThemeState;
use crate::util::auth::install_session_restore;
use crate::util::guard::replace_navigation;
use crate::util::theme;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Stylesheet URL emitted by the asset build, e.g. `/pkg/grievance-portal.css`.
pub fn stylesheet_href(options: &LeptosOptions) -> String {
    format!("/{}/{}.css", options.site_pkg_dir, options.output_name)
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = stylesheet_href(&options);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" id="leptos" href=stylesheet/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides theme, session and notification contexts, then routes the three
/// page trees. Unmatched paths redirect home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme_state = RwSignal::new(ThemeState { theme: theme::read_preference() });
    let session = RwSignal::new(SessionState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(theme_state);
    provide_context(session);
    provide_context(notifications);

    Effect::new(move || theme::apply(theme_state.get().theme));
    install_session_restore(session);

    view! {
        <Title text="Grievance Portal"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH options=replace_navigation()/> }>
                <ParentRoute path=StaticSegment("") view=PublicLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("faqs") view=FaqsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("admin") view=AdminSection>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("grievances") view=AdminGrievancesPage/>
                    <Route path=(StaticSegment("grievances"), ParamSegment("code")) view=AdminGrievanceDetailPage/>
                    <Route path=(StaticSegment("review"), ParamSegment("code")) view=AdminReviewPage/>
                    <Route path=StaticSegment("list") view=AdminListPage/>
                    <Route path=StaticSegment("status") view=AdminStatusPage/>
                    <Route path=StaticSegment("profile") view=AdminProfilePage/>
                    <Route path=StaticSegment("activity") view=AdminActivityPage/>
                    <Route path=StaticSegment("insights") view=AdminInsightsPage/>
                    <Route path=StaticSegment("mail") view=AdminMailPage/>
                    <Route path=StaticSegment("notices") view=AdminNoticesPage/>
                    <Route path=StaticSegment("guidelines") view=AdminGuidelinesPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("user") view=UserSection>
                    <Route path=StaticSegment("") view=UserDashboardPage/>
                    <Route path=StaticSegment("submit") view=UserSubmitPage/>
                    <Route path=StaticSegment("grievances") view=UserGrievancesPage/>
                    <Route path=StaticSegment("list") view=UserListPage/>
                    <Route path=(StaticSegment("grievance"), ParamSegment("code")) view=UserGrievanceDetailPage/>
                    <Route path=(StaticSegment("review"), ParamSegment("code")) view=UserReviewPage/>
                    <Route path=StaticSegment("status") view=UserStatusPage/>
                    <Route path=StaticSegment("profile") view=UserProfilePage/>
                    <Route path=StaticSegment("insights") view=UserInsightsPage/>
                    <Route path=StaticSegment("mail") view=UserMailPage/>
                    <Route path=StaticSegment("notices") view=UserNoticesPage/>
                    <Route path=StaticSegment("guidelines") view=UserGuidelinesPage/>
                </ParentRoute>
            </Routes>
            <Toaster/>
        </Router>
    }
}
