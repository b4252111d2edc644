use super::*;

fn admin(page: AdminPage) -> Option<AppRoute> {
    Some(AppRoute::Admin(page))
}

fn user(page: UserPage) -> Option<AppRoute> {
    Some(AppRoute::User(page))
}

// =============================================================
// Public tree
// =============================================================

#[test]
fn parse_public_pages() {
    let cases = [
        ("/", PublicPage::Home),
        ("/about", PublicPage::About),
        ("/contact", PublicPage::Contact),
        ("/faqs", PublicPage::Faqs),
        ("/login", PublicPage::Login),
        ("/register", PublicPage::Register),
    ];
    for (path, page) in cases {
        assert_eq!(AppRoute::parse(path), Some(AppRoute::Public(page)), "{path}");
    }
}

#[test]
fn parse_empty_path_is_home() {
    assert_eq!(AppRoute::parse(""), Some(AppRoute::Public(PublicPage::Home)));
}

#[test]
fn parse_unknown_paths_are_unmatched() {
    for path in ["/nonexistent", "/about/team", "/admins", "/users", "/grievances/ABC123"] {
        assert_eq!(AppRoute::parse(path), None, "{path}");
    }
}

#[test]
fn parse_static_segments_are_case_sensitive() {
    assert_eq!(AppRoute::parse("/About"), None);
    assert_eq!(AppRoute::parse("/ADMIN"), None);
}

// =============================================================
// Admin tree
// =============================================================

#[test]
fn parse_admin_static_pages() {
    assert_eq!(AppRoute::parse("/admin"), admin(AdminPage::Dashboard));
    assert_eq!(AppRoute::parse("/admin/grievances"), admin(AdminPage::Grievances));
    assert_eq!(AppRoute::parse("/admin/list"), admin(AdminPage::List));
    assert_eq!(AppRoute::parse("/admin/status"), admin(AdminPage::Status));
    assert_eq!(AppRoute::parse("/admin/profile"), admin(AdminPage::Profile));
    assert_eq!(AppRoute::parse("/admin/activity"), admin(AdminPage::Activity));
    assert_eq!(AppRoute::parse("/admin/insights"), admin(AdminPage::Insights));
    assert_eq!(AppRoute::parse("/admin/mail"), admin(AdminPage::Mail));
    assert_eq!(AppRoute::parse("/admin/notices"), admin(AdminPage::Notices));
    assert_eq!(AppRoute::parse("/admin/guidelines"), admin(AdminPage::Guidelines));
}

#[test]
fn parse_admin_detail_passes_code_through() {
    let route = AppRoute::parse("/admin/grievances/ABC123");
    assert_eq!(route, admin(AdminPage::GrievanceDetail { code: "ABC123".to_owned() }));
    assert_eq!(route.as_ref().and_then(AppRoute::code), Some("ABC123"));
}

#[test]
fn parse_admin_review_passes_code_through() {
    assert_eq!(
        AppRoute::parse("/admin/review/gr-42"),
        admin(AdminPage::Review { code: "gr-42".to_owned() })
    );
}

#[test]
fn parse_admin_unknown_child_is_unmatched() {
    assert_eq!(AppRoute::parse("/admin/nope"), None);
    assert_eq!(AppRoute::parse("/admin/submit"), None);
    assert_eq!(AppRoute::parse("/admin/grievance/ABC123"), None);
    assert_eq!(AppRoute::parse("/admin/grievances/ABC123/extra"), None);
    assert_eq!(AppRoute::parse("/admin/review"), None);
}

// =============================================================
// User tree
// =============================================================

#[test]
fn parse_user_static_pages() {
    assert_eq!(AppRoute::parse("/user"), user(UserPage::Dashboard));
    assert_eq!(AppRoute::parse("/user/submit"), user(UserPage::Submit));
    assert_eq!(AppRoute::parse("/user/grievances"), user(UserPage::Grievances));
    assert_eq!(AppRoute::parse("/user/list"), user(UserPage::List));
    assert_eq!(AppRoute::parse("/user/status"), user(UserPage::Status));
    assert_eq!(AppRoute::parse("/user/profile"), user(UserPage::Profile));
    assert_eq!(AppRoute::parse("/user/insights"), user(UserPage::Insights));
    assert_eq!(AppRoute::parse("/user/mail"), user(UserPage::Mail));
    assert_eq!(AppRoute::parse("/user/notices"), user(UserPage::Notices));
    assert_eq!(AppRoute::parse("/user/guidelines"), user(UserPage::Guidelines));
}

#[test]
fn parse_user_detail_uses_singular_segment() {
    assert_eq!(
        AppRoute::parse("/user/grievance/XYZ9"),
        user(UserPage::GrievanceDetail { code: "XYZ9".to_owned() })
    );
    assert_eq!(AppRoute::parse("/user/grievances/XYZ9"), None);
    assert_eq!(AppRoute::parse("/user/activity"), None);
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn parse_ignores_query_fragment_and_extra_slashes() {
    assert_eq!(AppRoute::parse("/admin/mail?page=2"), admin(AdminPage::Mail));
    assert_eq!(AppRoute::parse("/faqs#fees"), Some(AppRoute::Public(PublicPage::Faqs)));
    assert_eq!(AppRoute::parse("/user//status/"), user(UserPage::Status));
    assert_eq!(
        AppRoute::parse("/admin/review/ABC?tab=notes"),
        admin(AdminPage::Review { code: "ABC".to_owned() })
    );
}

// =============================================================
// href / section
// =============================================================

#[test]
fn href_round_trips_through_parse() {
    let mut routes: Vec<AppRoute> = Vec::new();
    for section in [Section::Public, Section::Admin, Section::User] {
        routes.extend(section.nav_routes());
    }
    routes.push(AppRoute::Public(PublicPage::Login));
    routes.push(AppRoute::Public(PublicPage::Register));
    routes.push(AppRoute::Admin(AdminPage::GrievanceDetail { code: "A1".to_owned() }));
    routes.push(AppRoute::Admin(AdminPage::Review { code: "A2".to_owned() }));
    routes.push(AppRoute::User(UserPage::GrievanceDetail { code: "U1".to_owned() }));
    routes.push(AppRoute::User(UserPage::Review { code: "U2".to_owned() }));

    for route in routes {
        assert_eq!(AppRoute::parse(&route.href()), Some(route.clone()), "{}", route.href());
    }
}

#[test]
fn every_route_lives_under_its_section_base() {
    for section in [Section::Admin, Section::User] {
        for route in section.nav_routes() {
            assert_eq!(route.section(), section);
            assert!(route.href().starts_with(section.base_path()), "{}", route.href());
        }
    }
}

#[test]
fn section_guard_policies() {
    assert!(Section::Public.allowed_roles().is_empty());
    assert!(!Section::Public.is_guarded());
    assert_eq!(Section::Admin.allowed_roles(), &[Role::Admin]);
    assert_eq!(Section::User.allowed_roles(), &[Role::Student]);
    assert!(Section::Admin.is_guarded());
    assert!(Section::User.is_guarded());
}

#[test]
fn home_path_for_role() {
    assert_eq!(home_path_for(Some(Role::Admin)), "/admin");
    assert_eq!(home_path_for(Some(Role::Student)), "/user");
    assert_eq!(home_path_for(None), HOME_PATH);
}

#[test]
fn nav_starts_with_dashboard_and_has_no_parameterized_pages() {
    for section in [Section::Admin, Section::User] {
        let nav = section.nav_routes();
        assert_eq!(nav[0].title(), "Dashboard");
        assert!(nav.iter().all(|r| r.code().is_none()));
    }
}
