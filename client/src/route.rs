//! Typed route table for the three page trees.
//!
//! DESIGN
//! ======
//! `app.rs` declares the same tree for `leptos_router`; this module is the
//! typed twin used to build links and to resolve a path into a
//! `(section, page, params)` triple without a reactive runtime. Matching is
//! ordered first-match over whole paths. A path that does not fully match any
//! route returns `None` and is redirected home by the caller.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::net::types::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Top-level route tree. Each tree has one layout and one guard policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Public,
    Admin,
    User,
}

impl Section {
    /// Roles admitted by the section guard. Empty means unguarded.
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Public => &[],
            Self::Admin => &[Role::Admin],
            Self::User => &[Role::Student],
        }
    }

    pub fn is_guarded(self) -> bool {
        !matches!(self, Self::Public)
    }

    pub fn base_path(self) -> &'static str {
        match self {
            Self::Public => HOME_PATH,
            Self::Admin => "/admin",
            Self::User => "/user",
        }
    }

    /// Section whose guard admits `role`.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Student => Self::User,
        }
    }

    /// Routes shown in the section's navigation, in display order.
    pub fn nav_routes(self) -> Vec<AppRoute> {
        match self {
            Self::Public => PublicPage::NAV.into_iter().map(AppRoute::Public).collect(),
            Self::Admin => AdminPage::NAV.into_iter().map(AppRoute::Admin).collect(),
            Self::User => UserPage::NAV.into_iter().map(AppRoute::User).collect(),
        }
    }
}

/// Landing path after sign-in. Users without a recognized role land on home.
pub fn home_path_for(role: Option<Role>) -> &'static str {
    role.map_or(HOME_PATH, |r| Section::for_role(r).base_path())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicPage {
    Home,
    About,
    Contact,
    Faqs,
    Login,
    Register,
}

impl PublicPage {
    pub const NAV: [Self; 4] = [Self::Home, Self::About, Self::Contact, Self::Faqs];

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            [] => Some(Self::Home),
            ["about"] => Some(Self::About),
            ["contact"] => Some(Self::Contact),
            ["faqs"] => Some(Self::Faqs),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            _ => None,
        }
    }

    fn href(self) -> String {
        match self {
            Self::Home => HOME_PATH.to_owned(),
            Self::About => "/about".to_owned(),
            Self::Contact => "/contact".to_owned(),
            Self::Faqs => "/faqs".to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => "/register".to_owned(),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Faqs => "FAQs",
            Self::Login => "Sign in",
            Self::Register => "Register",
        }
    }
}

/// Pages under `/admin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Grievances,
    GrievanceDetail { code: String },
    Review { code: String },
    List,
    Status,
    Profile,
    Activity,
    Insights,
    Mail,
    Notices,
    Guidelines,
}

impl AdminPage {
    pub const NAV: [Self; 10] = [
        Self::Dashboard,
        Self::Grievances,
        Self::List,
        Self::Status,
        Self::Insights,
        Self::Mail,
        Self::Notices,
        Self::Guidelines,
        Self::Activity,
        Self::Profile,
    ];

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            [] => Some(Self::Dashboard),
            ["grievances"] => Some(Self::Grievances),
            ["grievances", code] => Some(Self::GrievanceDetail { code: (*code).to_owned() }),
            ["review", code] => Some(Self::Review { code: (*code).to_owned() }),
            ["list"] => Some(Self::List),
            ["status"] => Some(Self::Status),
            ["profile"] => Some(Self::Profile),
            ["activity"] => Some(Self::Activity),
            ["insights"] => Some(Self::Insights),
            ["mail"] => Some(Self::Mail),
            ["notices"] => Some(Self::Notices),
            ["guidelines"] => Some(Self::Guidelines),
            _ => None,
        }
    }

    fn href(&self) -> String {
        let base = Section::Admin.base_path();
        match self {
            Self::Dashboard => base.to_owned(),
            Self::Grievances => format!("{base}/grievances"),
            Self::GrievanceDetail { code } => format!("{base}/grievances/{code}"),
            Self::Review { code } => format!("{base}/review/{code}"),
            Self::List => format!("{base}/list"),
            Self::Status => format!("{base}/status"),
            Self::Profile => format!("{base}/profile"),
            Self::Activity => format!("{base}/activity"),
            Self::Insights => format!("{base}/insights"),
            Self::Mail => format!("{base}/mail"),
            Self::Notices => format!("{base}/notices"),
            Self::Guidelines => format!("{base}/guidelines"),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Grievances => "All Grievances",
            Self::GrievanceDetail { .. } => "Grievance Detail",
            Self::Review { .. } => "Grievance Review",
            Self::List => "List Grievances",
            Self::Status => "Check Status",
            Self::Profile => "Edit Profile",
            Self::Activity => "Account Activity",
            Self::Insights => "Insights",
            Self::Mail => "Mail",
            Self::Notices => "Notice Board",
            Self::Guidelines => "Guidelines",
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            Self::GrievanceDetail { code } | Self::Review { code } => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Pages under `/user`. The detail route uses the singular `grievance`
/// segment, unlike the admin tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserPage {
    Dashboard,
    Submit,
    Grievances,
    List,
    GrievanceDetail { code: String },
    Review { code: String },
    Status,
    Profile,
    Insights,
    Mail,
    Notices,
    Guidelines,
}

impl UserPage {
    pub const NAV: [Self; 10] = [
        Self::Dashboard,
        Self::Submit,
        Self::Grievances,
        Self::List,
        Self::Status,
        Self::Insights,
        Self::Mail,
        Self::Notices,
        Self::Guidelines,
        Self::Profile,
    ];

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            [] => Some(Self::Dashboard),
            ["submit"] => Some(Self::Submit),
            ["grievances"] => Some(Self::Grievances),
            ["list"] => Some(Self::List),
            ["grievance", code] => Some(Self::GrievanceDetail { code: (*code).to_owned() }),
            ["review", code] => Some(Self::Review { code: (*code).to_owned() }),
            ["status"] => Some(Self::Status),
            ["profile"] => Some(Self::Profile),
            ["insights"] => Some(Self::Insights),
            ["mail"] => Some(Self::Mail),
            ["notices"] => Some(Self::Notices),
            ["guidelines"] => Some(Self::Guidelines),
            _ => None,
        }
    }

    fn href(&self) -> String {
        let base = Section::User.base_path();
        match self {
            Self::Dashboard => base.to_owned(),
            Self::Submit => format!("{base}/submit"),
            Self::Grievances => format!("{base}/grievances"),
            Self::List => format!("{base}/list"),
            Self::GrievanceDetail { code } => format!("{base}/grievance/{code}"),
            Self::Review { code } => format!("{base}/review/{code}"),
            Self::Status => format!("{base}/status"),
            Self::Profile => format!("{base}/profile"),
            Self::Insights => format!("{base}/insights"),
            Self::Mail => format!("{base}/mail"),
            Self::Notices => format!("{base}/notices"),
            Self::Guidelines => format!("{base}/guidelines"),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Submit => "Submit Grievance",
            Self::Grievances => "My Grievances",
            Self::List => "List Grievances",
            Self::GrievanceDetail { .. } => "Grievance Detail",
            Self::Review { .. } => "Review",
            Self::Status => "Check Status",
            Self::Profile => "Edit Profile",
            Self::Insights => "Insights",
            Self::Mail => "Mail",
            Self::Notices => "Notice Board",
            Self::Guidelines => "Guidelines",
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            Self::GrievanceDetail { code } | Self::Review { code } => Some(code.as_str()),
            _ => None,
        }
    }
}

/// A fully matched route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Public(PublicPage),
    Admin(AdminPage),
    User(UserPage),
}

impl AppRoute {
    /// Match a location path. Query strings and fragments are ignored, and
    /// empty segments from repeated or trailing slashes are skipped.
    pub fn parse(path: &str) -> Option<Self> {
        let segments = path_segments(path);
        match segments.split_first() {
            Some((&"admin", rest)) => AdminPage::from_segments(rest).map(Self::Admin),
            Some((&"user", rest)) => UserPage::from_segments(rest).map(Self::User),
            _ => PublicPage::from_segments(&segments).map(Self::Public),
        }
    }

    /// Canonical path for this route.
    pub fn href(&self) -> String {
        match self {
            Self::Public(page) => page.href(),
            Self::Admin(page) => page.href(),
            Self::User(page) => page.href(),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::Public(_) => Section::Public,
            Self::Admin(_) => Section::Admin,
            Self::User(_) => Section::User,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Public(page) => page.title(),
            Self::Admin(page) => page.title(),
            Self::User(page) => page.title(),
        }
    }

    /// Grievance code carried by detail and review routes.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Public(_) => None,
            Self::Admin(page) => page.code(),
            Self::User(page) => page.code(),
        }
    }
}

fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}
