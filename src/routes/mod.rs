//! Route descriptors and path resolution.
//!
//! DESIGN
//! ======
//! Access requirements live in one static table so the navigation guard can
//! be evaluated as a pure function, independent of the Leptos router that
//! renders the matched page.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod guard;

use crate::util::query;

/// Every navigable route, in [`ROUTES`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Register,
    ForgotPassword,
    Discovery,
    Trending,
    Search,
    Books,
    BookDetail,
    StoryNode,
    StoryWrite,
    UserProfile,
    Settings,
    Notifications,
    Admin,
    AdminAudit,
    AdminUsers,
}

/// Page chrome a route renders inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Default,
    Auth,
    Admin,
}

impl Layout {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "layout layout--default",
            Self::Auth => "layout layout--auth",
            Self::Admin => "layout layout--admin",
        }
    }
}

/// Static access metadata for a navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: RouteName,
    /// Path pattern; `:name` segments match any single segment.
    pub path: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
    pub requires_admin: bool,
    pub layout: Layout,
}

const fn public(name: RouteName, path: &'static str, title: &'static str) -> RouteDescriptor {
    RouteDescriptor { name, path, title, requires_auth: false, requires_admin: false, layout: Layout::Default }
}

const fn auth_flow(name: RouteName, path: &'static str, title: &'static str) -> RouteDescriptor {
    RouteDescriptor { layout: Layout::Auth, ..public(name, path, title) }
}

const fn member(name: RouteName, path: &'static str, title: &'static str) -> RouteDescriptor {
    RouteDescriptor { requires_auth: true, ..public(name, path, title) }
}

const fn admin(name: RouteName, path: &'static str, title: &'static str) -> RouteDescriptor {
    RouteDescriptor { requires_auth: true, requires_admin: true, layout: Layout::Admin, ..public(name, path, title) }
}

pub static ROUTES: &[RouteDescriptor] = &[
    public(RouteName::Home, "/", "Home"),
    auth_flow(RouteName::Login, "/login", "Log in"),
    auth_flow(RouteName::Register, "/register", "Register"),
    auth_flow(RouteName::ForgotPassword, "/forgot-password", "Forgot password"),
    public(RouteName::Discovery, "/discovery", "Discover"),
    public(RouteName::Trending, "/trending", "Trending"),
    public(RouteName::Search, "/search", "Search"),
    public(RouteName::Books, "/books", "Books"),
    public(RouteName::BookDetail, "/books/:id", "Book"),
    public(RouteName::StoryNode, "/story/node/:id", "Story"),
    member(RouteName::StoryWrite, "/story/write", "Write"),
    public(RouteName::UserProfile, "/user/:id", "Profile"),
    member(RouteName::Settings, "/settings", "Settings"),
    member(RouteName::Notifications, "/notifications", "Notifications"),
    admin(RouteName::Admin, "/admin", "Admin"),
    admin(RouteName::AdminAudit, "/admin/audit", "Review queue"),
    admin(RouteName::AdminUsers, "/admin/users", "Users"),
];

impl RouteName {
    #[must_use]
    pub fn descriptor(self) -> &'static RouteDescriptor {
        &ROUTES[self as usize]
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.descriptor().path
    }
}

/// Find the descriptor matching `location`; query and fragment are ignored.
#[must_use]
pub fn resolve(location: &str) -> Option<&'static RouteDescriptor> {
    let path = query::path_only(location);
    ROUTES.iter().find(|route| matches_pattern(route.path, path))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    let mut expected = segments(pattern);
    let mut actual = segments(path);
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) if want.starts_with(':') || want == got => {}
            _ => return false,
        }
    }
}
