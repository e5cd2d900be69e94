use super::*;

#[test]
fn table_is_ordered_by_route_name() {
    for (index, route) in ROUTES.iter().enumerate() {
        assert_eq!(route.name as usize, index, "{:?} out of order", route.name);
    }
}

#[test]
fn admin_routes_also_require_auth() {
    for route in ROUTES.iter().filter(|route| route.requires_admin) {
        assert!(route.requires_auth, "{:?}", route.name);
        assert_eq!(route.layout, Layout::Admin);
    }
}

#[test]
fn resolve_matches_static_paths() {
    assert_eq!(resolve("/").map(|r| r.name), Some(RouteName::Home));
    assert_eq!(resolve("/settings").map(|r| r.name), Some(RouteName::Settings));
    assert_eq!(resolve("/admin/audit").map(|r| r.name), Some(RouteName::AdminAudit));
}

#[test]
fn resolve_matches_param_segments() {
    assert_eq!(resolve("/books/42").map(|r| r.name), Some(RouteName::BookDetail));
    assert_eq!(resolve("/story/node/7").map(|r| r.name), Some(RouteName::StoryNode));
    assert_eq!(resolve("/user/3").map(|r| r.name), Some(RouteName::UserProfile));
}

#[test]
fn resolve_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(resolve("/search?q=dragons").map(|r| r.name), Some(RouteName::Search));
    assert_eq!(resolve("/books/#top").map(|r| r.name), Some(RouteName::Books));
    assert_eq!(resolve("/settings/").map(|r| r.name), Some(RouteName::Settings));
}

#[test]
fn resolve_rejects_unknown_and_partial_paths() {
    assert!(resolve("/nowhere").is_none());
    assert!(resolve("/books/1/extra").is_none());
    assert!(resolve("/story/node").is_none());
}

#[test]
fn route_name_path_lookup() {
    assert_eq!(RouteName::Login.path(), "/login");
    assert_eq!(RouteName::Home.path(), "/");
    assert_eq!(RouteName::StoryWrite.descriptor().title, "Write");
}
