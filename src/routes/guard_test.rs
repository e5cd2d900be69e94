use super::*;
use crate::net::types::{Role, UserProfile};
use crate::routes::ROUTES;

fn logged_out() -> SessionState {
    SessionState::default()
}

fn logged_in(role: Option<Role>) -> SessionState {
    SessionState {
        token: Some("abc".to_owned()),
        user: role.map(|role| UserProfile {
            id: 1,
            email: "u@example.com".to_owned(),
            username: "u".to_owned(),
            avatar: None,
            bio: None,
            role,
            is_active: true,
            is_verified: true,
            created_at: None,
            updated_at: None,
            nodes_count: 0,
            likes_count: 0,
        }),
        epoch: 1,
        restored: true,
    }
}

fn redirect_to(decision: &Decision) -> Option<RouteName> {
    match decision {
        Decision::Allow => None,
        Decision::Redirect(redirect) => Some(redirect.to),
    }
}

#[test]
fn auth_routes_send_logged_out_visitors_to_login_with_redirect() {
    for route in ROUTES.iter().filter(|route| route.requires_auth) {
        let decision = evaluate(Some(route), route.path, &logged_out());
        let Decision::Redirect(redirect) = decision else {
            panic!("{:?} rendered while logged out", route.name);
        };
        assert_eq!(redirect.to, RouteName::Login);
        assert_eq!(redirect.query, vec![("redirect".to_owned(), route.path.to_owned())]);
    }
}

#[test]
fn redirect_query_keeps_full_attempted_path() {
    let decision = evaluate_path("/settings?tab=profile", &logged_out());
    let Decision::Redirect(redirect) = decision else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.href(), "/login?redirect=%2Fsettings%3Ftab%3Dprofile");
}

#[test]
fn admin_routes_send_logged_out_visitors_to_login_not_home() {
    for route in ROUTES.iter().filter(|route| route.requires_admin) {
        assert_eq!(redirect_to(&evaluate(Some(route), route.path, &logged_out())), Some(RouteName::Login));
    }
}

#[test]
fn admin_routes_send_logged_in_non_admins_home() {
    for role in [None, Some(Role::Writer), Some(Role::Banned)] {
        let session = logged_in(role);
        for route in ROUTES.iter().filter(|route| route.requires_admin) {
            assert_eq!(redirect_to(&evaluate(Some(route), route.path, &session)), Some(RouteName::Home));
        }
    }
}

#[test]
fn admin_routes_allow_admins() {
    let session = logged_in(Some(Role::Admin));
    assert_eq!(evaluate_path("/admin/users", &session), Decision::Allow);
}

#[test]
fn logged_in_users_bounce_off_login_and_register() {
    let session = logged_in(Some(Role::Writer));
    assert_eq!(redirect_to(&evaluate_path("/login", &session)), Some(RouteName::Home));
    assert_eq!(redirect_to(&evaluate_path("/register", &session)), Some(RouteName::Home));
}

#[test]
fn logged_in_users_reach_other_unguarded_routes() {
    let session = logged_in(None);
    for path in ["/", "/forgot-password", "/books/1", "/story/node/9", "/search?q=x"] {
        assert_eq!(evaluate_path(path, &session), Decision::Allow, "{path}");
    }
}

#[test]
fn logged_in_without_profile_reaches_member_routes() {
    assert_eq!(evaluate_path("/story/write", &logged_in(None)), Decision::Allow);
}

#[test]
fn logged_out_visitors_reach_login() {
    assert_eq!(evaluate_path("/login?redirect=%2Fsettings", &logged_out()), Decision::Allow);
}

#[test]
fn unmatched_paths_redirect_home() {
    let decision = evaluate_path("/no/such/page", &logged_in(None));
    assert_eq!(decision, Decision::Redirect(Redirect { to: RouteName::Home, query: Vec::new() }));
}

#[test]
fn plain_redirect_href_has_no_query() {
    assert_eq!(Redirect::to(RouteName::Home).href(), "/");
}
