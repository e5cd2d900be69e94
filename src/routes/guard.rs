//! Navigation guard deciding whether a route transition may proceed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGate` evaluates this on every location change with the latest
//! session snapshot. Nothing is retained between transitions.
//!
//! Checks run in a fixed order: auth, then admin, then the
//! already-logged-in check for login/register. A logged-out visitor to an
//! admin route therefore lands on login, never on home.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{RouteDescriptor, RouteName, resolve};
use crate::state::session::SessionState;
use crate::util::query;

/// Query parameter carrying the originally requested location to login.
pub const REDIRECT_PARAM: &str = "redirect";

/// Where a blocked transition goes instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: RouteName,
    pub query: Vec<(String, String)>,
}

impl Redirect {
    fn to(route: RouteName) -> Self {
        Self { to: route, query: Vec::new() }
    }

    /// Target path with its encoded query string.
    #[must_use]
    pub fn href(&self) -> String {
        query::with_query(self.to.path(), self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Outcome of evaluating a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(Redirect),
}

/// Decide a transition to `target`, reached via `full_path` (path plus query).
///
/// An unmatched target redirects home.
#[must_use]
pub fn evaluate(target: Option<&RouteDescriptor>, full_path: &str, session: &SessionState) -> Decision {
    let Some(route) = target else {
        return Decision::Redirect(Redirect::to(RouteName::Home));
    };
    if route.requires_auth && !session.is_logged_in() {
        return Decision::Redirect(Redirect {
            to: RouteName::Login,
            query: vec![(REDIRECT_PARAM.to_owned(), full_path.to_owned())],
        });
    }
    if route.requires_admin && !session.is_admin() {
        return Decision::Redirect(Redirect::to(RouteName::Home));
    }
    if matches!(route.name, RouteName::Login | RouteName::Register) && session.is_logged_in() {
        return Decision::Redirect(Redirect::to(RouteName::Home));
    }
    Decision::Allow
}

/// Resolve `full_path` against the route table and evaluate it.
#[must_use]
pub fn evaluate_path(full_path: &str, session: &SessionState) -> Decision {
    evaluate(resolve(full_path), full_path, session)
}
