//! Applies the navigation guard to the routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `<Route>` in `app` wraps its page in `RouteGate`. The decision is
//! recomputed whenever the location or the session snapshot changes, so a
//! logout or a 401 elsewhere immediately re-guards the visible page.
//!
//! Until the browser has restored the stored session the gate renders a
//! neutral placeholder and decides nothing. Server rendering and the first
//! hydrated frame therefore agree, and redirects are issued client-side from
//! an effect.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::guard::{self, Decision};
use crate::routes::{Layout, resolve};
use crate::state::session::SessionState;

/// Join router pathname and search into the guard's `full_path`.
fn full_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

fn layout_class(pathname: &str) -> &'static str {
    resolve(pathname).map_or(Layout::Default, |route| route.layout).class()
}

/// Guard decision for `full_path`, or `None` while the session is unrestored.
fn gate_decision(full_path: &str, session: &SessionState) -> Option<Decision> {
    session.restored.then(|| guard::evaluate_path(full_path, session))
}

/// Render `children` only when the guard allows the current location.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let target = full_location(&pathname.get(), &search.get());
        session.with(|state| gate_decision(&target, state))
    });

    Effect::new(move || {
        if let Some(Decision::Redirect(redirect)) = decision.get() {
            navigate(&redirect.href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class=move || layout_class(&pathname.get())>
            {move || match decision.get() {
                Some(Decision::Allow) => children().into_any(),
                _ => view! { <div class="route-gate__pending"></div> }.into_any(),
            }}
        </div>
    }
}
