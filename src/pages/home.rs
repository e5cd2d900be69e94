//! Landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::routes::RouteName;
use crate::state::session::SessionState;

fn greeting(state: &SessionState) -> String {
    match (&state.user, state.is_logged_in()) {
        (Some(user), _) => format!("Welcome back, {}.", user.username),
        (None, true) => "Welcome back.".to_owned(),
        (None, false) => "Every story has more than one ending.".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="home">
            <h1>"StoryFork"</h1>
            <p class="home__greeting">{move || session.with(greeting)}</p>
            <Show when=move || session.with(SessionState::is_banned)>
                <p class="home__notice">"Your account can read stories but cannot publish new branches."</p>
            </Show>
            <a class="home__cta" href=RouteName::Books.path()>"Browse books"</a>
        </section>
    }
}
