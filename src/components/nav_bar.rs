//! Top navigation bar with identity-aware links, theme toggle, and logout.

use leptos::prelude::*;

use crate::net::gateway::ApiClient;
use crate::routes::RouteName;
use crate::state::session::SessionState;
use crate::state::storage::BrowserStorage;
use crate::state::ui::{Theme, UiState};

#[component]
pub fn NavBar() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Guarded pages redirect on their own once the session snapshot clears.
    let on_logout = move |_| api.session().logout();

    let on_toggle_theme = move |_| {
        ui.update(|state| {
            let next = state.theme.toggled();
            state.set_theme(next, &BrowserStorage);
        });
    };

    let display_name = move || session.with(|state| state.user.as_ref().map(|user| user.username.clone()));

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=RouteName::Home.path()>"StoryFork"</a>
            <nav class="nav-bar__links">
                <a href=RouteName::Discovery.path()>"Discover"</a>
                <a href=RouteName::Trending.path()>"Trending"</a>
                <a href=RouteName::Books.path()>"Books"</a>
                <Show when=move || session.with(SessionState::is_logged_in)>
                    <a href=RouteName::StoryWrite.path()>"Write"</a>
                    <a href=RouteName::Notifications.path()>"Notifications"</a>
                </Show>
                <Show when=move || session.with(SessionState::is_admin)>
                    <a href=RouteName::Admin.path()>"Admin"</a>
                </Show>
            </nav>
            <button class="nav-bar__theme" on:click=on_toggle_theme>
                {move || if ui.get().theme == Theme::Dark { "Light" } else { "Dark" }}
            </button>
            <Show
                when=move || session.with(SessionState::is_logged_in)
                fallback=|| view! { <a class="nav-bar__login" href=RouteName::Login.path()>"Log in"</a> }
            >
                <a class="nav-bar__user" href=RouteName::Settings.path()>{move || display_name().unwrap_or_default()}</a>
                <button class="nav-bar__logout" on:click=on_logout.clone()>"Log out"</button>
            </Show>
        </header>
    }
}
