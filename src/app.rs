//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, route_gate::RouteGate};
use crate::config::ClientConfig;
use crate::net::gateway::ApiClient;
use crate::net::transport::{BrowserNavigator, FetchTransport};
use crate::pages::{
    forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage, register::RegisterPage,
    section::SectionPage, settings::SettingsPage, user_profile::UserProfilePage,
};
use crate::routes::RouteName;
use crate::state::session::{SessionState, SessionStore};
use crate::state::storage::BrowserStorage;
use crate::state::ui::UiState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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

fn gated_section(name: RouteName) -> impl IntoView {
    view! {
        <RouteGate>
            <SectionPage name=name/>
        </RouteGate>
    }
}

/// Root application component.
///
/// Builds the session store and API client, provides them as context, and
/// starts restoring any stored session in the background.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Arc::new(SessionStore::new(BrowserStorage));
    let api = ApiClient::new(
        ClientConfig::from_build_env(),
        session.clone(),
        Arc::new(FetchTransport),
        Arc::new(BrowserNavigator),
    );

    // Server and client both start from the unrestored default; the store
    // publishes the real session once `initialize` settles in the browser.
    let snapshot = RwSignal::new(SessionState::default());
    session.subscribe(move |state| {
        let _ = snapshot.try_set(state.clone());
    });
    let ui = RwSignal::new(UiState::default());

    provide_context(api.clone());
    provide_context(snapshot);
    provide_context(ui);

    // Effects only run after hydration, so the stored theme cannot skew SSR.
    Effect::new(move || {
        let loaded = UiState::load(&BrowserStorage);
        theme::apply(loaded.theme);
        ui.set(loaded);
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            api.session().initialize(&api).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storyfork.css"/>
        <Title text="StoryFork"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| view! { <Redirect path=RouteName::Home.path()/> }>
                    <Route path=StaticSegment("") view=|| view! { <RouteGate><HomePage/></RouteGate> }/>
                    <Route path=StaticSegment("login") view=|| view! { <RouteGate><LoginPage/></RouteGate> }/>
                    <Route path=StaticSegment("register") view=|| view! { <RouteGate><RegisterPage/></RouteGate> }/>
                    <Route path=StaticSegment("forgot-password") view=|| view! { <RouteGate><ForgotPasswordPage/></RouteGate> }/>
                    <Route path=StaticSegment("discovery") view=|| gated_section(RouteName::Discovery)/>
                    <Route path=StaticSegment("trending") view=|| gated_section(RouteName::Trending)/>
                    <Route path=StaticSegment("search") view=|| gated_section(RouteName::Search)/>
                    <Route path=StaticSegment("books") view=|| gated_section(RouteName::Books)/>
                    <Route path=(StaticSegment("books"), ParamSegment("id")) view=|| gated_section(RouteName::BookDetail)/>
                    <Route
                        path=(StaticSegment("story"), StaticSegment("node"), ParamSegment("id"))
                        view=|| gated_section(RouteName::StoryNode)
                    />
                    <Route path=(StaticSegment("story"), StaticSegment("write")) view=|| gated_section(RouteName::StoryWrite)/>
                    <Route path=(StaticSegment("user"), ParamSegment("id")) view=|| view! { <RouteGate><UserProfilePage/></RouteGate> }/>
                    <Route path=StaticSegment("settings") view=|| view! { <RouteGate><SettingsPage/></RouteGate> }/>
                    <Route path=StaticSegment("notifications") view=|| gated_section(RouteName::Notifications)/>
                    <Route path=StaticSegment("admin") view=|| gated_section(RouteName::Admin)/>
                    <Route path=(StaticSegment("admin"), StaticSegment("audit")) view=|| gated_section(RouteName::AdminAudit)/>
                    <Route path=(StaticSegment("admin"), StaticSegment("users")) view=|| gated_section(RouteName::AdminUsers)/>
                </Routes>
            </main>
        </Router>
    }
}
