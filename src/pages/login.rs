//! Login page for username/email + password credentials.
//!
//! After a successful login the user returns to the location carried in the
//! `redirect` query parameter, when that is a local path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::gateway::ApiClient;
use crate::net::types::LoginForm;
use crate::routes::RouteName;
use crate::routes::guard::REDIRECT_PARAM;

fn validate_login_input(username: &str, password: &str) -> Result<LoginForm, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your username or email and password.");
    }
    Ok(LoginForm::new(username, password))
}

/// Where to go after logging in. Only same-origin absolute paths are honored.
fn post_login_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => RouteName::Home.path().to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_login_input(&username.get(), &password.get()) {
            Ok(form) => form,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let target = post_login_target(query.with(|q| q.get(REDIRECT_PARAM)).as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.session().login(&api, &form).await {
                    Ok(_) => navigate(&target, NavigateOptions::default()),
                    Err(e) => {
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, form, target);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username or email"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-links">
                    <a href=RouteName::Register.path()>"Create an account"</a>
                    <a href=RouteName::ForgotPassword.path()>"Forgot password?"</a>
                </p>
            </div>
        </div>
    }
}
