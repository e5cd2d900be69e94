//! Account registration page.
//!
//! New accounts start inactive; the backend emails an activation code that the
//! user confirms here before logging in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::gateway::ApiClient;
use crate::net::types::{EmailVerifyRequest, RegisterRequest};
use crate::routes::RouteName;

pub(super) const MIN_USERNAME_CHARS: usize = 2;
pub(super) const MAX_USERNAME_CHARS: usize = 50;
pub(super) const MIN_PASSWORD_CHARS: usize = 6;

/// Emailed activation and reset codes are six ASCII digits.
pub(super) fn is_email_code(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

fn validate_register_input(email: &str, username: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let username = username.trim();
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    let username_len = username.chars().count();
    if !(MIN_USERNAME_CHARS..=MAX_USERNAME_CHARS).contains(&username_len) {
        return Err("Usernames are 2-50 characters.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Passwords need at least 6 characters.");
    }
    Ok(RegisterRequest { email: email.to_owned(), username: username.to_owned(), password: password.to_owned() })
}

fn validate_activation_code(email: &str, code: &str) -> Result<EmailVerifyRequest, &'static str> {
    let code = code.trim();
    if !is_email_code(code) {
        return Err("Enter the 6-digit code from your email.");
    }
    Ok(EmailVerifyRequest { email: email.trim().to_owned(), code: code.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let awaiting_code = RwSignal::new(false);

    let register_api = api.clone();
    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&email.get(), &username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = register_api.clone();
            leptos::task::spawn_local(async move {
                let result = match crate::net::auth::register(&api, &request).await {
                    Ok(created) => crate::net::auth::send_activation_code(&api, &created.email).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => {
                        awaiting_code.set(true);
                        info.set("Account created. Enter the code we emailed you.".to_owned());
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&register_api, request);
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_activation_code(&email.get(), &code.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::verify_email(&api, &request).await {
                    Ok(_) => info.set("Account activated. You can log in now.".to_owned()),
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <Show
                    when=move || awaiting_code.get()
                    fallback=move || view! {
                        <form class="login-form" on:submit=on_register.clone()>
                            <input
                                class="login-input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Username"
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
                                "Register"
                            </button>
                        </form>
                    }
                >
                    <form class="login-form" on:submit=on_verify.clone()>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Activate"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-links">
                    <a href=RouteName::Login.path()>"Already have an account? Log in"</a>
                </p>
            </div>
        </div>
    }
}
