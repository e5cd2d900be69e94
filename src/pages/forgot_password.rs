//! Password reset page.
//!
//! Two steps: request a reset code for an email address, then submit that
//! code together with the new password.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use super::register::{MIN_PASSWORD_CHARS, is_email_code};
use crate::net::gateway::ApiClient;
use crate::net::types::ResetPasswordRequest;
use crate::routes::RouteName;

fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

fn validate_reset_input(email: &str, code: &str, new_password: &str) -> Result<ResetPasswordRequest, &'static str> {
    let code = code.trim();
    if !is_email_code(code) {
        return Err("Enter the 6-digit code from your email.");
    }
    if new_password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Passwords need at least 6 characters.");
    }
    Ok(ResetPasswordRequest {
        email: email.trim().to_owned(),
        code: code.to_owned(),
        new_password: new_password.to_owned(),
    })
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let code_sent = RwSignal::new(false);

    let send_api = api.clone();
    let on_send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let address = match validate_reset_email(&email.get()) {
            Ok(address) => address,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending code...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = send_api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::send_password_reset_code(&api, &address).await {
                    Ok(_) => {
                        code_sent.set(true);
                        info.set("Check your email for the reset code.".to_owned());
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&send_api, address);
        }
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_reset_input(&email.get(), &code.get(), &new_password.get()) {
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
                match crate::net::auth::reset_password(&api, &request).await {
                    Ok(_) => {
                        new_password.set(String::new());
                        info.set("Password updated. You can log in now.".to_owned());
                    }
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
                <h1>"Reset password"</h1>
                <Show
                    when=move || code_sent.get()
                    fallback=move || view! {
                        <form class="login-form" on:submit=on_send_code.clone()>
                            <input
                                class="login-input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <button class="login-button" type="submit" disabled=move || busy.get()>
                                "Send code"
                            </button>
                        </form>
                    }
                >
                    <form class="login-form" on:submit=on_reset.clone()>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="New password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Set new password"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-links">
                    <a href=RouteName::Login.path()>"Back to log in"</a>
                </p>
            </div>
        </div>
    }
}
