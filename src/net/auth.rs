//! Authentication and account endpoints.
//!
//! Thin typed wrappers over [`ApiClient`]; session bookkeeping lives in
//! [`crate::state::session::SessionStore`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::gateway::ApiClient;
use super::types::{
    EmailVerifyRequest, LoginForm, MessageResponse, ProfilePatch, RegisterRequest, RegisterResponse,
    ResetPasswordRequest, SendCodeRequest, TokenResponse, UserProfile,
};

const LOGIN_PATH: &str = "/auth/login";
const ME_PATH: &str = "/auth/me";

fn user_profile_endpoint(user_id: i64) -> String {
    format!("/users/{user_id}")
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] when the server rejects the credentials
/// or the call fails.
pub async fn login(api: &ApiClient, form: &LoginForm) -> Result<TokenResponse, ApiError> {
    api.post_form(LOGIN_PATH, &form.form_fields()).await
}

/// Fetch the profile of the token holder via `GET /auth/me`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] if the call fails.
pub async fn me(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.get(ME_PATH).await
}

/// Update the token holder's profile via `PATCH /auth/me`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] if the call fails.
pub async fn update_me(api: &ApiClient, patch: &ProfilePatch) -> Result<UserProfile, ApiError> {
    api.patch_json(ME_PATH, patch).await
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the classified [`ApiError`], e.g. when the email or username is taken.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    api.post_json("/auth/register", request).await
}

/// Email an account activation code.
///
/// # Errors
///
/// Returns the classified [`ApiError`] if the call fails.
pub async fn send_activation_code(api: &ApiClient, email: &str) -> Result<MessageResponse, ApiError> {
    let request = SendCodeRequest { email: email.to_owned() };
    api.post_json("/auth/send-code-for-activation", &request).await
}

/// Activate an account with the emailed code.
///
/// # Errors
///
/// Returns the classified [`ApiError`] if the code is rejected or the call fails.
pub async fn verify_email(api: &ApiClient, request: &EmailVerifyRequest) -> Result<MessageResponse, ApiError> {
    api.post_json("/auth/verify-email-for-activation", request).await
}

/// Email a password reset code.
///
/// # Errors
///
/// Returns the classified [`ApiError`] if the call fails.
pub async fn send_password_reset_code(api: &ApiClient, email: &str) -> Result<MessageResponse, ApiError> {
    let request = SendCodeRequest { email: email.to_owned() };
    api.post_json("/auth/send-code-for-password-reset", &request).await
}

/// Set a new password using an emailed reset code.
///
/// # Errors
///
/// Returns the classified [`ApiError`] if the code is rejected or the call fails.
pub async fn reset_password(api: &ApiClient, request: &ResetPasswordRequest) -> Result<MessageResponse, ApiError> {
    api.post_json("/auth/reset-password", request).await
}

/// Public profile of any user via `GET /users/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] if the call fails.
pub async fn user_profile(api: &ApiClient, user_id: i64) -> Result<UserProfile, ApiError> {
    api.get(&user_profile_endpoint(user_id)).await
}
