//! Wire DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON payloads so serde can decode
//! responses directly. Statistic and timestamp fields default when a given
//! endpoint omits them (`/auth/me` and `/users/{id}` return different subsets).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as assigned by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Writer,
    Banned,
}

/// Profile of a user, including authoring statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Number of story nodes this user has written.
    #[serde(default)]
    pub nodes_count: i64,
    /// Likes received across all of this user's nodes.
    #[serde(default)]
    pub likes_count: i64,
}

/// Partial profile; `None` fields are left untouched when merged.
///
/// Also serves as the `PATCH /auth/me` body, where absent fields are omitted.
/// `bio` and `avatar` are nullable: `Some(None)` clears them and is sent as
/// an explicit JSON `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<i64>,
}

impl ProfilePatch {
    /// Shallow-merge the present fields into `profile`.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(username) = &self.username {
            profile.username.clone_from(username);
        }
        if let Some(bio) = &self.bio {
            profile.bio.clone_from(bio);
        }
        if let Some(avatar) = &self.avatar {
            profile.avatar.clone_from(avatar);
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(is_active) = self.is_active {
            profile.is_active = is_active;
        }
        if let Some(is_verified) = self.is_verified {
            profile.is_verified = is_verified;
        }
        if let Some(nodes_count) = self.nodes_count {
            profile.nodes_count = nodes_count;
        }
        if let Some(likes_count) = self.likes_count {
            profile.likes_count = likes_count;
        }
    }
}

/// OAuth2 password-flow credentials, sent form-encoded to `/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub grant_type: Option<String>,
    pub scope: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl LoginForm {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into(), ..Self::default() }
    }

    /// Form fields in wire order; optional fields are skipped when unset.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("username", self.username.as_str()), ("password", self.password.as_str())];
        let optional = [
            ("grant_type", &self.grant_type),
            ("scope", &self.scope),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                fields.push((name, value));
            }
        }
        fields
    }
}

/// Bearer token issued by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Plain `{ "detail": ... }` acknowledgement used by most mutation endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendCodeRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailVerifyRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    pub is_verified: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}
