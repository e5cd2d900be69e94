//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] is the single source of truth for "who is the current
//! actor". The gateway reads its token before every call and logs it out on a
//! 401; route guards read snapshots through the `RwSignal<SessionState>` the
//! app keeps in sync via [`SessionStore::subscribe`].
//!
//! CONCURRENCY
//! ===========
//! Mutations run under one mutex and are never held across an `.await`.
//! Every token change or logout bumps `epoch`; profile responses are only
//! applied if the epoch they were requested under is still current, so a
//! slow rehydration can neither overwrite nor log out a newer login.
//!
//! RESTORATION
//! ===========
//! `restored` stays false until [`SessionStore::initialize`] has settled the
//! stored token in the browser. The server never initializes, so it only
//! ever renders the pre-restore view that hydration starts from.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::auth;
use crate::net::error::SessionError;
use crate::net::gateway::ApiClient;
use crate::net::types::{LoginForm, ProfilePatch, Role, TokenResponse, UserProfile};
use crate::state::storage::{KeyValueStorage, TOKEN_KEY};

/// Point-in-time view of the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// Incremented whenever the token is replaced or cleared.
    pub epoch: u64,
    /// Set once startup rehydration has finished, successfully or not.
    pub restored: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Role of the loaded profile; `None` until the profile arrives.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    #[must_use]
    pub fn is_writer(&self) -> bool {
        self.role() == Some(Role::Writer)
    }

    #[must_use]
    pub fn is_banned(&self) -> bool {
        self.role() == Some(Role::Banned)
    }
}

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

/// Owns the bearer token and cached profile, persisting the token.
pub struct SessionStore {
    state: Mutex<SessionState>,
    storage: Box<dyn KeyValueStorage>,
    listeners: Mutex<Vec<Listener>>,
    initialized: AtomicBool,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("SessionStore")
            .field("logged_in", &state.is_logged_in())
            .field("role", &state.role())
            .field("epoch", &state.epoch)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store, rehydrating any token left in `storage`.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|token| !token.is_empty());
        Self {
            state: Mutex::new(SessionState { token, ..SessionState::default() }),
            storage: Box::new(storage),
            listeners: Mutex::new(Vec::new()),
            initialized: AtomicBool::new(false),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock_state().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.lock_state().token.clone()
    }

    /// Register `listener` to receive a snapshot after every effective mutation.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner).push(Arc::new(listener));
    }

    /// Apply `change` atomically; listeners are notified if it reports a change.
    fn mutate(&self, change: impl FnOnce(&mut SessionState, &dyn KeyValueStorage) -> bool) -> bool {
        let snapshot = {
            let mut state = self.lock_state();
            if !change(&mut *state, self.storage.as_ref()) {
                return false;
            }
            state.clone()
        };
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in listeners {
            listener(&snapshot);
        }
        true
    }

    /// Store `token` in memory and durable storage. Does not fetch the profile.
    pub fn set_token(&self, token: &str) {
        self.mutate(|state, storage| {
            state.token = Some(token.to_owned());
            state.epoch += 1;
            storage.set(TOKEN_KEY, token);
            true
        });
    }

    /// Replace the cached profile. Ignored while logged out.
    pub fn set_user(&self, profile: UserProfile) {
        let applied = self.mutate(|state, _| {
            if state.token.is_none() {
                return false;
            }
            state.user = Some(profile);
            true
        });
        if !applied {
            leptos::logging::warn!("ignoring profile while logged out");
        }
    }

    /// Shallow-merge `patch` into the cached profile; no-op without one.
    pub fn update_user(&self, patch: &ProfilePatch) {
        self.mutate(|state, _| match state.user.as_mut() {
            Some(user) => {
                patch.apply_to(user);
                true
            }
            None => false,
        });
    }

    /// Clear token (memory and storage) and profile. Idempotent.
    pub fn logout(&self) {
        self.mutate(clear_session);
    }

    /// Log out only if no token change happened since `epoch`.
    fn logout_if_current(&self, epoch: u64) -> bool {
        self.mutate(|state, storage| state.epoch == epoch && clear_session(state, storage))
    }

    /// Apply a profile fetched under `epoch` unless the session moved on.
    fn apply_profile(&self, epoch: u64, profile: UserProfile) -> bool {
        self.mutate(|state, _| {
            if state.epoch != epoch || state.token.is_none() {
                return false;
            }
            state.user = Some(profile);
            true
        })
    }

    /// Epoch of the current session, or `None` when logged out.
    fn session_epoch(&self) -> Option<u64> {
        let state = self.lock_state();
        state.token.as_ref().map(|_| state.epoch)
    }

    /// Log in with `form`, store the token, then load the profile.
    ///
    /// `api` must be bound to this store.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Api` if the login call fails (the session is
    /// untouched), or `SessionError::ProfileFetchFailed` if the profile could
    /// not be loaded afterwards (the session is logged out again).
    pub async fn login(&self, api: &ApiClient, form: &LoginForm) -> Result<TokenResponse, SessionError> {
        let token = auth::login(api, form).await?;
        self.set_token(&token.access_token);
        let epoch = self.session_epoch().unwrap_or_default();
        if let Err(err) = self.fetch_user(api).await {
            leptos::logging::warn!("profile load after login failed: {err}");
            self.logout_if_current(epoch);
            return Err(err);
        }
        leptos::logging::log!("logged in as {}", form.username);
        Ok(token)
    }

    /// Load the profile for the current token. No-op when logged out.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ProfileFetchFailed`; the token is left in place.
    pub async fn fetch_user(&self, api: &ApiClient) -> Result<(), SessionError> {
        let Some(epoch) = self.session_epoch() else {
            return Ok(());
        };
        let profile = auth::me(api).await.map_err(SessionError::ProfileFetchFailed)?;
        if !self.apply_profile(epoch, profile) {
            leptos::logging::log!("discarding profile for superseded session");
        }
        Ok(())
    }

    /// Save `patch` via `PATCH /auth/me` and cache the server's result.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Api` if the update fails.
    pub async fn save_profile(&self, api: &ApiClient, patch: &ProfilePatch) -> Result<(), SessionError> {
        let Some(epoch) = self.session_epoch() else {
            return Ok(());
        };
        let profile = auth::update_me(api, patch).await?;
        self.apply_profile(epoch, profile);
        Ok(())
    }

    /// Resolve a rehydrated token into a profile, once per store, then mark
    /// the session as restored.
    ///
    /// Any failure logs the session out, unless a newer login already
    /// replaced the rehydrated token.
    pub async fn initialize(&self, api: &ApiClient) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(epoch) = self.session_epoch() {
            if let Err(err) = self.fetch_user(api).await {
                leptos::logging::warn!("stored session could not be restored: {err}");
                if !self.logout_if_current(epoch) {
                    leptos::logging::log!("session changed during restore; leaving it in place");
                }
            }
        }
        self.mutate(|state, _| {
            let changed = !state.restored;
            state.restored = true;
            changed
        });
    }
}

fn clear_session(state: &mut SessionState, storage: &dyn KeyValueStorage) -> bool {
    storage.remove(TOKEN_KEY);
    if state.token.is_none() && state.user.is_none() {
        return false;
    }
    state.token = None;
    state.user = None;
    state.epoch += 1;
    true
}
