//! Profile settings for the logged-in user.
//!
//! Only fields that differ from the cached profile are sent. Clearing the bio
//! or avatar sends an explicit `null`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use super::register::{MAX_USERNAME_CHARS, MIN_USERNAME_CHARS};
use crate::net::gateway::ApiClient;
use crate::net::types::{ProfilePatch, UserProfile};
use crate::state::session::SessionState;

const MAX_BIO_CHARS: usize = 200;

/// New value for a nullable field holding `current`, if `value` differs. Empty clears.
fn nullable_change(current: Option<&str>, value: &str) -> Option<Option<String>> {
    let next = Some(value).filter(|v| !v.is_empty());
    (current != next).then(|| next.map(str::to_owned))
}

/// Patch for the edited fields, or `Ok(None)` when nothing changed.
fn build_profile_patch(
    current: &UserProfile,
    username: &str,
    bio: &str,
    avatar: &str,
) -> Result<Option<ProfilePatch>, &'static str> {
    let username = username.trim();
    let bio = bio.trim();
    let avatar = avatar.trim();
    if !(MIN_USERNAME_CHARS..=MAX_USERNAME_CHARS).contains(&username.chars().count()) {
        return Err("Usernames are 2-50 characters.");
    }
    if bio.chars().count() > MAX_BIO_CHARS {
        return Err("Bios are at most 200 characters.");
    }
    let patch = ProfilePatch {
        username: (username != current.username).then(|| username.to_owned()),
        bio: nullable_change(current.bio.as_deref(), bio),
        avatar: nullable_change(current.avatar.as_deref(), avatar),
        ..ProfilePatch::default()
    };
    Ok((patch != ProfilePatch::default()).then_some(patch))
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();

    let cached = session.with_untracked(|state| state.user.clone());
    let username = RwSignal::new(cached.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let bio = RwSignal::new(cached.as_ref().and_then(|u| u.bio.clone()).unwrap_or_default());
    let avatar = RwSignal::new(cached.as_ref().and_then(|u| u.avatar.clone()).unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(current) = session.with_untracked(|state| state.user.clone()) else {
            info.set("Your profile is still loading.".to_owned());
            return;
        };
        let patch = match build_profile_patch(&current, &username.get(), &bio.get(), &avatar.get()) {
            Ok(Some(patch)) => patch,
            Ok(None) => {
                info.set("Nothing to save.".to_owned());
                return;
            }
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.session().save_profile(&api, &patch).await {
                    Ok(()) => info.set("Profile saved.".to_owned()),
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, patch);
        }
    };

    view! {
        <section class="settings-page">
            <h1>"Settings"</h1>
            <form class="settings-form" on:submit=on_save>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Bio"
                    <textarea
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Avatar URL"
                    <input
                        type="url"
                        prop:value=move || avatar.get()
                        on:input=move |ev| avatar.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>"Save"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="settings-message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
