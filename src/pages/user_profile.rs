//! Public profile of any user, addressed as `/user/:id`.

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::gateway::ApiClient;
use crate::net::types::{ProfilePatch, UserProfile};

fn parse_user_id(raw: Option<&str>) -> Option<i64> {
    raw?.parse().ok().filter(|id| *id > 0)
}

/// Stat refresh for the cached profile when `fetched` is the current user.
fn stats_patch(current: Option<&UserProfile>, fetched: &UserProfile) -> Option<ProfilePatch> {
    let current = current.filter(|user| user.id == fetched.id)?;
    if current.nodes_count == fetched.nodes_count && current.likes_count == fetched.likes_count {
        return None;
    }
    Some(ProfilePatch {
        nodes_count: Some(fetched.nodes_count),
        likes_count: Some(fetched.likes_count),
        ..ProfilePatch::default()
    })
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();

    let user_id = Memo::new(move |_| params.with(|p| parse_user_id(p.get("id").as_deref())));
    let profile = RwSignal::new(None::<UserProfile>);
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        profile.set(None);
        let Some(id) = user_id.get() else {
            info.set("No such user.".to_owned());
            return;
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::user_profile(&api, id).await {
                    Ok(fetched) => {
                        let cached = api.session().snapshot().user;
                        if let Some(patch) = stats_patch(cached.as_ref(), &fetched) {
                            api.session().update_user(&patch);
                        }
                        profile.set(Some(fetched));
                    }
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, id);
        }
    });

    view! {
        <section class="user-profile">
            {move || profile.get().map(|user| {
                let UserProfile { username, bio, nodes_count, likes_count, .. } = user;
                view! {
                    <h1>{username}</h1>
                    <p class="user-profile__bio">{bio.unwrap_or_default()}</p>
                    <p class="user-profile__stats">{format!("{nodes_count} nodes, {likes_count} likes")}</p>
                }
            })}
            <Show when=move || !info.get().is_empty()>
                <p class="user-profile__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
