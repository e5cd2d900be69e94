use super::*;

fn writer() -> UserProfile {
    UserProfile {
        id: 1,
        email: "u@example.com".to_owned(),
        username: "u".to_owned(),
        avatar: None,
        bio: Some("old".to_owned()),
        role: Role::Writer,
        is_active: true,
        is_verified: true,
        created_at: None,
        updated_at: None,
        nodes_count: 3,
        likes_count: 7,
    }
}

#[test]
fn profile_decodes_with_missing_stats() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "u@example.com",
        "username": "u",
        "role": "writer",
        "is_active": true,
        "is_verified": false
    }))
    .unwrap();
    assert_eq!(profile.role, Role::Writer);
    assert_eq!(profile.nodes_count, 0);
    assert!(profile.bio.is_none());
}

#[test]
fn role_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Role::Banned).unwrap(), "\"banned\"");
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
}

#[test]
fn patch_changes_only_present_fields() {
    let mut profile = writer();
    let patch = ProfilePatch { bio: Some(Some("new".to_owned())), ..ProfilePatch::default() };
    patch.apply_to(&mut profile);
    assert_eq!(profile.bio.as_deref(), Some("new"));
    assert_eq!(profile, UserProfile { bio: Some("new".to_owned()), ..writer() });
}

#[test]
fn patch_with_explicit_null_clears_nullable_field() {
    let mut profile = UserProfile { avatar: Some("a.png".to_owned()), ..writer() };
    let patch = ProfilePatch { bio: Some(None), avatar: Some(None), ..ProfilePatch::default() };
    patch.apply_to(&mut profile);
    assert_eq!(profile.bio, None);
    assert_eq!(profile.avatar, None);
    assert_eq!(profile.username, "u");
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        serde_json::json!({ "bio": null, "avatar": null })
    );
}

#[test]
fn patch_serializes_without_absent_fields() {
    let patch = ProfilePatch { username: Some("neo".to_owned()), ..ProfilePatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "username": "neo" }));
}

#[test]
fn login_form_skips_unset_optional_fields() {
    let mut form = LoginForm::new("u", "p");
    assert_eq!(form.form_fields(), vec![("username", "u"), ("password", "p")]);

    form.scope = Some("read".to_owned());
    form.client_id = Some(String::new());
    assert_eq!(form.form_fields(), vec![("username", "u"), ("password", "p"), ("scope", "read")]);
}
