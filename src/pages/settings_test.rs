use super::*;
use crate::test_support::profile_json;

fn current() -> UserProfile {
    let mut profile: UserProfile = serde_json::from_value(profile_json(1, "writer")).unwrap();
    profile.avatar = Some("a.png".to_owned());
    profile
}

#[test]
fn unchanged_fields_produce_no_patch() {
    assert_eq!(build_profile_patch(&current(), " user1 ", "hello", "a.png"), Ok(None));
}

#[test]
fn only_changed_fields_are_sent() {
    let patch = build_profile_patch(&current(), "user1", "new bio", "a.png").unwrap().unwrap();
    assert_eq!(patch, ProfilePatch { bio: Some(Some("new bio".to_owned())), ..ProfilePatch::default() });
}

#[test]
fn emptied_nullable_fields_are_cleared() {
    let patch = build_profile_patch(&current(), "user1", "  ", "").unwrap().unwrap();
    assert_eq!(patch, ProfilePatch { bio: Some(None), avatar: Some(None), ..ProfilePatch::default() });
}

#[test]
fn username_and_bio_limits_are_enforced() {
    assert_eq!(build_profile_patch(&current(), "x", "hello", "a.png"), Err("Usernames are 2-50 characters."));
    let long_bio = "b".repeat(201);
    assert_eq!(build_profile_patch(&current(), "user1", &long_bio, "a.png"), Err("Bios are at most 200 characters."));
}
