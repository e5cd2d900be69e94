#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::storage::MemoryStorage;

#[test]
fn read_preference_defaults_to_light() {
    assert_eq!(read_preference(&MemoryStorage::default()), Theme::Light);
}

#[test]
fn read_preference_uses_stored_value() {
    let storage = MemoryStorage::with_entry(THEME_KEY, "dark");
    assert_eq!(read_preference(&storage), Theme::Dark);
}

#[test]
fn read_preference_ignores_unknown_value() {
    let storage = MemoryStorage::with_entry(THEME_KEY, "sepia");
    assert_eq!(read_preference(&storage), Theme::Light);
}

#[test]
fn store_persists_theme_name() {
    let storage = MemoryStorage::default();
    store(Theme::Dark, &storage);
    assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
}
