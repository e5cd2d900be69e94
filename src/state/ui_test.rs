use super::*;
use crate::state::storage::{MemoryStorage, THEME_KEY};

#[test]
fn ui_state_default_is_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn theme_parse_round_trips_names() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse("DARK"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_reads_stored_theme() {
    let storage = MemoryStorage::with_entry(THEME_KEY, "dark");
    assert_eq!(UiState::load(&storage).theme, Theme::Dark);
}

#[test]
fn set_theme_persists_preference() {
    let storage = MemoryStorage::default();
    let mut state = UiState::default();
    state.set_theme(Theme::Dark, &storage);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn toggled_theme_persists_round_trip() {
    let storage = MemoryStorage::default();
    let mut state = UiState::default();
    state.set_theme(state.theme.toggled(), &storage);
    state.set_theme(state.theme.toggled(), &storage);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(storage.get(THEME_KEY).as_deref(), Some("light"));
}
