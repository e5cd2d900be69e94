//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session store so identity
//! changes never re-render purely cosmetic state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::storage::KeyValueStorage;
use crate::util::theme;

/// Color scheme persisted under the `theme` storage key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI state provided to components as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    /// Initial state with the persisted theme preference.
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        Self { theme: theme::read_preference(storage), ..Self::default() }
    }

    pub fn set_theme(&mut self, next: Theme, storage: &dyn KeyValueStorage) {
        self.theme = next;
        theme::store(next, storage);
    }
}
