//! Theme initialization and persistence.
//!
//! Reads the stored preference and applies a `data-theme` attribute to the
//! `<html>` element. Storing a new theme writes it back and reapplies it.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::storage::{KeyValueStorage, THEME_KEY};
use crate::state::ui::Theme;

/// Read the theme preference.
///
/// A stored value wins; otherwise the system color scheme decides.
pub fn read_preference(storage: &dyn KeyValueStorage) -> Theme {
    if let Some(theme) = storage.get(THEME_KEY).as_deref().and_then(Theme::parse) {
        return theme;
    }
    if system_prefers_dark() { Theme::Dark } else { Theme::Light }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist and apply `theme`.
pub fn store(theme: Theme, storage: &dyn KeyValueStorage) {
    storage.set(THEME_KEY, theme.as_str());
    apply(theme);
}
