use gpui::App;
use gpui_component::{Theme, ThemeMode};
use tracing::debug;

use crate::config::ThemePreference;

/// Applies the configured colour scheme. Call after `gpui_component::init`.
pub fn apply_theme(
    preference: ThemePreference,
    cx: &mut App,
) {
    match preference {
        ThemePreference::System => Theme::sync_system_appearance(None, cx),
        ThemePreference::Light => Theme::change(ThemeMode::Light, None, cx),
        ThemePreference::Dark => Theme::change(ThemeMode::Dark, None, cx),
    }
    debug!(?preference, "theme applied");
}
