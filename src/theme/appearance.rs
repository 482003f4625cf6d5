use gpui::{App, Subscription, Window};
use gpui_aurora_theme::ColorScheme;

use crate::theme::{ThemeAction, ThemeExt};

/// Feeds the window's current appearance to the session as the system preference.
pub fn sync_system_appearance(window: &Window, cx: &mut App) -> bool {
    let scheme = ColorScheme::from(window.appearance());
    cx.dispatch_theme(ThemeAction::SetSystemPreference(scheme))
}

/// Keeps the session's system preference in step with the window's appearance.
///
/// The preference is synced once immediately. Drop the subscription to stop.
pub fn observe_system_appearance(window: &mut Window, cx: &mut App) -> Subscription {
    sync_system_appearance(window, cx);

    window.observe_window_appearance(|window, cx| {
        sync_system_appearance(window, cx);
    })
}
