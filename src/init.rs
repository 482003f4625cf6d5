use gpui::{App, Subscription, Window};

use crate::theme::{ThemeStore, observe_system_appearance};

/// Installs `store` as the app's theme session.
///
/// Call [`ThemeStore::restore`] before installing to pick up a persisted
/// preference.
pub fn init(cx: &mut App, store: ThemeStore) {
    cx.set_global(store);
}

/// Starts feeding the window's appearance to the session as its system
/// preference.
pub fn init_for_window(window: &mut Window, cx: &mut App) -> Subscription {
    observe_system_appearance(window, cx)
}
