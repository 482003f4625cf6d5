use gpui::{App, BorrowAppContext};
use gpui_aurora_theme::{ThemeColors, ThemeTokens};

use crate::theme::{ThemeAction, ThemeState, ThemeStore};

/// Extension trait for driving the global theme session.
pub trait ThemeExt {
    /// Dispatches an action to the global [`ThemeStore`].
    ///
    /// Returns whether the theme state changed. Observers of the store are
    /// notified either way.
    fn dispatch_theme(&mut self, action: impl Into<ThemeAction>) -> bool;

    /// Gets an immutable reference to the session state.
    fn theme_state(&self) -> &ThemeState;

    /// The palette for the session's resolved scheme.
    fn active_colors(&self) -> &ThemeColors;

    /// Custom properties for the active palette.
    fn theme_tokens(&self) -> ThemeTokens;
}

impl ThemeExt for App {
    fn dispatch_theme(&mut self, action: impl Into<ThemeAction>) -> bool {
        let action = action.into();
        self.update_global::<ThemeStore, _>(|store, _cx| store.dispatch(action))
    }

    fn theme_state(&self) -> &ThemeState {
        self.global::<ThemeStore>().state()
    }

    fn active_colors(&self) -> &ThemeColors {
        self.global::<ThemeStore>().active_colors()
    }

    fn theme_tokens(&self) -> ThemeTokens {
        self.global::<ThemeStore>().tokens()
    }
}
