use gpui_aurora_theme::ThemeMode;

use super::{ThemeAction, ThemeState, builtin::default_theme};

/// Applies `action` to `state` and returns the next state.
///
/// Pure: no I/O and no dependence on anything but the arguments. Actions the
/// session doesn't understand return `state` unchanged.
pub fn reduce(state: ThemeState, action: ThemeAction) -> ThemeState {
    match action {
        ThemeAction::SetTheme(config) => ThemeState {
            current_theme: config,
            error: None,
            ..state
        },

        ThemeAction::SetMode(mode) => ThemeState { mode, ..state },

        ThemeAction::ToggleMode => {
            let mode = ThemeMode::from(state.resolved_scheme().toggled());
            ThemeState { mode, ..state }
        }

        ThemeAction::SetSystemPreference(system_preference) => {
            let mode = if state.enable_system_preference && state.mode.is_system() {
                ThemeMode::from(system_preference)
            } else {
                state.mode
            };

            ThemeState {
                mode,
                system_preference,
                ..state
            }
        }

        ThemeAction::LoadPersistedTheme(persisted) => ThemeState {
            mode: persisted.mode,
            ..state
        },

        ThemeAction::ResetTheme => ThemeState {
            current_theme: default_theme(),
            mode: ThemeMode::Light,
            error: None,
            ..state
        },

        ThemeAction::SetLoading(is_loading) => ThemeState { is_loading, ..state },

        ThemeAction::SetError(error) => ThemeState {
            error: Some(error),
            is_loading: false,
            ..state
        },

        ThemeAction::Unknown => state,
    }
}
