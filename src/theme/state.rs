use std::sync::Arc;

use gpui_aurora_theme::{ColorScheme, ThemeColors, ThemeConfig, ThemeMode};

use super::builtin::default_theme;

pub const DEFAULT_PERSIST_KEY: &str = "aurora-theme";

/// Session-level settings fixed when a [`ThemeState`] is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStateOptions {
    /// Storage key the session's preference is saved under.
    pub persist_key: String,
    /// Whether operating system preference changes may drive the mode.
    pub enable_system_preference: bool,
    pub initial_mode: ThemeMode,
}

impl Default for ThemeStateOptions {
    fn default() -> Self {
        Self {
            persist_key: DEFAULT_PERSIST_KEY.to_string(),
            enable_system_preference: true,
            initial_mode: ThemeMode::Light,
        }
    }
}

/// A theme session. Only the reducer produces new states.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeState {
    pub(crate) current_theme: Arc<ThemeConfig>,
    pub(crate) mode: ThemeMode,
    pub(crate) system_preference: ColorScheme,
    pub(crate) is_loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) persist_key: String,
    pub(crate) enable_system_preference: bool,
}

impl ThemeState {
    pub fn new(options: ThemeStateOptions) -> Self {
        Self {
            current_theme: default_theme(),
            mode: options.initial_mode,
            system_preference: ColorScheme::Light,
            is_loading: false,
            error: None,
            persist_key: options.persist_key,
            enable_system_preference: options.enable_system_preference,
        }
    }

    pub fn current_theme(&self) -> &Arc<ThemeConfig> {
        &self.current_theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn system_preference(&self) -> ColorScheme {
        self.system_preference
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn persist_key(&self) -> &str {
        &self.persist_key
    }

    pub fn enable_system_preference(&self) -> bool {
        self.enable_system_preference
    }

    /// The scheme actually painted: the system preference in system mode,
    /// the pinned scheme otherwise.
    pub fn resolved_scheme(&self) -> ColorScheme {
        self.mode.resolve(self.system_preference)
    }

    pub fn active_colors(&self) -> &ThemeColors {
        self.current_theme.palette(self.resolved_scheme())
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeStateOptions::default())
    }
}
