use std::sync::{Arc, LazyLock};

use gpui_aurora_theme::ThemeConfig;

static DEFAULT_THEME: LazyLock<Arc<ThemeConfig>> = LazyLock::new(|| {
    let theme = ThemeConfig::from_json(include_str!("../../themes/default.json"))
        .expect("bundled default theme is valid");
    Arc::new(theme)
});

/// The theme a session starts with and returns to on reset.
///
/// Parsed once from the bundled `themes/default.json`; every call shares the
/// same allocation.
pub fn default_theme() -> Arc<ThemeConfig> {
    DEFAULT_THEME.clone()
}
