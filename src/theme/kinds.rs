use gpui::{App, Rgba, SharedString};
use gpui_aurora_theme::{ColorRole, ThemeColors};

use crate::theme::ThemeExt;

/// Resolves palette roles into GPUI colors.
pub trait ColorRoleExt {
    /// The role's color in the active palette, `None` when the role is unset
    /// or its value isn't a hex color.
    fn resolve(&self, cx: &App) -> Option<Rgba>;

    /// Like [`ColorRoleExt::resolve`], against an explicit palette.
    fn resolve_in(&self, colors: &ThemeColors) -> Option<Rgba>;
}

impl ColorRoleExt for ColorRole {
    fn resolve(&self, cx: &App) -> Option<Rgba> {
        self.resolve_in(cx.active_colors())
    }

    fn resolve_in(&self, colors: &ThemeColors) -> Option<Rgba> {
        self.value(colors).and_then(parse_hex)
    }
}

/// The muted surface color of the active palette.
pub fn resolve_muted(cx: &App) -> Option<Rgba> {
    parse_hex(cx.active_colors().muted())
}

fn parse_hex(color: &SharedString) -> Option<Rgba> {
    Rgba::try_from(color.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin::default_theme;

    #[test]
    fn test_resolve_hex_roles() {
        let theme = default_theme();
        let colors = &theme.colors;

        let background = ColorRole::Background.resolve_in(colors).unwrap();
        assert_eq!((background.r, background.g, background.b, background.a), (1., 1., 1., 1.));

        let foreground = ColorRole::Foreground.resolve_in(colors).unwrap();
        assert!(foreground.r < 0.1);
    }

    #[test]
    fn test_non_hex_colors_do_not_resolve() {
        let mut colors = default_theme().colors.clone();
        colors.ring = "hsl(262 83% 58%)".into();
        colors.surface_alt = None;

        assert!(ColorRole::Ring.resolve_in(&colors).is_none());
        assert!(ColorRole::SurfaceAlt.resolve_in(&colors).is_none());
    }
}
