#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;
use serde::{Deserialize, Serialize};

use crate::deserializers::{de_color, de_optional_color};

/// A complete palette of semantic color roles.
///
/// Every role is required except `surface_alt`. Values are color strings as
/// they appear in theme files and are not validated beyond being non-empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(deserialize_with = "de_color")]
    pub background: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub background_alt: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub surface: SharedString,
    #[serde(
        default,
        deserialize_with = "de_optional_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub surface_alt: Option<SharedString>,
    #[serde(deserialize_with = "de_color")]
    pub foreground: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub foreground_muted: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub primary: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub primary_foreground: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub secondary: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub secondary_foreground: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub accent: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub accent_foreground: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub border: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub border_strong: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub input: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub ring: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub success: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub success_foreground: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub warning: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub warning_foreground: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub error: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub error_foreground: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub info: SharedString,
    #[serde(deserialize_with = "de_color")]
    pub info_foreground: SharedString,
}

impl ThemeColors {
    /// Reads the color assigned to `role`, `None` only for an absent `surface_alt`.
    pub fn get(&self, role: ColorRole) -> Option<&SharedString> {
        role.value(self)
    }

    /// The color used for muted surfaces: `surface_alt` when the palette has
    /// one, `background_alt` otherwise.
    pub fn muted(&self) -> &SharedString {
        self.surface_alt.as_ref().unwrap_or(&self.background_alt)
    }
}

/// Semantic color roles of a [`ThemeColors`] palette.
///
/// Each role owns a fixed custom-property name used by the token mapper.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn token(&self) -> &'static str)]
pub enum ColorRole {
    #[assoc(token = "--aurora-background")]
    Background,
    #[assoc(token = "--aurora-background-alt")]
    BackgroundAlt,
    #[assoc(token = "--aurora-surface")]
    Surface,
    #[assoc(token = "--aurora-surface-alt")]
    SurfaceAlt,
    #[assoc(token = "--aurora-foreground")]
    Foreground,
    #[assoc(token = "--aurora-foreground-muted")]
    ForegroundMuted,
    #[assoc(token = "--aurora-primary")]
    Primary,
    #[assoc(token = "--aurora-primary-foreground")]
    PrimaryForeground,
    #[assoc(token = "--aurora-secondary")]
    Secondary,
    #[assoc(token = "--aurora-secondary-foreground")]
    SecondaryForeground,
    #[assoc(token = "--aurora-accent")]
    Accent,
    #[assoc(token = "--aurora-accent-foreground")]
    AccentForeground,
    #[assoc(token = "--aurora-border")]
    Border,
    #[assoc(token = "--aurora-border-strong")]
    BorderStrong,
    #[assoc(token = "--aurora-input")]
    Input,
    #[assoc(token = "--aurora-ring")]
    Ring,
    #[assoc(token = "--aurora-success")]
    Success,
    #[assoc(token = "--aurora-success-foreground")]
    SuccessForeground,
    #[assoc(token = "--aurora-warning")]
    Warning,
    #[assoc(token = "--aurora-warning-foreground")]
    WarningForeground,
    #[assoc(token = "--aurora-error")]
    Error,
    #[assoc(token = "--aurora-error-foreground")]
    ErrorForeground,
    #[assoc(token = "--aurora-info")]
    Info,
    #[assoc(token = "--aurora-info-foreground")]
    InfoForeground,
}

impl ColorRole {
    /// Every role, in palette order.
    pub const ALL: [ColorRole; 24] = [
        ColorRole::Background,
        ColorRole::BackgroundAlt,
        ColorRole::Surface,
        ColorRole::SurfaceAlt,
        ColorRole::Foreground,
        ColorRole::ForegroundMuted,
        ColorRole::Primary,
        ColorRole::PrimaryForeground,
        ColorRole::Secondary,
        ColorRole::SecondaryForeground,
        ColorRole::Accent,
        ColorRole::AccentForeground,
        ColorRole::Border,
        ColorRole::BorderStrong,
        ColorRole::Input,
        ColorRole::Ring,
        ColorRole::Success,
        ColorRole::SuccessForeground,
        ColorRole::Warning,
        ColorRole::WarningForeground,
        ColorRole::Error,
        ColorRole::ErrorForeground,
        ColorRole::Info,
        ColorRole::InfoForeground,
    ];

    pub fn value<'a>(&self, colors: &'a ThemeColors) -> Option<&'a SharedString> {
        let color = match self {
            Self::Background => &colors.background,
            Self::BackgroundAlt => &colors.background_alt,
            Self::Surface => &colors.surface,
            Self::SurfaceAlt => return colors.surface_alt.as_ref(),
            Self::Foreground => &colors.foreground,
            Self::ForegroundMuted => &colors.foreground_muted,
            Self::Primary => &colors.primary,
            Self::PrimaryForeground => &colors.primary_foreground,
            Self::Secondary => &colors.secondary,
            Self::SecondaryForeground => &colors.secondary_foreground,
            Self::Accent => &colors.accent,
            Self::AccentForeground => &colors.accent_foreground,
            Self::Border => &colors.border,
            Self::BorderStrong => &colors.border_strong,
            Self::Input => &colors.input,
            Self::Ring => &colors.ring,
            Self::Success => &colors.success,
            Self::SuccessForeground => &colors.success_foreground,
            Self::Warning => &colors.warning,
            Self::WarningForeground => &colors.warning_foreground,
            Self::Error => &colors.error,
            Self::ErrorForeground => &colors.error_foreground,
            Self::Info => &colors.info,
            Self::InfoForeground => &colors.info_foreground,
        };

        Some(color)
    }
}
