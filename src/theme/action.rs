use std::sync::Arc;

use gpui::SharedString;
use gpui_aurora_theme::{ColorScheme, ThemeConfig, ThemeMode};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// Everything that can happen to a theme session.
///
/// Serialized as `{"type": "SET_MODE", "payload": "dark"}`. Any `type` this
/// build doesn't know deserializes to [`ThemeAction::Unknown`] whatever its
/// payload, and the reducer ignores it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeAction {
    SetTheme(Arc<ThemeConfig>),
    SetMode(ThemeMode),
    ToggleMode,
    SetSystemPreference(ColorScheme),
    LoadPersistedTheme(PersistedTheme),
    ResetTheme,
    SetLoading(bool),
    SetError(String),
    Unknown,
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl<'de> Deserialize<'de> for ThemeAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawAction { kind, payload } = RawAction::deserialize(deserializer)?;
        Self::from_raw(&kind, payload).map_err(|error| D::Error::custom(format!("{kind}: {error}")))
    }
}

impl ThemeAction {
    fn from_raw(kind: &str, payload: Value) -> serde_json::Result<Self> {
        Ok(match kind {
            "SET_THEME" => Self::SetTheme(serde_json::from_value(payload)?),
            "SET_MODE" => Self::SetMode(serde_json::from_value(payload)?),
            "TOGGLE_MODE" => Self::ToggleMode,
            "SET_SYSTEM_PREFERENCE" => Self::SetSystemPreference(serde_json::from_value(payload)?),
            "LOAD_PERSISTED_THEME" => Self::LoadPersistedTheme(serde_json::from_value(payload)?),
            "RESET_THEME" => Self::ResetTheme,
            "SET_LOADING" => Self::SetLoading(serde_json::from_value(payload)?),
            "SET_ERROR" => Self::SetError(serde_json::from_value(payload)?),
            _ => Self::Unknown,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTheme(_) => "SET_THEME",
            Self::SetMode(_) => "SET_MODE",
            Self::ToggleMode => "TOGGLE_MODE",
            Self::SetSystemPreference(_) => "SET_SYSTEM_PREFERENCE",
            Self::LoadPersistedTheme(_) => "LOAD_PERSISTED_THEME",
            Self::ResetTheme => "RESET_THEME",
            Self::SetLoading(_) => "SET_LOADING",
            Self::SetError(_) => "SET_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether applying this action changes what gets written to storage.
    pub(crate) fn touches_persisted(&self) -> bool {
        matches!(
            self,
            Self::SetTheme(_) | Self::SetMode(_) | Self::ToggleMode | Self::ResetTheme
        )
    }
}

impl From<ThemeConfig> for ThemeAction {
    fn from(config: ThemeConfig) -> Self {
        Self::SetTheme(Arc::new(config))
    }
}

impl From<ThemeMode> for ThemeAction {
    fn from(mode: ThemeMode) -> Self {
        Self::SetMode(mode)
    }
}

/// What a session writes to storage under its persist key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTheme {
    pub mode: ThemeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<SharedString>,
}
