use gpui::SharedString;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{ColorScheme, ThemeColors, deserializers::de_string_or_list};

/// A named theme: a light palette, an optional dark palette and metadata.
///
/// Themes are immutable values. Switching theme replaces the whole config.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub id: SharedString,
    pub name: SharedString,
    #[serde(default)]
    pub category: ThemeCategory,
    pub colors: ThemeColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<ThemeColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ThemeMetadata>,
}

impl ThemeConfig {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<ThemeConfig, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    /// The palette to paint with under `scheme`.
    ///
    /// A dark scheme uses the dark palette when the theme ships one and
    /// falls back to the light palette otherwise.
    pub fn palette(&self, scheme: ColorScheme) -> &ThemeColors {
        match (scheme, &self.dark) {
            (ColorScheme::Dark, Some(dark)) => dark,
            _ => &self.colors,
        }
    }

    pub fn has_dark_palette(&self) -> bool {
        self.dark.is_some()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    #[default]
    Default,
    Vibrant,
    Minimal,
    Accessibility,
    Seasonal,
    #[serde(other)]
    Custom,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ThemeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<SharedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<SharedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<SharedString>,
    #[serde(default, deserialize_with = "de_string_or_list")]
    pub tags: SmallVec<[SharedString; 4]>,
}
