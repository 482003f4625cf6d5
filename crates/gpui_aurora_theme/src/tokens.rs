use gpui::SharedString;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{ColorRole, ThemeColors};

/// Custom property for muted surfaces, derived rather than read from a role.
pub const MUTED_TOKEN: &str = "--aurora-muted";

/// Ordered custom-property name to color mapping consumed by the styling layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeTokens(IndexMap<&'static str, SharedString>);

impl ThemeTokens {
    pub fn get(&self, token: &str) -> Option<&SharedString> {
        self.0.get(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SharedString)> {
        self.0.iter().map(|(token, color)| (*token, color))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the tokens as a single CSS rule, one declaration per line.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::with_capacity(32 * (self.0.len() + 1));
        css.push_str(selector);
        css.push_str(" {\n");

        for (token, color) in &self.0 {
            css.push_str("  ");
            css.push_str(token);
            css.push_str(": ");
            css.push_str(color);
            css.push_str(";\n");
        }

        css.push('}');
        css
    }
}

/// Maps every role of `colors` to its custom property.
///
/// An absent `surface_alt` produces no `--aurora-surface-alt` entry. The
/// muted token is always present.
pub fn map_tokens(colors: &ThemeColors) -> ThemeTokens {
    let mut tokens = IndexMap::with_capacity(ColorRole::ALL.len() + 1);

    for role in ColorRole::ALL {
        if let Some(color) = role.value(colors) {
            tokens.insert(role.token(), color.clone());
        }
    }

    tokens.insert(MUTED_TOKEN, colors.muted().clone());

    ThemeTokens(tokens)
}

impl From<&ThemeColors> for ThemeTokens {
    fn from(colors: &ThemeColors) -> Self {
        map_tokens(colors)
    }
}
