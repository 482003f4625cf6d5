use std::{fs, path::Path, sync::Arc};

use gpui::SharedString;
use gpui_aurora_theme::{ThemeCategory, ThemeConfig};
use indexmap::IndexMap;

use super::{ThemeError, ThemeResult, builtin::default_theme};

/// Themes a session can switch to, keyed by id in registration order.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: IndexMap<SharedString, Arc<ThemeConfig>>,
}

impl ThemeRegistry {
    /// A registry holding only the default theme.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(default_theme());
        registry
    }

    pub fn empty() -> Self {
        Self {
            themes: IndexMap::new(),
        }
    }

    /// Adds `theme`, replacing and returning any theme with the same id.
    pub fn register(&mut self, theme: impl Into<Arc<ThemeConfig>>) -> Option<Arc<ThemeConfig>> {
        let theme = theme.into();
        self.themes.insert(theme.id.clone(), theme)
    }

    pub fn register_json<S: AsRef<str>>(&mut self, json: S) -> ThemeResult<Arc<ThemeConfig>> {
        let theme = Arc::new(ThemeConfig::from_json(json)?);
        self.register(theme.clone());
        Ok(theme)
    }

    /// Registers every `*.json` file directly inside `dir`, in file name order.
    ///
    /// Returns the number of themes registered.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> ThemeResult<usize> {
        let dir = dir.as_ref();
        let read_dir_error = |source| ThemeError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_error)? {
            let path = entry.map_err(read_dir_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let serialized = fs::read_to_string(path).map_err(|source| ThemeError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            let theme = ThemeConfig::from_json(serialized).map_err(|source| {
                ThemeError::ParseTheme {
                    path: path.clone(),
                    source,
                }
            })?;

            tracing::debug!(target: "aurora.theme", id = %theme.id, path = %path.display(), "registered theme");
            self.register(theme);
        }

        Ok(paths.len())
    }

    pub fn get(&self, id: &str) -> Option<&Arc<ThemeConfig>> {
        self.themes.get(id)
    }

    /// Like [`ThemeRegistry::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> ThemeResult<&Arc<ThemeConfig>> {
        self.get(id)
            .ok_or_else(|| ThemeError::UnknownTheme(SharedString::from(id.to_string())))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ThemeConfig>> {
        self.themes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SharedString> {
        self.themes.keys()
    }

    pub fn by_category(&self, category: ThemeCategory) -> impl Iterator<Item = &Arc<ThemeConfig>> {
        self.iter().filter(move |theme| theme.category == category)
    }

    /// The theme registered after `id`, wrapping around.
    pub fn next_after(&self, id: &str) -> Option<&Arc<ThemeConfig>> {
        let index = self.themes.get_index_of(id).map_or(0, |index| index + 1);
        self.themes
            .get_index(index % self.themes.len().max(1))
            .map(|(_, theme)| theme)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use rust_embed::RustEmbed;

        /// Theme files bundled with the crate.
        #[derive(RustEmbed)]
        #[folder = "themes/"]
        #[include = "*.json"]
        pub struct AuroraThemes;

        impl ThemeRegistry {
            /// The default theme followed by every bundled theme, in file name order.
            pub fn with_builtin() -> ThemeResult<Self> {
                let mut registry = Self::new();

                let mut files: Vec<_> = AuroraThemes::iter().collect();
                files.sort();

                for file in files {
                    let Some(asset) = AuroraThemes::get(&file) else {
                        continue;
                    };

                    let theme: ThemeConfig = serde_json::from_slice(&asset.data).map_err(|source| {
                        ThemeError::ParseTheme {
                            path: file.to_string().into(),
                            source,
                        }
                    })?;

                    registry.register(theme);
                }

                Ok(registry)
            }
        }
    }
);
