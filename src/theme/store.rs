use gpui::Global;
use gpui_aurora_theme::{ThemeColors, ThemeTokens, map_tokens};

use super::{
    PersistedTheme, ThemeAction, ThemeError, ThemeRegistry, ThemeResult, ThemeState,
    ThemeStateOptions, ThemeStorage, reduce,
};

/// A theme session together with the collaborators it needs.
///
/// The reducer stays pure; the store runs it and takes care of storage
/// around it. Install it with [`crate::init`] to share it across an app.
pub struct ThemeStore {
    state: ThemeState,
    registry: ThemeRegistry,
    storage: Option<Box<dyn ThemeStorage>>,
}

impl ThemeStore {
    pub fn new(options: ThemeStateOptions) -> Self {
        Self {
            state: ThemeState::new(options),
            registry: ThemeRegistry::new(),
            storage: None,
        }
    }

    pub fn with_registry(mut self, registry: ThemeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_storage(mut self, storage: impl ThemeStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.registry
    }

    pub fn active_colors(&self) -> &ThemeColors {
        self.state.active_colors()
    }

    pub fn tokens(&self) -> ThemeTokens {
        map_tokens(self.state.active_colors())
    }

    /// Runs `action` through the reducer and reports whether the state changed.
    ///
    /// Changes to the mode or the theme are written to storage. A failed write
    /// is recorded as the session error.
    pub fn dispatch(&mut self, action: ThemeAction) -> bool {
        let persist = action.touches_persisted();
        let changed = self.apply(action);

        if changed && persist {
            self.persist();
        }

        changed
    }

    /// Switches to the registered theme `id`.
    pub fn select_theme(&mut self, id: &str) -> ThemeResult<bool> {
        let theme = self.registry.require(id)?.clone();
        Ok(self.dispatch(ThemeAction::SetTheme(theme)))
    }

    /// Reads the persisted preference and applies it.
    ///
    /// The mode is always restored. The theme is restored when the stored id
    /// is registered; an unknown id leaves the current theme and sets the
    /// session error. Returns whether a stored preference was found.
    pub fn restore(&mut self) -> bool {
        if self.storage.is_none() {
            return false;
        }

        let _span = tracing::debug_span!(
            "theme.restore",
            persist_key = %self.state.persist_key(),
        )
        .entered();

        self.apply(ThemeAction::SetLoading(true));

        let loaded = match self.storage.as_ref() {
            Some(storage) => storage.load(self.state.persist_key()),
            None => Ok(None),
        };

        let persisted = match loaded {
            Ok(Some(persisted)) => persisted,
            Ok(None) => {
                tracing::debug!(target: "aurora.theme", "no persisted theme");
                self.apply(ThemeAction::SetLoading(false));
                return false;
            }
            Err(error) => {
                self.fail(error);
                return false;
            }
        };

        let theme_id = persisted.theme_id.clone();
        self.apply(ThemeAction::LoadPersistedTheme(persisted));

        if let Some(theme_id) = theme_id {
            match self.registry.require(&theme_id) {
                Ok(theme) => {
                    let theme = theme.clone();
                    self.apply(ThemeAction::SetTheme(theme));
                }
                Err(error) => {
                    self.fail(error);
                    return true;
                }
            }
        }

        self.apply(ThemeAction::SetLoading(false));
        true
    }

    fn apply(&mut self, action: ThemeAction) -> bool {
        let name = action.name();
        let next = reduce(self.state.clone(), action);
        let changed = next != self.state;

        tracing::debug!(
            target: "aurora.theme",
            action = name,
            changed,
            mode = %next.mode(),
            theme = %next.current_theme().id,
            "dispatched theme action"
        );

        self.state = next;
        changed
    }

    fn persist(&mut self) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };

        let persisted = PersistedTheme {
            mode: self.state.mode(),
            theme_id: Some(self.state.current_theme().id.clone()),
        };

        if let Err(error) = storage.save(self.state.persist_key(), &persisted) {
            self.fail(error);
        }
    }

    fn fail(&mut self, error: ThemeError) {
        if error.is_storage() {
            tracing::warn!(target: "aurora.theme", %error, "theme storage failed");
        } else {
            tracing::warn!(target: "aurora.theme", %error, "persisted theme is not registered");
        }
        self.apply(ThemeAction::SetError(error.to_string()));
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeStateOptions::default())
    }
}

impl Global for ThemeStore {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gpui_aurora_theme::{ColorScheme, ThemeCategory, ThemeMode};

    use super::*;
    use crate::theme::{MemoryThemeStorage, builtin::default_theme};

    /// Storage that fails every call.
    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn load(&self, key: &str) -> ThemeResult<Option<PersistedTheme>> {
            Err(ThemeError::InvalidPersistKey(key.to_string()))
        }

        fn save(&self, key: &str, _theme: &PersistedTheme) -> ThemeResult<()> {
            Err(ThemeError::InvalidPersistKey(key.to_string()))
        }

        fn clear(&self, _key: &str) -> ThemeResult<()> {
            Ok(())
        }
    }

    /// Shares one memory storage between the store and the test.
    #[derive(Clone, Default)]
    struct SharedStorage(Arc<MemoryThemeStorage>);

    impl ThemeStorage for SharedStorage {
        fn load(&self, key: &str) -> ThemeResult<Option<PersistedTheme>> {
            self.0.load(key)
        }

        fn save(&self, key: &str, theme: &PersistedTheme) -> ThemeResult<()> {
            self.0.save(key, theme)
        }

        fn clear(&self, key: &str) -> ThemeResult<()> {
            self.0.clear(key)
        }
    }

    fn registry() -> ThemeRegistry {
        let mut midnight = (*default_theme()).clone();
        midnight.id = "midnight".into();
        midnight.category = ThemeCategory::Minimal;
        midnight.dark = None;

        let mut registry = ThemeRegistry::new();
        registry.register(midnight);
        registry
    }

    #[test]
    fn test_dispatch_reports_changes() {
        let mut store = ThemeStore::default();

        assert!(store.dispatch(ThemeAction::ToggleMode));
        assert!(!store.dispatch(ThemeAction::SetMode(ThemeMode::Dark)));
        assert!(!store.dispatch(ThemeAction::Unknown));
        assert_eq!(store.state().mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_mode_changes_are_persisted() {
        let storage = SharedStorage::default();
        let mut store = ThemeStore::default()
            .with_registry(registry())
            .with_storage(storage.clone());

        store.dispatch(ThemeAction::SetMode(ThemeMode::System));
        store.select_theme("midnight").unwrap();

        assert_eq!(
            storage.load("aurora-theme").unwrap(),
            Some(PersistedTheme {
                mode: ThemeMode::System,
                theme_id: Some("midnight".into()),
            })
        );
    }

    #[test]
    fn test_transient_actions_are_not_persisted() {
        let storage = SharedStorage::default();
        let mut store = ThemeStore::default().with_storage(storage.clone());

        store.dispatch(ThemeAction::SetLoading(true));
        store.dispatch(ThemeAction::SetSystemPreference(ColorScheme::Dark));

        assert_eq!(storage.load("aurora-theme").unwrap(), None);
    }

    #[test]
    fn test_select_unknown_theme() {
        let mut store = ThemeStore::default();
        assert!(matches!(
            store.select_theme("missing"),
            Err(ThemeError::UnknownTheme(_))
        ));
        assert_eq!(store.state().current_theme(), &default_theme());
    }

    #[test]
    fn test_restore_mode_and_theme() {
        let storage = MemoryThemeStorage::new().with_entry(
            "aurora-theme",
            PersistedTheme {
                mode: ThemeMode::Dark,
                theme_id: Some("midnight".into()),
            },
        );
        let mut store = ThemeStore::default()
            .with_registry(registry())
            .with_storage(storage);

        assert!(store.restore());
        assert_eq!(store.state().mode(), ThemeMode::Dark);
        assert_eq!(store.state().current_theme().id.as_str(), "midnight");
        assert!(!store.state().is_loading());
        assert!(store.state().error().is_none());
    }

    #[test]
    fn test_restore_unknown_theme_sets_error() {
        let storage = MemoryThemeStorage::new().with_entry(
            "aurora-theme",
            PersistedTheme {
                mode: ThemeMode::Dark,
                theme_id: Some("retired".into()),
            },
        );
        let mut store = ThemeStore::default().with_storage(storage);

        assert!(store.restore());
        assert_eq!(store.state().mode(), ThemeMode::Dark);
        assert_eq!(store.state().current_theme(), &default_theme());
        assert!(store.state().error().is_some_and(|e| e.contains("retired")));
        assert!(!store.state().is_loading());
    }

    #[test]
    fn test_restore_error_names_missing_theme_not_storage() {
        let storage = MemoryThemeStorage::new().with_entry(
            "aurora-theme",
            PersistedTheme {
                mode: ThemeMode::Light,
                theme_id: Some("retired".into()),
            },
        );
        let mut store = ThemeStore::default().with_storage(storage);
        store.restore();

        let error = store.state().error().unwrap_or_default();
        assert_eq!(error, ThemeError::UnknownTheme("retired".into()).to_string());
        assert!(!error.contains("file"));
    }

    #[test]
    fn test_restore_without_entry() {
        let mut store = ThemeStore::default().with_storage(MemoryThemeStorage::new());

        assert!(!store.restore());
        assert!(!store.state().is_loading());
        assert!(!ThemeStore::default().restore());
    }

    #[test]
    fn test_storage_failures_surface_as_errors() {
        let mut store = ThemeStore::default().with_storage(BrokenStorage);

        assert!(!store.restore());
        assert!(store.state().error().is_some());
        assert!(!store.state().is_loading());

        store.dispatch(ThemeAction::SetTheme(default_theme()));
        store.dispatch(ThemeAction::ToggleMode);
        assert_eq!(store.state().mode(), ThemeMode::Dark);
        assert!(store.state().error().is_some());
    }

    #[test]
    fn test_tokens_follow_active_palette() {
        let mut store = ThemeStore::default();
        let light = store.tokens();

        store.dispatch(ThemeAction::SetMode(ThemeMode::Dark));
        let dark = store.tokens();

        assert_ne!(light, dark);
        assert_eq!(
            dark.get("--aurora-background"),
            default_theme().dark.as_ref().map(|dark| &dark.background)
        );
    }
}
