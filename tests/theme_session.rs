#![cfg(feature = "assets")]

use gpui_aurora::theme::{
    ColorScheme, FileThemeStorage, MUTED_TOKEN, PersistedTheme, ThemeAction, ThemeMode,
    ThemeRegistry, ThemeStateOptions, ThemeStorage, ThemeStore, default_theme, reduce,
};
use tempfile::TempDir;

fn store(dir: &TempDir) -> ThemeStore {
    ThemeStore::new(ThemeStateOptions {
        persist_key: "docs-site".into(),
        ..Default::default()
    })
    .with_registry(ThemeRegistry::with_builtin().unwrap())
    .with_storage(FileThemeStorage::new(dir.path()))
}

#[test]
fn preference_survives_a_new_session() {
    let dir = TempDir::new().unwrap();

    let mut first = store(&dir);
    assert!(!first.restore());
    first.select_theme("evergreen").unwrap();
    first.dispatch(ThemeAction::SetMode(ThemeMode::Dark));

    let mut second = store(&dir);
    assert!(second.restore());
    assert_eq!(second.state().mode(), ThemeMode::Dark);
    assert_eq!(second.state().current_theme().id.as_str(), "evergreen");
    assert_eq!(
        second.tokens().get("--aurora-background").map(|c| c.as_str()),
        Some("#0c140a")
    );
}

#[test]
fn persisted_file_is_keyed_by_persist_key() {
    let dir = TempDir::new().unwrap();

    let mut session = store(&dir);
    session.dispatch(ThemeAction::ToggleMode);

    let storage = FileThemeStorage::new(dir.path());
    assert_eq!(
        storage.load("docs-site").unwrap(),
        Some(PersistedTheme {
            mode: ThemeMode::Dark,
            theme_id: Some("aurora".into()),
        })
    );
    assert!(dir.path().join("docs-site.json").is_file());
}

#[test]
fn replaying_wire_actions() {
    let actions: Vec<ThemeAction> = serde_json::from_str(
        r#"[
            { "type": "SET_MODE", "payload": "system" },
            { "type": "SET_SYSTEM_PREFERENCE", "payload": "dark" },
            { "type": "SET_LOADING", "payload": true },
            { "type": "OPEN_COMMAND_PALETTE" },
            { "type": "SET_ERROR", "payload": "theme service unavailable" }
        ]"#,
    )
    .unwrap();

    let mut session = ThemeStore::default();
    for action in actions {
        session.dispatch(action);
    }

    let state = session.state();
    assert_eq!(state.mode(), ThemeMode::Dark);
    assert_eq!(state.system_preference(), ColorScheme::Dark);
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("theme service unavailable"));

    let state = reduce(state.clone(), ThemeAction::ResetTheme);
    assert_eq!(state.mode(), ThemeMode::Light);
    assert!(state.error().is_none());
    assert_eq!(state.current_theme(), &default_theme());
}

#[test]
fn palettes_without_dark_variant_keep_colors_in_dark_mode() {
    let mut session = ThemeStore::default().with_registry(ThemeRegistry::with_builtin().unwrap());

    session.select_theme("midnight").unwrap();
    let light = session.tokens();
    session.dispatch(ThemeAction::SetMode(ThemeMode::Dark));

    assert_eq!(session.tokens(), light);
    // Midnight has no surfaceAlt, so muted falls back to backgroundAlt.
    assert_eq!(light.get(MUTED_TOKEN).map(|c| c.as_str()), Some("#111831"));
}

#[test]
fn stylesheet_for_active_palette() {
    let session = ThemeStore::default();
    let css = session.tokens().to_css(":root");

    assert!(css.starts_with(":root {\n"));
    assert!(css.contains("--aurora-primary: #6d28d9;"));
    assert!(css.contains("--aurora-muted: #f1f0fb;"));
}
