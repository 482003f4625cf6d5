use gpui::{
    App, AppContext, Application, Bounds, Context, FocusHandle, KeyBinding, Subscription,
    TitlebarOptions, Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px,
    size,
};

use gpui_aurora::theme::{
    ColorRole, ColorRoleExt, FileThemeStorage, ThemeAction, ThemeExt, ThemeMode, ThemeRegistry,
    ThemeStateOptions, ThemeStore, resolve_muted,
};

actions!(theme_preview, [ToggleMode, FollowSystem, NextTheme, ResetTheme]);

struct Preview {
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Render for Preview {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = cx.theme_state();
        let title = format!(
            "{} · {} ({})",
            state.current_theme().name,
            state.mode(),
            state.resolved_scheme()
        );
        let error = state.error().map(|error| error.to_string());

        let swatches: Vec<_> = ColorRole::ALL
            .iter()
            .filter_map(|role| {
                let color = role.resolve(cx)?;
                Some(
                    div()
                        .flex()
                        .gap(px(8.))
                        .items_center()
                        .child(div().size(px(18.)).rounded(px(4.)).bg(color))
                        .child(role.token()),
                )
            })
            .collect();

        let mut root = div()
            .key_context("ThemePreview")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|_, _: &ToggleMode, _window, cx| {
                cx.dispatch_theme(ThemeAction::ToggleMode);
            }))
            .on_action(cx.listener(|_, _: &FollowSystem, _window, cx| {
                cx.dispatch_theme(ThemeMode::System);
            }))
            .on_action(cx.listener(|_, _: &ResetTheme, _window, cx| {
                cx.dispatch_theme(ThemeAction::ResetTheme);
            }))
            .on_action(cx.listener(|_, _: &NextTheme, _window, cx| {
                cx.update_global::<ThemeStore, _>(|store, _cx| {
                    let current = store.state().current_theme().id.clone();
                    if let Some(next) = store.registry().next_after(&current).cloned() {
                        store.dispatch(ThemeAction::SetTheme(next));
                    }
                });
            }))
            .size_full()
            .flex()
            .flex_col()
            .gap(px(6.))
            .p(px(32.))
            .child(title)
            .children(swatches);

        if let Some(color) = ColorRole::Background.resolve(cx) {
            root = root.bg(color);
        }
        if let Some(color) = ColorRole::Foreground.resolve(cx) {
            root = root.text_color(color);
        }
        if let Some(muted) = resolve_muted(cx) {
            root = root.child(div().h(px(24.)).rounded(px(6.)).bg(muted));
        }
        if let Some(error) = error {
            root = root.child(error);
        }

        root
    }
}

fn main() -> anyhow::Result<()> {
    let registry = ThemeRegistry::with_builtin()?;
    let storage = FileThemeStorage::new(std::env::temp_dir().join("gpui_aurora"));

    let mut store = ThemeStore::new(ThemeStateOptions {
        initial_mode: ThemeMode::System,
        ..Default::default()
    })
    .with_registry(registry)
    .with_storage(storage);
    store.restore();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .run(move |cx: &mut App| {
            gpui_aurora::init(cx, store);

            cx.bind_keys([
                KeyBinding::new("t", ToggleMode, Some("ThemePreview")),
                KeyBinding::new("s", FollowSystem, Some("ThemePreview")),
                KeyBinding::new("n", NextTheme, Some("ThemePreview")),
                KeyBinding::new("r", ResetTheme, Some("ThemePreview")),
            ]);

            let bounds = Bounds::centered(None, size(px(520.), px(820.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let appearance = gpui_aurora::init_for_window(window, cx);

                    cx.new(|cx| {
                        let focus_handle = cx.focus_handle();
                        focus_handle.focus(window, cx);

                        Preview {
                            focus_handle,
                            _subscriptions: vec![
                                appearance,
                                cx.observe_global::<ThemeStore>(|_, cx| cx.notify()),
                            ],
                        }
                    })
                },
            )
            .unwrap();

            cx.activate(true);
        });

    Ok(())
}
