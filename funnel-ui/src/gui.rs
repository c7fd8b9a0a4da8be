use anyhow::Context as _;
use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    components::{FunnelWizardView, WindowPreferences},
    config::{AppConfig, ThemePreference},
    quit,
    theme::apply_theme,
};

pub fn setup_app(
    app_cx: &mut App,
    theme: ThemePreference,
) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);
    apply_theme(theme, app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Sales Funnel".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the wizard window, centred and sized from the config.
pub fn open_main_window(
    app_cx: &mut App,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let preferences = WindowPreferences::from(&config.window);
    let policy = config.input.policy;

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("Sales Funnel".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx
        .open_window(options, |window, cx| {
            let view = cx.new(|view_cx| FunnelWizardView::new(policy, window, view_cx));
            let root: AnyView = view.into();
            cx.new(|root_cx| Root::new(root, window, root_cx))
        })
        .context("failed to open the main window")?;

    info!(size = ?preferences.size, "main window opened");
    Ok(())
}
