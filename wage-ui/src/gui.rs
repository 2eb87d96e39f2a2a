use anyhow::{Context as _, Result};
use gpui::{
    App, AppContext, Bounds, IntoElement, KeyBinding, Menu, MenuItem, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::info;
use wage_core::Roster;

use crate::{
    Quit,
    components::{AppWindow, WindowPreferences, tracker_view::new_tracker},
    config::AppConfig,
    quit,
};

const WINDOW_TITLE: &str = "Resource Work Day Tracker";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

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
        name: "Wage Tracker".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the tracker window, centred on the primary display.
pub fn open_main_window(
    config: &AppConfig,
    app_cx: &mut App,
) -> Result<()> {
    let preferences = WindowPreferences::default();
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from(WINDOW_TITLE)),
            ..Default::default()
        }),
        ..Default::default()
    };

    let roster = Roster::standard().context("the built-in roster is invalid")?;
    let config = config.clone();
    app_cx
        .open_window(options, move |window, cx| {
            let tracker = new_tracker(&config, roster, window, cx);
            let app_window = cx.new(|cx| {
                let mut app_window = AppWindow::new(cx);
                app_window.set_content(move || tracker.clone().into_any_element());
                app_window
            });
            cx.new(|cx| Root::new(app_window, window, cx))
        })
        .context("failed to open the tracker window")?;

    info!(title = WINDOW_TITLE, "main window opened");
    Ok(())
}
