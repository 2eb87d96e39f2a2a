use clap::Parser;
use gpui::Application;
use tracing::{error, info};

use wage_ui::{config::Cli, logging, open_main_window, setup_app};

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    logging::init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        locale = %config.locale,
        "starting wage tracker"
    );

    Application::new().run(move |cx| {
        setup_app(cx);
        if let Err(error) = open_main_window(&config, cx) {
            error!(%error, "could not open the main window");
            cx.quit();
        }
    });

    Ok(())
}
