pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod models;
pub mod utils;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(wage_tracker, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
