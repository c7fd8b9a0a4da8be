pub mod app;
pub mod components;
pub mod config;
pub mod csv_loader;
pub mod gui;
pub mod logging;
pub mod theme;
pub mod utils;

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::info;

actions!(sales_funnel, [Quit]);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
