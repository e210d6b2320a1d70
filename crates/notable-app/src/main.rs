//! Entry point for the Notable workspace demo.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

mod app;

const SHARED_CSS: &str = notable_ui::SHARED_CSS;
const APP_CSS: &str = include_str!("../assets/styles.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("notable_app=info,notable_ui=debug")
        .init();

    tracing::info!("Starting Notable workspace");

    let window = WindowBuilder::new()
        .with_title("Notable")
        .with_inner_size(LogicalSize::new(1180.0, 760.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(window).with_custom_head(format!(
                r#"<style>{}</style><style>{}</style>"#,
                SHARED_CSS, APP_CSS
            )),
        )
        .launch(app::App);
}
