//! Unicode Finder - iced UI entry point.
//!
//! Build with: cargo build --features iced-ui

use iced::{window, Size};
use unicode_finder::ui::FinderApp;
use unicode_finder::Config;

fn main() -> iced::Result {
    unicode_finder::logging::init();
    tracing::info!("Starting with iced UI");

    let appearance = Config::load().appearance;

    let window_settings = window::Settings {
        size: Size::new(
            appearance.window_width as f32,
            appearance.window_height as f32,
        ),
        min_size: Some(Size::new(320.0, 240.0)),
        position: window::Position::Centered,
        ..Default::default()
    };

    iced::application("Unicode Finder", FinderApp::update, FinderApp::view)
        .subscription(FinderApp::subscription)
        .window(window_settings)
        .run_with(FinderApp::new)
}
