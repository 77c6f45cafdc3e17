mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::content::Portfolio;
use iced::{Point, Size, window};
use std::path::PathBuf;

/// Helper to launch the app with the provided portfolio document.
pub fn run_app(
    portfolio: Portfolio,
    config: AppConfig,
    portfolio_path: PathBuf,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application("Folio Viewer", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| crate::theme::iced_theme(app.theme_mode()))
        .run_with(move || App::bootstrap(portfolio, config, portfolio_path))
}
