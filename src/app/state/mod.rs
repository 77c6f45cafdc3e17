mod constants;
mod interact;
mod nav;
mod reveal;
mod viewport;

use crate::cache::{UiPrefs, save_ui_prefs};
use crate::config::{AppConfig, ThemeMode};
use crate::content::Portfolio;
use crate::layout::{PageLayout, compute_layout};
use iced::Task;
use iced::widget::image;
use std::path::{Path, PathBuf};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use interact::InteractState;
pub(in crate::app) use nav::NavState;
pub(in crate::app) use reveal::RevealState;
pub(in crate::app) use viewport::ViewportState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) portfolio_path: PathBuf,
    pub(super) portfolio: Portfolio,
    pub(super) layout: PageLayout,
    pub(super) viewport: ViewportState,
    pub(super) nav: NavState,
    pub(super) reveal: RevealState,
    pub(super) interact: InteractState,
    pub(super) profile_image: Option<image::Handle>,
}

impl App {
    /// Build the initial state and the two one-shot deferred tasks: the
    /// layout settling pass and the hero dot priming. Both are
    /// fire-and-forget; neither holds a cancellation handle.
    pub fn bootstrap(
        portfolio: Portfolio,
        config: AppConfig,
        portfolio_path: PathBuf,
    ) -> (Self, Task<Message>) {
        let layout = compute_layout(&portfolio, &config);
        let viewport = ViewportState::new(
            (config.window_width - NAV_RAIL_WIDTH_PX).max(0.0),
            config.window_height,
        );
        let nav = NavState::new(portfolio.sections_present(), config.nav_rail_expanded);
        let reveal = RevealState::new(layout.sections.len(), layout.timeline_items.len());
        let interact = InteractState::new(&portfolio);
        let profile_image = portfolio
            .hero
            .profile_image
            .as_deref()
            .and_then(load_profile_image);

        let app = App {
            config,
            portfolio_path,
            portfolio,
            layout,
            viewport,
            nav,
            reveal,
            interact,
            profile_image,
        };

        let settle = Task::perform(
            async {
                tokio::time::sleep(LAYOUT_SETTLE_DELAY).await;
                Message::LayoutSettled
            },
            |message| message,
        );
        let prime = Task::perform(
            async {
                tokio::time::sleep(HERO_DOT_PRIME_DELAY).await;
                Message::HeroDotPrimed
            },
            |message| message,
        );
        (app, Task::batch([settle, prime]))
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.config.theme
    }

    pub(super) fn persist_ui_prefs(&self) {
        save_ui_prefs(&self.portfolio_path, &UiPrefs::from_config(&self.config));
    }
}

fn load_profile_image(raw: &str) -> Option<image::Handle> {
    let path = Path::new(raw);
    if path.exists() {
        Some(image::Handle::from_path(path))
    } else {
        tracing::warn!(path = %path.display(), "Profile image not found, hiding it");
        None
    }
}
