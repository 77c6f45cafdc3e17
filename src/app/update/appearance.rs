use super::super::state::App;
use super::Effect;
use crate::config::ThemeMode;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Toggled theme");
        effects.push(Effect::SaveUiPrefs);
    }

    /// Resize updates the cached viewport dimensions both reveal predicates
    /// read. Reveal flags are monotonic, so re-running the pass afterwards
    /// can only reveal more, never less. The next scroll event replaces the
    /// estimate with exact scrollable bounds.
    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if width.is_finite() && width > 0.0 {
            self.config.window_width = width;
            self.viewport.viewport_width = (width - self.nav.rail_width()).max(0.0);
        }
        if height.is_finite() && height > 0.0 {
            self.config.window_height = height;
            self.viewport.viewport_height = height;
        }
        debug!(width, height, "Window resized");
        self.run_reveal_pass(effects);
        effects.push(Effect::SaveUiPrefs);
    }

    pub(super) fn handle_window_moved(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        if x.is_finite() && y.is_finite() {
            self.config.window_pos_x = Some(x);
            self.config.window_pos_y = Some(y);
            effects.push(Effect::SaveUiPrefs);
        }
    }
}
