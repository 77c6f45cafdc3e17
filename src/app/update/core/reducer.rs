use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    /// Pure state transition: every message mutates the model and may queue
    /// effects, but performs no I/O itself.
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NavDotClicked(id) => self.handle_nav_dot_clicked(id, &mut effects),
            Message::NavToggleClicked => self.handle_nav_toggle_clicked(),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::SkillTagClicked { group, tag } => self.handle_skill_tag_clicked(group, tag),
            Message::ProjectCardEntered(index) => self.handle_project_card_entered(index),
            Message::ProjectCardExited(index) => self.handle_project_card_exited(index),
            Message::ProjectCardClicked(index) => self.handle_project_card_clicked(index),
            Message::LayoutSettled => self.handle_layout_settled(&mut effects),
            Message::HeroDotPrimed => self.handle_hero_dot_primed(),
            Message::TimelineItemRevealed(index) => self.handle_timeline_item_revealed(index),
            Message::Scrolled {
                offset,
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_scrolled(
                offset,
                viewport_width,
                viewport_height,
                content_height,
                &mut effects,
            ),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y, &mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(mapped) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(mapped));
                }
            }
        }

        effects
    }
}
