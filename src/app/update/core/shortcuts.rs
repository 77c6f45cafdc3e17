use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Keyboard navigation mirrors the nav rail: arrows step between
    /// sections, Home returns to the first, `t` flips the theme. Anything
    /// with a command modifier is left alone.
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }
        match key.as_ref() {
            Key::Named(key::Named::ArrowDown) | Key::Named(key::Named::PageDown) => {
                self.nav.neighbor(1).map(Message::NavDotClicked)
            }
            Key::Named(key::Named::ArrowUp) | Key::Named(key::Named::PageUp) => {
                self.nav.neighbor(-1).map(Message::NavDotClicked)
            }
            Key::Named(key::Named::Home) => self.nav.dots.first().copied().map(Message::NavDotClicked),
            Key::Character("t") => Some(Message::ToggleTheme),
            _ => None,
        }
    }
}
