//! Theme mapping for the portfolio viewer.

use crate::config::ThemeMode;
use iced::Theme as IcedTheme;

pub fn iced_theme(mode: ThemeMode) -> IcedTheme {
    match mode {
        ThemeMode::Day => IcedTheme::Light,
        ThemeMode::Night => IcedTheme::Dark,
    }
}
