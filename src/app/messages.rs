use crate::content::SectionId;
use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::AbsoluteOffset;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NavDotClicked(SectionId),
    NavToggleClicked,
    ToggleTheme,
    SkillTagClicked {
        group: usize,
        tag: usize,
    },
    ProjectCardEntered(usize),
    ProjectCardExited(usize),
    ProjectCardClicked(usize),
    /// The initial settling delay elapsed; run the first reveal pass.
    LayoutSettled,
    /// The hero-dot priming delay elapsed.
    HeroDotPrimed,
    /// A staggered timeline flip landed.
    TimelineItemRevealed(usize),
    Scrolled {
        offset: AbsoluteOffset,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}
