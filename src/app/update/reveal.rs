use super::super::state::{
    App, REVEAL_VIEWPORT_FRACTION, TIMELINE_REVEAL_MARGIN_PX, TIMELINE_STAGGER_STEP,
};
use super::Effect;
use tracing::debug;

impl App {
    /// Apply both reveal predicates to the current scroll state. The two
    /// notions of "in view" are deliberately independent: the section rule
    /// compares viewport-relative tops against a fraction of the viewport,
    /// the timeline rule compares absolute tops against the viewport bottom.
    /// Both are monotonic; nothing here ever clears a flag.
    pub(super) fn run_reveal_pass(&mut self, effects: &mut Vec<Effect>) {
        let scroll_y = self.viewport.scroll_y;
        let viewport_height = self.viewport.viewport_height;

        let reveal_limit = viewport_height * REVEAL_VIEWPORT_FRACTION;
        for (index, section) in self.layout.sections.iter().enumerate() {
            if self.reveal.sections[index] {
                continue;
            }
            if section.top - scroll_y < reveal_limit {
                self.reveal.sections[index] = true;
                debug!(section = %section.id, "Section revealed");
            }
        }

        let stagger_limit = scroll_y + viewport_height - TIMELINE_REVEAL_MARGIN_PX;
        for (index, item) in self.layout.timeline_items.iter().enumerate() {
            let state = &mut self.reveal.timeline[index];
            if state.scheduled {
                continue;
            }
            if item.top < stagger_limit {
                state.scheduled = true;
                effects.push(Effect::RevealTimelineItem {
                    index,
                    delay: TIMELINE_STAGGER_STEP * index as u32,
                });
            }
        }
    }

    pub(super) fn handle_layout_settled(&mut self, effects: &mut Vec<Effect>) {
        debug!("Initial layout settled, running first reveal pass");
        self.run_reveal_pass(effects);
    }

    /// Late fallback so a freshly opened page shows the first dot active
    /// even before any scroll. A focus recorded in the meantime wins.
    pub(super) fn handle_hero_dot_primed(&mut self) {
        if self.nav.active.is_none() {
            if let Some(first) = self.nav.dots.first().copied() {
                debug!(section = %first, "Priming first nav dot active");
                self.nav.set_active(first);
            }
        }
    }

    /// A scheduled flip landed. Scheduled flips always run; the flip itself
    /// is idempotent, so a redundant landing is a no-op.
    pub(super) fn handle_timeline_item_revealed(&mut self, index: usize) {
        if let Some(item) = self.reveal.timeline.get_mut(index) {
            item.visible = true;
        }
    }
}
