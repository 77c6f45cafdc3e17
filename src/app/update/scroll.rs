use super::super::state::App;
use super::Effect;
use crate::content::SectionId;
use iced::widget::scrollable::AbsoluteOffset;
use tracing::debug;

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset: AbsoluteOffset,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.viewport.scroll_y = Self::sanitize_dimension(offset.y);
        self.viewport.viewport_width = Self::sanitize_dimension(viewport_width);
        self.viewport.viewport_height = Self::sanitize_dimension(viewport_height);
        self.viewport.content_height = Self::sanitize_dimension(content_height);

        if let Some(id) = self.focus_transition() {
            debug!(section = %id, "Section crossed the viewport centerline");
            self.nav.set_active(id);
        }

        self.run_reveal_pass(effects);
    }

    /// Discrete centerline-crossing event: `Some(id)` only when the section
    /// under the viewport midpoint differs from the active dot. The midpoint
    /// falling into an inter-section gap produces no event, leaving the
    /// previous focus in place.
    pub(super) fn focus_transition(&self) -> Option<SectionId> {
        let focused = self.layout.section_at(self.viewport.centerline())?;
        (self.nav.active != Some(focused)).then_some(focused)
    }

    pub(super) fn sanitize_dimension(value: f32) -> f32 {
        if value.is_finite() { value.max(0.0) } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::*;
    use crate::app::state::RevealState;
    use crate::config::AppConfig;
    use crate::content::parse_portfolio;
    use crate::layout::{PageLayout, SectionLayout, TimelineItemLayout};
    use std::path::PathBuf;

    const SAMPLE: &str = r#"
[hero]
name = "Test Person"

[about]
paragraphs = ["Hello there."]

[[experience]]
period = "2021"
role = "Engineer"

[[experience]]
period = "2022"
role = "Engineer II"

[[experience]]
period = "2023"
role = "Senior Engineer"

[[projects]]
name = "thing"
"#;

    fn fixed_layout() -> PageLayout {
        let sections = vec![
            SectionLayout {
                id: SectionId::Hero,
                top: 0.0,
                height: 600.0,
            },
            SectionLayout {
                id: SectionId::About,
                top: 650.0,
                height: 500.0,
            },
            SectionLayout {
                id: SectionId::Experience,
                top: 1200.0,
                height: 700.0,
            },
            SectionLayout {
                id: SectionId::Projects,
                top: 1950.0,
                height: 500.0,
            },
        ];
        let timeline_items = (0..3)
            .map(|i| TimelineItemLayout {
                top: 1300.0 + i as f32 * 150.0,
                height: 120.0,
            })
            .collect();
        PageLayout {
            sections,
            timeline_items,
            content_height: 2500.0,
        }
    }

    fn build_test_app() -> App {
        let portfolio = parse_portfolio(SAMPLE).unwrap();
        let (mut app, _task) = App::bootstrap(
            portfolio,
            AppConfig::default(),
            PathBuf::from("/tmp/folio-scroll-test.toml"),
        );
        app.layout = fixed_layout();
        app.reveal = RevealState::new(4, 3);
        app.viewport.viewport_width = 1200.0;
        app.viewport.viewport_height = 1000.0;
        app.viewport.content_height = app.layout.content_height;
        app
    }

    fn scroll_to(app: &mut App, y: f32) -> Vec<Effect> {
        let mut effects = Vec::new();
        app.handle_scrolled(
            AbsoluteOffset { x: 0.0, y },
            1200.0,
            1000.0,
            2500.0,
            &mut effects,
        );
        effects
    }

    #[test]
    fn reveal_is_monotonic_across_scrolling() {
        let mut app = build_test_app();
        scroll_to(&mut app, 1600.0);
        assert!(app.reveal.sections.iter().all(|revealed| *revealed));
        scroll_to(&mut app, 0.0);
        assert!(
            app.reveal.sections.iter().all(|revealed| *revealed),
            "scrolling back up must not un-reveal sections"
        );
    }

    #[test]
    fn reveal_boundary_is_strict() {
        // Experience sits at top 1200. With viewport height 1000 the
        // predicate is top - scroll_y < 800, so the section reveals at
        // scroll 401 (relative top 799) but not at scroll 400 (exactly 800).
        let mut app = build_test_app();
        scroll_to(&mut app, 401.0);
        assert!(app.reveal.sections[2], "one pixel inside the limit reveals");

        let mut app = build_test_app();
        scroll_to(&mut app, 400.0);
        assert!(
            !app.reveal.sections[2],
            "exactly at the limit must not reveal"
        );
    }

    #[test]
    fn centerline_crossing_moves_the_active_dot() {
        let mut app = build_test_app();
        scroll_to(&mut app, 0.0);
        // Centerline at 500 falls inside the hero (0..600).
        assert_eq!(app.nav.active, Some(SectionId::Hero));

        scroll_to(&mut app, 400.0);
        // Centerline at 900 falls inside about (650..1150).
        assert_eq!(app.nav.active, Some(SectionId::About));
    }

    #[test]
    fn centerline_in_a_gap_keeps_previous_focus() {
        let mut app = build_test_app();
        scroll_to(&mut app, 0.0);
        assert_eq!(app.nav.active, Some(SectionId::Hero));

        // Centerline at 620 lands in the gap between hero (ends 600) and
        // about (starts 650): no transition event.
        scroll_to(&mut app, 120.0);
        assert_eq!(app.nav.active, Some(SectionId::Hero));
    }

    #[test]
    fn at_most_one_dot_is_active_after_any_scroll() {
        let mut app = build_test_app();
        for y in [0.0, 300.0, 700.0, 1500.0, 2400.0, 100.0] {
            scroll_to(&mut app, y);
            let active_count = app
                .nav
                .dots
                .iter()
                .filter(|dot| app.nav.is_active(**dot))
                .count();
            assert!(active_count <= 1);
        }
    }

    #[test]
    fn non_finite_scroll_values_are_sanitized() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_scrolled(
            AbsoluteOffset {
                x: 0.0,
                y: f32::NAN,
            },
            f32::INFINITY,
            -5.0,
            2500.0,
            &mut effects,
        );
        assert_eq!(app.viewport.scroll_y, 0.0);
        assert_eq!(app.viewport.viewport_width, 0.0);
        assert_eq!(app.viewport.viewport_height, 0.0);
    }
}
