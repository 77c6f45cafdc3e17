use super::super::state::{App, NAV_CLEARANCE_PX};
use super::Effect;
use crate::content::SectionId;
use tracing::{debug, info};

impl App {
    /// Direct nav activation: the clicked dot becomes active immediately and
    /// the page scrolls to its target; the centerline tracker later confirms
    /// or reasserts the focus as the scroll settles.
    pub(super) fn handle_nav_dot_clicked(&mut self, id: SectionId, effects: &mut Vec<Effect>) {
        if !self.nav.dots.contains(&id) {
            return;
        }
        self.nav.set_active(id);

        let target = if id == SectionId::Hero {
            0.0
        } else {
            let Some(section) = self.layout.section(id) else {
                return;
            };
            let target = (section.top - NAV_CLEARANCE_PX).max(0.0);
            match self.viewport.max_scroll() {
                Some(max) => target.min(max),
                None => target,
            }
        };
        info!(section = %id, target, "Navigating to section");
        effects.push(Effect::ScrollTo(target));
    }

    pub(super) fn handle_nav_toggle_clicked(&mut self) {
        self.nav.expanded = !self.nav.expanded;
        debug!(expanded = self.nav.expanded, "Toggled nav rail");
    }
}

#[cfg(test)]
mod tests {
    use super::super::Effect;
    use super::*;
    use crate::config::AppConfig;
    use crate::content::parse_portfolio;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"
[hero]
name = "Test Person"

[about]
paragraphs = ["Hi."]

[[projects]]
name = "thing"
"#;

    fn build_test_app() -> App {
        let portfolio = parse_portfolio(SAMPLE).unwrap();
        let (app, _task) = App::bootstrap(
            portfolio,
            AppConfig::default(),
            PathBuf::from("/tmp/folio-nav-test.toml"),
        );
        app
    }

    fn scroll_target(effects: &[Effect]) -> Option<f32> {
        effects.iter().find_map(|effect| match effect {
            Effect::ScrollTo(y) => Some(*y),
            _ => None,
        })
    }

    #[test]
    fn hero_click_scrolls_to_origin() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_nav_dot_clicked(SectionId::Hero, &mut effects);
        assert_eq!(scroll_target(&effects), Some(0.0));
        assert_eq!(app.nav.active, Some(SectionId::Hero));
    }

    #[test]
    fn section_click_scrolls_to_top_minus_clearance() {
        let mut app = build_test_app();
        let top = app.layout.section(SectionId::Projects).unwrap().top;
        assert!(top > NAV_CLEARANCE_PX);

        let mut effects = Vec::new();
        app.handle_nav_dot_clicked(SectionId::Projects, &mut effects);
        assert_eq!(scroll_target(&effects), Some(top - NAV_CLEARANCE_PX));
        assert_eq!(app.nav.active, Some(SectionId::Projects));
    }

    #[test]
    fn active_state_updates_synchronously_with_the_click() {
        let mut app = build_test_app();
        app.nav.set_active(SectionId::Hero);
        let mut effects = Vec::new();
        app.handle_nav_dot_clicked(SectionId::About, &mut effects);
        assert_eq!(app.nav.active, Some(SectionId::About));
        assert!(!app.nav.is_active(SectionId::Hero));
    }

    #[test]
    fn clicking_an_absent_section_is_a_no_op() {
        let mut app = build_test_app();
        let mut effects = Vec::new();
        app.handle_nav_dot_clicked(SectionId::Contact, &mut effects);
        assert!(effects.is_empty());
        assert_eq!(app.nav.active, None);
    }

    #[test]
    fn nav_toggle_flips_expansion() {
        let mut app = build_test_app();
        assert!(!app.nav.expanded);
        app.handle_nav_toggle_clicked();
        assert!(app.nav.expanded);
        app.handle_nav_toggle_clicked();
        assert!(!app.nav.expanded);
    }

    #[test]
    fn neighbor_steps_are_clamped_to_the_rail() {
        let mut app = build_test_app();
        assert_eq!(app.nav.neighbor(1), Some(SectionId::Hero));
        app.nav.set_active(SectionId::Hero);
        assert_eq!(app.nav.neighbor(1), Some(SectionId::About));
        assert_eq!(app.nav.neighbor(-1), Some(SectionId::Hero));
        app.nav.set_active(SectionId::Projects);
        assert_eq!(app.nav.neighbor(1), Some(SectionId::Projects));
    }
}
