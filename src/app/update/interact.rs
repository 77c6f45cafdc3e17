use super::super::state::App;
use tracing::debug;

impl App {
    pub(super) fn handle_skill_tag_clicked(&mut self, group: usize, tag: usize) {
        if let Some(flag) = self
            .interact
            .active_tags
            .get_mut(group)
            .and_then(|tags| tags.get_mut(tag))
        {
            *flag = !*flag;
            debug!(group, tag, active = *flag, "Toggled skill tag");
        }
    }

    pub(super) fn handle_project_card_entered(&mut self, index: usize) {
        if index < self.interact.expanded_cards.len() {
            self.interact.hovered_card = Some(index);
        }
    }

    pub(super) fn handle_project_card_exited(&mut self, index: usize) {
        if self.interact.hovered_card == Some(index) {
            self.interact.hovered_card = None;
        }
    }

    pub(super) fn handle_project_card_clicked(&mut self, index: usize) {
        if let Some(flag) = self.interact.expanded_cards.get_mut(index) {
            *flag = !*flag;
            debug!(card = index, expanded = *flag, "Toggled project card");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::parse_portfolio;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"
[hero]
name = "Test Person"

[[skills]]
name = "Languages"
tags = ["Rust", "C"]

[[projects]]
name = "one"

[[projects]]
name = "two"
"#;

    fn build_test_app() -> App {
        let portfolio = parse_portfolio(SAMPLE).unwrap();
        let (app, _task) = App::bootstrap(
            portfolio,
            AppConfig::default(),
            PathBuf::from("/tmp/folio-interact-test.toml"),
        );
        app
    }

    #[test]
    fn skill_tags_toggle_independently() {
        let mut app = build_test_app();
        app.handle_skill_tag_clicked(0, 1);
        assert!(!app.interact.active_tags[0][0]);
        assert!(app.interact.active_tags[0][1]);
        app.handle_skill_tag_clicked(0, 1);
        assert!(!app.interact.active_tags[0][1]);
    }

    #[test]
    fn out_of_range_tag_clicks_are_ignored() {
        let mut app = build_test_app();
        app.handle_skill_tag_clicked(5, 0);
        app.handle_skill_tag_clicked(0, 99);
        assert!(app.interact.active_tags[0].iter().all(|flag| !flag));
    }

    #[test]
    fn hover_clears_only_for_the_card_that_was_left() {
        let mut app = build_test_app();
        app.handle_project_card_entered(0);
        assert_eq!(app.interact.hovered_card, Some(0));
        // The enter event of the next card can arrive before the previous
        // card's exit; the stale exit must not clear the newer hover.
        app.handle_project_card_entered(1);
        app.handle_project_card_exited(0);
        assert_eq!(app.interact.hovered_card, Some(1));
        app.handle_project_card_exited(1);
        assert_eq!(app.interact.hovered_card, None);
    }

    #[test]
    fn card_expansion_toggles_per_card() {
        let mut app = build_test_app();
        app.handle_project_card_clicked(1);
        assert!(!app.interact.expanded_cards[0]);
        assert!(app.interact.expanded_cards[1]);
        app.handle_project_card_clicked(1);
        assert!(!app.interact.expanded_cards[1]);
    }
}
