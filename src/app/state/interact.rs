use crate::content::Portfolio;

/// Hover and toggle state for the interactive flourishes: skill tag
/// selection, project card hover lift and expand.
pub struct InteractState {
    /// Parallel to the portfolio's skill groups and their tags.
    pub(in crate::app) active_tags: Vec<Vec<bool>>,
    pub(in crate::app) hovered_card: Option<usize>,
    /// Parallel to the portfolio's projects.
    pub(in crate::app) expanded_cards: Vec<bool>,
}

impl InteractState {
    pub(in crate::app) fn new(portfolio: &Portfolio) -> Self {
        InteractState {
            active_tags: portfolio
                .skills
                .iter()
                .map(|group| vec![false; group.tags.len()])
                .collect(),
            hovered_card: None,
            expanded_cards: vec![false; portfolio.projects.len()],
        }
    }
}
