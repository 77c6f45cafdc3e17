use super::constants::{NAV_RAIL_EXPANDED_WIDTH_PX, NAV_RAIL_WIDTH_PX};
use crate::content::SectionId;

/// Navigation rail model. `active` holds the currently focused section;
/// keeping it as a single option guarantees at most one dot is ever active.
pub struct NavState {
    pub(in crate::app) dots: Vec<SectionId>,
    pub(in crate::app) active: Option<SectionId>,
    pub(in crate::app) expanded: bool,
}

impl NavState {
    pub(in crate::app) fn new(dots: Vec<SectionId>, expanded: bool) -> Self {
        NavState {
            dots,
            active: None,
            expanded,
        }
    }

    pub(in crate::app) fn set_active(&mut self, id: SectionId) {
        self.active = Some(id);
    }

    pub(in crate::app) fn is_active(&self, id: SectionId) -> bool {
        self.active == Some(id)
    }

    pub(in crate::app) fn rail_width(&self) -> f32 {
        if self.expanded {
            NAV_RAIL_EXPANDED_WIDTH_PX
        } else {
            NAV_RAIL_WIDTH_PX
        }
    }

    /// The dot `step` positions away from the active one, clamped to the
    /// rail. With no active dot yet, stepping forward starts at the first.
    pub(in crate::app) fn neighbor(&self, step: isize) -> Option<SectionId> {
        if self.dots.is_empty() {
            return None;
        }
        let current = match self.active {
            Some(active) => self.dots.iter().position(|dot| *dot == active)?,
            None => return self.dots.first().copied(),
        };
        let target = current.saturating_add_signed(step).min(self.dots.len() - 1);
        self.dots.get(target).copied()
    }
}
