/// Monotonic reveal flags. Flags only ever transition to `true`; nothing in
/// the app resets them for the lifetime of the session.
pub struct RevealState {
    /// Parallel to `PageLayout::sections`.
    pub(in crate::app) sections: Vec<bool>,
    /// Parallel to `PageLayout::timeline_items`.
    pub(in crate::app) timeline: Vec<TimelineItemReveal>,
}

pub struct TimelineItemReveal {
    /// A staggered flip has been scheduled for this item.
    pub(in crate::app) scheduled: bool,
    /// The flip has landed and the item renders its content.
    pub(in crate::app) visible: bool,
}

impl RevealState {
    pub(in crate::app) fn new(section_count: usize, timeline_count: usize) -> Self {
        RevealState {
            sections: vec![false; section_count],
            timeline: (0..timeline_count)
                .map(|_| TimelineItemReveal {
                    scheduled: false,
                    visible: false,
                })
                .collect(),
        }
    }
}
